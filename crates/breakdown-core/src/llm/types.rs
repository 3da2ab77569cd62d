//! Request types shared by all language-model implementations.

use serde_json::Value;

/// A single structured-output completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Model identifier, e.g. `gemini-2.5-flash`
    pub model: String,
    /// Full instruction text, task embedded
    pub prompt: String,
    /// JSON schema the response must match
    pub response_schema: Value,
    pub temperature: f32,
}
