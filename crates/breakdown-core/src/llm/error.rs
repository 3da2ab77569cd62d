//! LLM error types

use thiserror::Error;

/// Errors that can occur while talking to the language model
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Prompt blocked by the model: {0}")]
    Blocked(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LlmError {
    /// Whether the service answered but the payload could not be used.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            LlmError::EmptyResponse | LlmError::InvalidResponse(_) | LlmError::Json(_)
        )
    }
}
