//! LanguageModel trait definition

use async_trait::async_trait;

use super::{GenerateRequest, LlmError};

/// Stateless language model: every call is an independent single attempt.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send one request and return the response text, untrimmed.
    async fn generate(&self, request: GenerateRequest) -> Result<String, LlmError>;
}
