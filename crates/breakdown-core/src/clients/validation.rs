//! Plannability validation client.

use std::sync::Arc;

use log::debug;

use super::prompts::{validation_prompt, validation_schema, VALIDATION_TEMPERATURE};
use crate::{
    error::{BreakdownError, Result},
    llm::{GenerateRequest, LanguageModel, LlmError},
    models::ValidationResult,
};

/// Asks the model whether a piece of text is a plannable task.
#[derive(Clone)]
pub struct ValidationClient {
    llm: Arc<dyn LanguageModel>,
    model: String,
}

impl ValidationClient {
    pub fn new(llm: Arc<dyn LanguageModel>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue exactly one validation request.
    ///
    /// # Errors
    ///
    /// Returns `BreakdownError::ValidationFailure` on transport errors, on an
    /// empty (whitespace only) response and on a response that does not
    /// parse as a [`ValidationResult`]. An empty response is never read as
    /// "not plannable".
    pub async fn validate(&self, task: &str) -> Result<ValidationResult> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: validation_prompt(task),
            response_schema: validation_schema(),
            temperature: VALIDATION_TEMPERATURE,
        };

        let text = self
            .llm
            .generate(request)
            .await
            .map_err(BreakdownError::validation)?;

        let body = text.trim();
        if body.is_empty() {
            return Err(BreakdownError::validation(LlmError::EmptyResponse));
        }

        let verdict: ValidationResult = serde_json::from_str(body)
            .map_err(|e| BreakdownError::validation(LlmError::Json(e)))?;
        debug!(
            "validate: plannable={} reason={:?}",
            verdict.is_plannable, verdict.reason
        );
        Ok(verdict)
    }
}
