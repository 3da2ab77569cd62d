//! Task decomposition client.

use std::sync::Arc;

use log::{debug, warn};

use super::prompts::{decomposition_prompt, decomposition_schema, DECOMPOSITION_TEMPERATURE};
use crate::{
    error::{BreakdownError, Result},
    llm::{GenerateRequest, LanguageModel, LlmError},
    models::DecomposedStep,
};

/// Asks the model to break a task into ordered step descriptions.
#[derive(Clone)]
pub struct DecompositionClient {
    llm: Arc<dyn LanguageModel>,
    model: String,
}

impl DecompositionClient {
    pub fn new(llm: Arc<dyn LanguageModel>, model: impl Into<String>) -> Self {
        Self {
            llm,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Issue exactly one decomposition request.
    ///
    /// An empty response body yields an empty sequence rather than an error,
    /// as does a response whose items are all blank. Descriptions are
    /// trimmed and returned in response order.
    ///
    /// # Errors
    ///
    /// Returns `BreakdownError::DecompositionFailure` on transport errors and
    /// on a non-empty response that does not parse as an array of
    /// `{ task }` objects.
    pub async fn decompose(&self, task: &str) -> Result<Vec<String>> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: decomposition_prompt(task),
            response_schema: decomposition_schema(),
            temperature: DECOMPOSITION_TEMPERATURE,
        };

        let text = self
            .llm
            .generate(request)
            .await
            .map_err(BreakdownError::decomposition)?;

        let body = text.trim();
        if body.is_empty() {
            warn!("decompose: model returned an empty response");
            return Ok(Vec::new());
        }

        let items: Vec<DecomposedStep> = serde_json::from_str(body)
            .map_err(|e| BreakdownError::decomposition(LlmError::Json(e)))?;
        let received = items.len();

        let steps: Vec<String> = items
            .into_iter()
            .map(|item| item.task.trim().to_string())
            .filter(|description| !description.is_empty())
            .collect();

        if steps.len() != received {
            debug!(
                "decompose: dropped {} blank item(s) of {received}",
                received - steps.len()
            );
        }
        Ok(steps)
    }
}
