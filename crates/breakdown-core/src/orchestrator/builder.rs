//! Builder for creating and configuring Orchestrator instances.

use std::sync::Arc;

use super::Orchestrator;
use crate::{
    clients::{DecompositionClient, ValidationClient},
    config::LlmConfig,
    error::{BreakdownError, Result},
    llm::{GeminiClient, LanguageModel},
    store::{IdGenerator, TaskList},
};

/// Builder for creating and configuring Orchestrator instances.
#[derive(Default)]
pub struct OrchestratorBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    validation_model: Option<String>,
    decomposition_model: Option<String>,
    language_model: Option<Arc<dyn LanguageModel>>,
    id_generator: Option<Box<dyn IdGenerator>>,
}

impl OrchestratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API credential. If not specified, it is read from
    /// `GEMINI_API_KEY` (or `API_KEY`).
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets a custom API base URL.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    pub fn with_validation_model<S: Into<String>>(mut self, model: Option<S>) -> Self {
        if let Some(model) = model {
            self.validation_model = Some(model.into());
        }
        self
    }

    pub fn with_decomposition_model<S: Into<String>>(mut self, model: Option<S>) -> Self {
        if let Some(model) = model {
            self.decomposition_model = Some(model.into());
        }
        self
    }

    /// Uses `model` instead of an HTTP client. No credential is needed.
    pub fn with_language_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.language_model = Some(model);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.id_generator = Some(Box::new(ids));
        self
    }

    /// Builds the configured orchestrator.
    ///
    /// # Errors
    ///
    /// Returns `BreakdownError::Configuration` if no credential is available
    /// or the HTTP client cannot be created.
    pub fn build(self) -> Result<Orchestrator> {
        let config = self.resolve_config()?;

        let llm: Arc<dyn LanguageModel> = match self.language_model {
            Some(model) => model,
            None => Arc::new(GeminiClient::from_config(&config).map_err(|e| {
                BreakdownError::configuration(format!("Failed to create HTTP client: {e}"))
            })?),
        };

        let tasks = match self.id_generator {
            Some(ids) => TaskList::with_boxed_id_generator(ids),
            None => TaskList::new(),
        };

        Ok(Orchestrator::new(
            ValidationClient::new(llm.clone(), config.validation_model),
            DecompositionClient::new(llm, config.decomposition_model),
            tasks,
        ))
    }

    fn resolve_config(&self) -> Result<LlmConfig> {
        let mut config = match (&self.api_key, &self.language_model) {
            (Some(key), _) => LlmConfig::new(key.clone()),
            (None, Some(_)) => LlmConfig::new(String::new()),
            (None, None) => LlmConfig::from_env()?,
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(model) = &self.validation_model {
            config.validation_model = model.clone();
        }
        if let Some(model) = &self.decomposition_model {
            config.decomposition_model = model.clone();
        }
        Ok(config)
    }
}
