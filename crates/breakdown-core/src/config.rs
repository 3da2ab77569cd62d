//! Language-model configuration.

use std::env;

use crate::{
    clients::prompts::{DEFAULT_DECOMPOSITION_MODEL, DEFAULT_VALIDATION_MODEL},
    error::{BreakdownError, Result},
    llm::DEFAULT_BASE_URL,
};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Checked when [`API_KEY_ENV`] is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Settings for the two language-model calls.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub validation_model: String,
    pub decomposition_model: String,
}

impl LlmConfig {
    /// Default endpoints and models with the given credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            validation_model: DEFAULT_VALIDATION_MODEL.to_string(),
            decomposition_model: DEFAULT_DECOMPOSITION_MODEL.to_string(),
        }
    }

    /// Build a configuration with the credential read from the environment.
    ///
    /// # Errors
    ///
    /// Returns `BreakdownError::Configuration` when neither variable is set
    /// to a non-empty value.
    pub fn from_env() -> Result<Self> {
        api_key_from_env().map(Self::new)
    }
}

// The credential never ends up in logs.
impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("validation_model", &self.validation_model)
            .field("decomposition_model", &self.decomposition_model)
            .finish()
    }
}

fn api_key_from_env() -> Result<String> {
    [API_KEY_ENV, FALLBACK_API_KEY_ENV]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .ok_or_else(|| {
            BreakdownError::configuration(format!(
                "API key not found. Set the {API_KEY_ENV} environment variable."
            ))
        })
}
