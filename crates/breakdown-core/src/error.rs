//! Error types for the breakdown library.

use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;

/// Every way a submission, a store operation or an export can fail.
///
/// Network-originating kinds keep their underlying [`LlmError`] as the source
/// for diagnostics; [`BreakdownError::user_message`] is what the user sees.
#[derive(Error, Debug)]
pub enum BreakdownError {
    /// The submitted task text was empty or whitespace only
    #[error("Task text is blank")]
    BlankInput,
    /// Transport or parse failure while asking whether the task is plannable
    #[error("Could not validate the task: {source}")]
    ValidationFailure {
        #[source]
        source: LlmError,
    },
    /// The model judged the text not to be a plannable task
    #[error("Task is not plannable: {reason}")]
    PlannabilityRejected { reason: String },
    /// Transport or parse failure while breaking the task down
    #[error("Could not break down the task: {source}")]
    DecompositionFailure {
        #[source]
        source: LlmError,
    },
    /// The model returned no usable steps
    #[error("Decomposition returned no steps")]
    EmptyDecomposition,
    /// A response arrived for a submission that is no longer current
    #[error("Submission {ticket} was superseded")]
    Superseded { ticket: u64 },
    /// A result arrived for the current submission in the wrong phase
    #[error("Submission {ticket} is {actual}, not {expected}")]
    OutOfOrder {
        ticket: u64,
        expected: &'static str,
        actual: &'static str,
    },
    /// The id generator cannot hand out another block of step ids
    #[error("No step ids left for a batch of {requested}")]
    IdsExhausted { requested: usize },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BreakdownError {
        BreakdownError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BreakdownError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    pub fn validation(source: LlmError) -> Self {
        Self::ValidationFailure { source }
    }

    pub fn decomposition(source: LlmError) -> Self {
        Self::DecompositionFailure { source }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// The fixed, user-facing text for this error.
    ///
    /// Network failures collapse into one generic message per phase; the
    /// technical detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::BlankInput => "Please enter a task.".to_string(),
            Self::ValidationFailure { .. } => {
                "Could not validate the task. Please try again.".to_string()
            }
            Self::PlannabilityRejected { reason } => {
                format!("This request is not a task that can be planned. Reason: {reason}")
            }
            Self::DecompositionFailure { .. } => {
                "Failed to break down the task. Please check your connection and try again."
                    .to_string()
            }
            Self::EmptyDecomposition => {
                "The AI could not break down the task. Try rephrasing it.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Whether this error came back from the language-model service.
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::ValidationFailure { .. } | Self::DecompositionFailure { .. }
        )
    }
}

/// Result type alias for breakdown operations
pub type Result<T> = std::result::Result<T, BreakdownError>;
