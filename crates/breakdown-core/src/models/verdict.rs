//! Response shapes returned by the language model.

use serde::{Deserialize, Serialize};

/// Plannability verdict for a piece of task text.
///
/// `reason` is only meaningful when `is_plannable` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_plannable: bool,
    pub reason: String,
}

impl ValidationResult {
    pub fn plannable() -> Self {
        Self {
            is_plannable: true,
            reason: String::new(),
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            is_plannable: false,
            reason: reason.into(),
        }
    }
}

/// One element of the decomposition array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedStep {
    pub task: String,
}
