//! Step model definition and related functionality.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BreakdownError;

/// Identity of a step, unique within a [`TaskList`](crate::store::TaskList).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StepId(pub u64);

impl FromStr for StepId {
    type Err = BreakdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        trimmed.parse::<u64>().map(StepId).map_err(|_| {
            BreakdownError::invalid_input("id").with_reason(format!("'{s}' is not a step id"))
        })
    }
}

/// Represents an individual step of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Identifier assigned when the batch was created
    pub id: StepId,

    /// Short, actionable description of the step
    pub description: String,

    /// Whether the user has checked the step off
    #[serde(default)]
    pub completed: bool,
}

impl Step {
    /// Create a new, not yet completed step.
    pub fn new(id: StepId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
