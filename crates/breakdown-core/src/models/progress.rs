//! Checklist progress derived from the current task list.

use serde::Serialize;

/// Completed and total step counts.
///
/// Always computed from the list on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed: completed.min(total),
            total,
        }
    }

    /// Percentage of completed steps in `[0, 100]`, 0 for an empty list.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    /// Whether there is at least one step and all of them are done.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}
