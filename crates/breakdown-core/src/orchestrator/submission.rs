//! Transient state of the current submission.

use crate::models::TextDirection;

/// Pipeline phase of the current submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Decomposing,
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        !matches!(self, Phase::Idle)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Validating => "validating",
            Phase::Decomposing => "decomposing",
        }
    }
}

/// Handle identifying one submission attempt.
///
/// Results carrying a ticket other than the current one are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub(crate) u64);

impl Ticket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Raw input, phase and the last user-facing error.
///
/// Loading and direction are derived on read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub(crate) raw_text: String,
    pub(crate) phase: Phase,
    pub(crate) error: Option<String>,
}

impl SubmissionState {
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn direction(&self) -> TextDirection {
        TextDirection::detect(&self.raw_text)
    }
}
