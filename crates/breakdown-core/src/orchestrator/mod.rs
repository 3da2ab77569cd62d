//! Two-phase submission pipeline: validate, then decompose.
//!
//! The [`Orchestrator`] owns the task list and the transient
//! [`SubmissionState`]. A submission moves through these phases:
//!
//! ```text
//!            blank input
//!   Idle ───────────────────────▶ Idle (+ "enter a task")
//!    │
//!    │ begin
//!    ▼
//! Validating ──failure──────────▶ Idle (+ "could not validate")
//!    │      ──not plannable─────▶ Idle (+ rejection reason)
//!    │ plannable
//!    ▼
//! Decomposing ──failure─────────▶ Idle (+ "failed to break down")
//!    │        ──no steps────────▶ Idle (+ "try rephrasing")
//!    │ steps
//!    ▼
//!   Idle (list populated)
//! ```
//!
//! Exactly one outcome is surfaced per submission: either the list is
//! populated and the error is cleared, or the list stays empty and the error
//! holds one fixed message. Loading is true exactly while validating or
//! decomposing.
//!
//! Each submission gets a [`Ticket`]. Completing a phase with a ticket that
//! is no longer current (because a newer submission began or the old one was
//! cancelled) returns [`BreakdownError::Superseded`] without touching state.
//! A decomposition result offered before validation has passed returns
//! [`BreakdownError::OutOfOrder`], also without touching state.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use breakdown_core::{
//!     llm::{GenerateRequest, LanguageModel, LlmError},
//!     OrchestratorBuilder,
//! };
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl LanguageModel for Canned {
//!     async fn generate(&self, request: GenerateRequest) -> Result<String, LlmError> {
//!         Ok(if request.prompt.contains("Examine") {
//!             r#"{"isPlannable": true, "reason": ""}"#.to_string()
//!         } else {
//!             r#"[{"task": "Open the door"}, {"task": "Step outside"}]"#.to_string()
//!         })
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut orchestrator = OrchestratorBuilder::new()
//!     .with_language_model(Arc::new(Canned))
//!     .build()?;
//!
//! let count = orchestrator.submit("go for a walk").await?;
//! assert_eq!(count, 2);
//! assert_eq!(orchestrator.progress().total, 2);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod submission;


pub use builder::OrchestratorBuilder;
pub use submission::{Phase, SubmissionState, Ticket};

use log::{debug, info, warn};

use crate::{
    clients::{DecompositionClient, ValidationClient},
    error::{BreakdownError, Result},
    export::Export,
    models::{Progress, StepId, TextDirection, ValidationResult},
    store::TaskList,
};

/// Sequences validation, decomposition and population of the task list.
pub struct Orchestrator {
    validator: ValidationClient,
    decomposer: DecompositionClient,
    tasks: TaskList,
    submission: SubmissionState,
    generation: u64,
}

impl Orchestrator {
    pub(crate) fn new(
        validator: ValidationClient,
        decomposer: DecompositionClient,
        tasks: TaskList,
    ) -> Self {
        Self {
            validator,
            decomposer,
            tasks,
            submission: SubmissionState::default(),
            generation: 0,
        }
    }

    /// Run one full submission: at most one validation call, then at most
    /// one decomposition call, strictly in that order.
    ///
    /// Returns the number of steps stored.
    ///
    /// # Errors
    ///
    /// Every error is also reflected in [`SubmissionState::error`] as its
    /// user-facing message; the orchestrator is back in [`Phase::Idle`]
    /// whatever the outcome.
    pub async fn submit(&mut self, text: &str) -> Result<usize> {
        let ticket = self.begin(text)?;
        let task = self.submission.raw_text.clone();

        let verdict = self.validator.validate(&task).await;
        self.complete_validation(ticket, verdict)?;

        let steps = self.decomposer.decompose(&task).await;
        self.complete_decomposition(ticket, steps)
    }

    /// Start a submission for `text`.
    ///
    /// Any submission still in flight is superseded and the list is cleared.
    /// Blank input then sets the "enter a task" error and stays idle;
    /// otherwise the previous error is cleared and the phase becomes
    /// [`Phase::Validating`].
    pub fn begin(&mut self, text: &str) -> Result<Ticket> {
        self.submission.raw_text = text.to_string();

        self.generation += 1;
        self.tasks.clear();

        if text.trim().is_empty() {
            return Err(self.settle(BreakdownError::BlankInput));
        }

        self.submission.error = None;
        self.submission.phase = Phase::Validating;
        debug!("begin: submission {} validating", self.generation);
        Ok(Ticket(self.generation))
    }

    /// Apply the validation outcome for `ticket`.
    ///
    /// On success the phase becomes [`Phase::Decomposing`] and the caller
    /// should run the decomposition.
    pub fn complete_validation(
        &mut self,
        ticket: Ticket,
        verdict: Result<ValidationResult>,
    ) -> Result<()> {
        self.ensure_current(ticket, Phase::Validating)?;

        match verdict {
            Err(err) => Err(self.settle(err)),
            Ok(verdict) if !verdict.is_plannable => {
                Err(self.settle(BreakdownError::PlannabilityRejected {
                    reason: verdict.reason,
                }))
            }
            Ok(_) => {
                self.submission.phase = Phase::Decomposing;
                debug!("complete_validation: submission {} decomposing", ticket.0);
                Ok(())
            }
        }
    }

    /// Apply the decomposition outcome for `ticket`, populating the list on
    /// success. Returns the number of steps stored.
    pub fn complete_decomposition(
        &mut self,
        ticket: Ticket,
        steps: Result<Vec<String>>,
    ) -> Result<usize> {
        self.ensure_current(ticket, Phase::Decomposing)?;

        match steps {
            Err(err) => Err(self.settle(err)),
            Ok(steps) if steps.is_empty() => Err(self.settle(BreakdownError::EmptyDecomposition)),
            Ok(steps) => {
                if let Err(err) = self.tasks.replace(steps) {
                    return Err(self.settle(err));
                }
                self.submission.phase = Phase::Idle;
                info!(
                    "Submission {} produced {} step(s)",
                    ticket.0,
                    self.tasks.len()
                );
                Ok(self.tasks.len())
            }
        }
    }

    /// Abandon the submission in flight, if any. Late results for it are
    /// discarded.
    pub fn cancel(&mut self) {
        if self.submission.is_loading() {
            info!("Submission {} cancelled", self.generation);
        }
        self.generation += 1;
        self.submission.phase = Phase::Idle;
    }

    /// Update the raw task text without submitting it.
    pub fn set_text(&mut self, text: &str) {
        self.submission.raw_text = text.to_string();
    }

    pub fn toggle(&mut self, id: StepId) -> bool {
        self.tasks.toggle(id)
    }

    pub fn reorder(&mut self, dragged: StepId, target: StepId) -> bool {
        self.tasks.reorder(dragged, target)
    }

    pub fn progress(&self) -> Progress {
        self.tasks.progress()
    }

    /// Render the current list under the current task text. `None` when the
    /// list is empty.
    pub fn export(&self) -> Option<Export> {
        Export::render(&self.submission.raw_text, self.tasks.steps())
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Mutable access for gesture controllers such as
    /// [`DragGesture`](crate::store::DragGesture).
    pub fn tasks_mut(&mut self) -> &mut TaskList {
        &mut self.tasks
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn title(&self) -> &str {
        &self.submission.raw_text
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.submission.error()
    }

    pub fn direction(&self) -> TextDirection {
        self.submission.direction()
    }

    /// Accept a result only for the current ticket and only in `expected`.
    fn ensure_current(&self, ticket: Ticket, expected: Phase) -> Result<()> {
        let actual = self.submission.phase;
        if ticket.0 != self.generation || !actual.is_loading() {
            debug!("discarding result for stale submission {}", ticket.0);
            return Err(BreakdownError::Superseded { ticket: ticket.0 });
        }
        if actual != expected {
            debug!(
                "discarding {} result for submission {} while {}",
                expected.as_str(),
                ticket.0,
                actual.as_str()
            );
            return Err(BreakdownError::OutOfOrder {
                ticket: ticket.0,
                expected: expected.as_str(),
                actual: actual.as_str(),
            });
        }
        Ok(())
    }

    /// Record `err` as the surfaced outcome and return to idle.
    fn settle(&mut self, err: BreakdownError) -> BreakdownError {
        if err.is_network() {
            warn!("{err}");
        } else {
            debug!("settle: {err}");
        }
        self.submission.error = Some(err.user_message());
        self.submission.phase = Phase::Idle;
        err
    }
}
