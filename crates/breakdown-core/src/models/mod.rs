//! Data models for steps, verdicts and derived checklist state.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so the data structures stay free of
//! presentation concerns.
//!
//! - [`Step`]: one short action in the plan, owned by the
//!   [`TaskList`](crate::store::TaskList)
//! - [`ValidationResult`]: the plannability verdict returned by the model
//! - [`DecomposedStep`]: one element of the decomposition response
//! - [`Progress`]: completed/total counts, derived on read
//! - [`TextDirection`]: layout direction detected from the task text
//!
//! # Examples
//!
//! ```rust
//! use breakdown_core::models::{Step, StepId, TextDirection};
//!
//! let step = Step::new(StepId(1), "Open the garage door");
//! assert!(!step.completed);
//! println!("{}", step); // - [ ] Open the garage door
//!
//! assert_eq!(TextDirection::detect("לנקות את המוסך"), TextDirection::RightToLeft);
//! ```

pub mod direction;
pub mod progress;
pub mod step;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use direction::TextDirection;
pub use progress::Progress;
pub use step::{Step, StepId};
pub use verdict::{DecomposedStep, ValidationResult};
