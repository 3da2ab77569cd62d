//! The two language-model contracts: plannability validation and
//! decomposition into steps.
//!
//! Validation is the cheap gate in front of the more expensive
//! decomposition call; the [`Orchestrator`](crate::orchestrator::Orchestrator)
//! never starts the second call unless the first one approved the task.

pub mod decomposition;
pub mod prompts;
pub mod validation;

pub use decomposition::DecompositionClient;
pub use validation::ValidationClient;
