//! Core library for the Breakdown task decomposition application.
//!
//! Breakdown takes a goal typed by the user, asks a hosted language model
//! whether it is a plannable task at all, and if so asks it to break the
//! task into short, ordered steps. The steps become an interactive checklist
//! that can be reordered, checked off and exported as Markdown.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌──────────────┐
//! │  Validation  │──▶│  Decomposition   │──▶│  Task List   │
//! │    Client    │   │      Client      │   │    Store     │
//! └──────────────┘   └──────────────────┘   └──────────────┘
//!         ▲                   ▲                     ▲
//!         └────────── Orchestrator ─────────────────┘
//! ```
//!
//! - [`llm`]: the [`LanguageModel`](llm::LanguageModel) seam and the Gemini
//!   HTTP client
//! - [`clients`]: the validation and decomposition contracts, prompts and
//!   response schemas
//! - [`store`]: the ordered [`TaskList`] and the [`DragGesture`] controller
//! - [`orchestrator`]: the validate-then-decompose pipeline and submission
//!   state
//! - [`export`]: Markdown checklist export with file-name sanitizing
//! - [`display`]: Display implementations and views for the terminal
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use breakdown_core::OrchestratorBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads GEMINI_API_KEY from the environment
//! let mut orchestrator = OrchestratorBuilder::new().build()?;
//!
//! match orchestrator.submit("clean the garage").await {
//!     Ok(count) => println!("{count} steps"),
//!     Err(_) => println!("{}", orchestrator.error().unwrap_or_default()),
//! }
//!
//! let first = orchestrator.tasks().steps()[0].id;
//! orchestrator.toggle(first);
//! println!("{}", orchestrator.progress());
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod llm;
pub mod models;
pub mod orchestrator;
pub mod store;

// Re-export commonly used types
pub use clients::{DecompositionClient, ValidationClient};
pub use config::LlmConfig;
pub use display::{Banner, BannerKind, ChecklistView};
pub use error::{BreakdownError, Result};
pub use export::{sanitize_file_stem, Export};
pub use models::{Progress, Step, StepId, TextDirection, ValidationResult};
pub use orchestrator::{Orchestrator, OrchestratorBuilder, Phase, SubmissionState, Ticket};
pub use store::{DragGesture, IdGenerator, SequentialIds, TaskList};
