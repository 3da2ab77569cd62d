//! Language-model transport.
//!
//! The clients in [`crate::clients`] only ever see the [`LanguageModel`]
//! trait: one request in, the raw response text out. [`GeminiClient`] is the
//! production implementation; tests substitute a scripted model.

pub mod client;
mod error;
mod gemini;
mod types;

pub use client::LanguageModel;
pub use error::LlmError;
pub use gemini::{GeminiClient, DEFAULT_BASE_URL};
pub use types::GenerateRequest;
