//! Display formatting for steps, progress and user-facing notices.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers in this module format them in context: the interactive
//! checklist view, the exported document and status banners.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │    Markdown     │
//! │ (Step, Progress)│───▶│ (ChecklistView, │───▶│ (terminal/file) │
//! │                 │    │  Banner)        │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use breakdown_core::display::Banner;
//!
//! let banner = Banner::error("Please enter a task.");
//! assert_eq!(format!("{}", banner), "**Error:** Please enter a task.\n");
//! ```

pub mod collections;
pub mod models;
pub mod status;

pub use collections::ChecklistView;
pub use status::{Banner, BannerKind};
