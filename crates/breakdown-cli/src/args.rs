use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Break a big goal into small, ordered steps
///
/// Breakdown asks a hosted language model whether the text you type is a
/// task that can be planned and, if it is, splits it into steps of about two
/// minutes each. The steps form a checklist that can be ticked off,
/// reordered and exported as Markdown. The API key is read from
/// GEMINI_API_KEY (or API_KEY).
#[derive(Parser)]
#[command(version, about, name = "breakdown")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Base URL of the generateContent API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Model used to decide whether the text is a plannable task
    #[arg(long, global = true)]
    pub validation_model: Option<String>,

    /// Model used to split the task into steps
    #[arg(long, global = true)]
    pub decomposition_model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Breakdown CLI
///
/// Without a command an interactive session is started.
#[derive(Subcommand)]
pub enum Commands {
    /// Break a single task down and print the checklist
    #[command(alias = "p")]
    Plan {
        /// The task to break down
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,

        /// Save the checklist as Markdown into this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },
    /// Start an interactive session
    #[command(alias = "i")]
    Interactive,
}
