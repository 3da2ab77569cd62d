//! Line parser for the interactive session.
//!
//! Each input line is either one of the session commands below or free text,
//! which is submitted as a new task.

use std::path::PathBuf;

use breakdown_core::StepId;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands accepted at the session prompt
#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// Break a task down (any other text does the same)
    Plan {
        #[arg(required = true, num_args = 1..)]
        task: Vec<String>,
    },
    /// Mark a step done, or not done again
    #[command(alias = "t")]
    Toggle { id: StepId },
    /// Move a step to the position of another step
    #[command(alias = "mv")]
    Move { dragged: StepId, target: StepId },
    /// Show the checklist
    #[command(alias = "ls")]
    Show,
    /// Save the checklist as Markdown (defaults to the current directory)
    Export { dir: Option<PathBuf> },
    /// List the session commands
    Help,
    /// Leave the session
    #[command(alias = "exit", alias = "q")]
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, clap::Error> {
        let line = line.trim();
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = words.first() else {
            return Ok(None);
        };

        if SessionLine::command().find_subcommand(first).is_none() {
            return Ok(Some(Self::Plan {
                task: vec![line.to_string()],
            }));
        }

        SessionLine::try_parse_from(words).map(|parsed| Some(parsed.command))
    }

    /// The task text of a [`SessionCommand::Plan`].
    pub fn task_text(task: &[String]) -> String {
        task.join(" ")
    }

    pub fn help() -> String {
        SessionLine::command().render_help().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_is_a_plan() {
        let parsed = SessionCommand::parse("  clean the   garage ").unwrap();
        assert_eq!(
            parsed,
            Some(SessionCommand::Plan {
                task: vec!["clean the   garage".to_string()]
            })
        );
    }

    #[test]
    fn test_blank_line_is_nothing() {
        assert_eq!(SessionCommand::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_commands_and_aliases() {
        assert_eq!(
            SessionCommand::parse("toggle 3").unwrap(),
            Some(SessionCommand::Toggle { id: StepId(3) })
        );
        assert_eq!(
            SessionCommand::parse("mv #4 #1").unwrap(),
            Some(SessionCommand::Move {
                dragged: StepId(4),
                target: StepId(1)
            })
        );
        assert_eq!(
            SessionCommand::parse("export").unwrap(),
            Some(SessionCommand::Export { dir: None })
        );
        assert_eq!(SessionCommand::parse("exit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(
            SessionCommand::parse("plan tidy my desk").unwrap(),
            Some(SessionCommand::Plan {
                task: vec!["tidy".to_string(), "my".to_string(), "desk".to_string()]
            })
        );
    }

    #[test]
    fn test_bad_step_id_is_an_error() {
        assert!(SessionCommand::parse("toggle first").is_err());
        assert!(SessionCommand::parse("move 1").is_err());
    }

    #[test]
    fn test_help_lists_commands() {
        let help = SessionCommand::help();
        assert!(help.contains("toggle"));
        assert!(help.contains("export"));
    }
}
