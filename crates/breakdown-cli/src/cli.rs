//! Command handlers shared by one-shot and interactive use.

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use breakdown_core::{Banner, ChecklistView, DragGesture, Orchestrator, StepId};
use log::{debug, info};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    signal,
};

use crate::{renderer::TerminalRenderer, session::SessionCommand};

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Populated,
    Failed,
    Cancelled,
}

pub struct Cli {
    orchestrator: Orchestrator,
    renderer: TerminalRenderer,
    gesture: DragGesture,
}

impl Cli {
    pub fn new(orchestrator: Orchestrator, renderer: TerminalRenderer) -> Self {
        Self {
            orchestrator,
            renderer,
            gesture: DragGesture::new(),
        }
    }

    /// Submit `task`, then optionally export the result into `export`.
    /// Returns `false` when no checklist was produced or saved.
    pub async fn plan(&mut self, task: &str, export: Option<PathBuf>) -> Result<bool> {
        if self.submit(task).await? != Outcome::Populated {
            return Ok(false);
        }
        match export {
            Some(dir) => self.export(Some(dir)),
            None => Ok(true),
        }
    }

    /// Run one submission. Ctrl-C abandons it and discards its results.
    pub async fn submit(&mut self, task: &str) -> Result<Outcome> {
        self.gesture.end();
        self.orchestrator.set_text(task);
        if self.orchestrator.direction().is_rtl() {
            self.renderer
                .banner(&Banner::info("Text direction: right-to-left"))?;
        }

        let result = tokio::select! {
            result = self.orchestrator.submit(task) => Some(result),
            _ = signal::ctrl_c() => None,
        };

        let Some(result) = result else {
            self.orchestrator.cancel();
            self.renderer.banner(&Banner::info("Cancelled."))?;
            return Ok(Outcome::Cancelled);
        };

        match result {
            Ok(count) => {
                debug!("submit: {count} step(s)");
                self.show()?;
                Ok(Outcome::Populated)
            }
            Err(_) => {
                let message = self.orchestrator.error().unwrap_or_default().to_string();
                self.renderer.banner(&Banner::error(message))?;
                Ok(Outcome::Failed)
            }
        }
    }

    pub fn toggle(&mut self, id: StepId) -> Result<()> {
        if !self.orchestrator.toggle(id) {
            return self
                .renderer
                .banner(&Banner::error(format!("No step with id {id}.")));
        }
        self.show()
    }

    /// Drag `dragged` onto `target`.
    pub fn move_step(&mut self, dragged: StepId, target: StepId) -> Result<()> {
        self.gesture.start(dragged);
        self.gesture.hover(target);
        if !self.gesture.drop_on(target, self.orchestrator.tasks_mut()) {
            return self.renderer.banner(&Banner::error(format!(
                "Cannot move step {dragged} onto step {target}."
            )));
        }
        self.show()
    }

    pub fn show(&self) -> Result<()> {
        let view = ChecklistView::new(self.orchestrator.title(), self.orchestrator.tasks().steps());
        self.renderer.render(&view.to_string())
    }

    /// Save the checklist into `dir`, or the current directory.
    pub fn export(&self, dir: Option<PathBuf>) -> Result<bool> {
        let Some(export) = self.orchestrator.export() else {
            self.renderer
                .banner(&Banner::info("Nothing to export yet."))?;
            return Ok(false);
        };

        let dir = match dir {
            Some(dir) => dir,
            None => env::current_dir().context("Failed to read current directory")?,
        };

        match export.write_to(&dir) {
            Ok(path) => {
                self.renderer
                    .banner(&Banner::success(format!("Saved {}", path.display())))?;
                Ok(true)
            }
            Err(err) => {
                self.renderer.banner(&Banner::error(err.to_string()))?;
                Ok(false)
            }
        }
    }

    /// Read commands from stdin until `quit`, end of input or Ctrl-C at the
    /// prompt.
    pub async fn interactive(&mut self) -> Result<()> {
        info!("Interactive session started");
        self.renderer.banner(&Banner::info(
            "Type a task to break it down, or `help` for commands.",
        ))?;

        let mut lines = BufReader::new(io::stdin()).lines();
        loop {
            self.renderer.prompt()?;

            let line = tokio::select! {
                line = lines.next_line() => line.context("Failed to read input")?,
                _ = signal::ctrl_c() => None,
            };
            let Some(line) = line else {
                break;
            };

            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    self.renderer.render(&err.to_string())?;
                    continue;
                }
            };

            match command {
                SessionCommand::Plan { task } => {
                    self.submit(&SessionCommand::task_text(&task)).await?;
                }
                SessionCommand::Toggle { id } => self.toggle(id)?,
                SessionCommand::Move { dragged, target } => self.move_step(dragged, target)?,
                SessionCommand::Show => self.show()?,
                SessionCommand::Export { dir } => {
                    self.export(dir)?;
                }
                SessionCommand::Help => self.renderer.render(&SessionCommand::help())?,
                SessionCommand::Quit => break,
            }
        }

        info!("Interactive session finished");
        Ok(())
    }
}
