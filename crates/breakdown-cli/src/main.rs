//! Breakdown CLI Application
//!
//! Command-line interface for breaking goals down into small steps.

mod args;
mod cli;
mod renderer;
mod session;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use breakdown_core::OrchestratorBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        no_color,
        base_url,
        validation_model,
        decomposition_model,
        command,
    } = Args::parse();

    let orchestrator = OrchestratorBuilder::new()
        .with_base_url(base_url)
        .with_validation_model(validation_model)
        .with_decomposition_model(decomposition_model)
        .build()
        .context("Failed to initialize breakdown")?;

    let renderer = TerminalRenderer::new(!no_color);
    let mut cli = Cli::new(orchestrator, renderer);

    info!("Breakdown started");

    match command {
        Some(Plan { task, export }) => {
            let succeeded = cli.plan(&task.join(" "), export).await?;
            Ok(if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Some(Interactive) | None => {
            cli.interactive().await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
