//! Homie CLI Application
//!
//! Command-line interface and MCP server for the homie operator dashboard.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use homie_core::{DashboardBuilder, DashboardConfig};
use log::info;
use mcp::{run_stdio_server, HomieMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        workspace,
        base_dir,
        manifest,
        config,
        cooldown,
        no_color,
        json,
        command,
    } = Args::parse();

    let config = match config {
        Some(path) => DashboardConfig::load(&path),
        None => DashboardConfig::load_default(),
    }
    .context("Failed to load configuration")?;

    let dashboard = DashboardBuilder::new()
        .with_config(config)
        .with_workspace(workspace)
        .with_base_dir(base_dir)
        .with_manifest(manifest)
        .with_cooldown_seconds(cooldown)
        .build()
        .await
        .context("Failed to initialize dashboard")?;

    info!("Homie started in {}", dashboard.workspace().root().display());

    if let Some(Serve) = command {
        info!("Starting Homie MCP server");
        run_stdio_server(HomieMcpServer::new(dashboard))
            .await
            .context("MCP server failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let cli = Cli::new(dashboard, TerminalRenderer::new(!no_color), json);
    match command {
        Some(Toggle(args)) => cli.toggle(args).await,
        Some(Actions) => cli.list_actions(),
        Some(Run(args)) => cli.run_action(args).await,
        Some(Logs(args)) => cli.show_logs(args).await,
        Some(Memory(args)) => cli.show_memory(args).await,
        Some(Activity(args)) => cli.show_activity(args).await,
        Some(Issues) => cli.show_issues().await,
        Some(Board | Serve) | None => cli.show_board().await,
    }
}
