//! Command handlers and their clap argument wrappers.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, so core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Dashboard
//! ```

use std::{fmt::Display, process::ExitCode};

use anyhow::{Context, Result};
use clap::Args;
use homie_core::{
    display::{OperationStatus, ToggleResult},
    params::{
        ListActivity, ReadMemory, RunAction, ServiceLogs, ToggleTask, DEFAULT_ACTIVITY_LIMIT,
        DEFAULT_LOG_LINES,
    },
    ActionResponse, Dashboard, ToggleResponse,
};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Set or clear one checkbox
#[derive(Args)]
pub struct ToggleArgs {
    /// Task file, absolute or relative to the workspace root
    pub path: String,
    /// Zero-based line number as shown on the board
    pub line_no: usize,
    /// Clear the checkbox instead of setting it
    #[arg(long)]
    pub undone: bool,
}

impl From<ToggleArgs> for ToggleTask {
    fn from(val: ToggleArgs) -> Self {
        ToggleTask {
            path: val.path,
            line_no: val.line_no,
            done: !val.undone,
        }
    }
}

/// Run a whitelisted action
#[derive(Args)]
pub struct RunArgs {
    /// Action identifier as listed by `homie actions`
    pub action: String,
}

impl From<RunArgs> for RunAction {
    fn from(val: RunArgs) -> Self {
        RunAction { action: val.action }
    }
}

/// Show recent logs of a managed service
#[derive(Args)]
pub struct LogsArgs {
    /// systemd user unit, e.g. openclaw-gateway.service
    pub service: String,
    /// Number of journal lines (1-500)
    #[arg(short = 'n', long, default_value_t = DEFAULT_LOG_LINES)]
    pub lines: u32,
}

impl From<LogsArgs> for ServiceLogs {
    fn from(val: LogsArgs) -> Self {
        ServiceLogs {
            service: val.service,
            lines: val.lines,
        }
    }
}

/// Show one day of the memory journal
#[derive(Args)]
pub struct MemoryArgs {
    /// Day as YYYY-MM-DD. Defaults to the newest day
    #[arg(long)]
    pub date: Option<String>,
}

impl From<MemoryArgs> for ReadMemory {
    fn from(val: MemoryArgs) -> Self {
        ReadMemory { date: val.date }
    }
}

/// Show classified recent journal activity
#[derive(Args)]
pub struct ActivityArgs {
    /// Maximum number of entries
    #[arg(short = 'n', long, default_value_t = DEFAULT_ACTIVITY_LIMIT)]
    pub limit: usize,
}

impl From<ActivityArgs> for ListActivity {
    fn from(val: ActivityArgs) -> Self {
        ListActivity { limit: val.limit }
    }
}

/// Runs one command against the dashboard and prints its outcome.
pub struct Cli {
    dashboard: Dashboard,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(dashboard: Dashboard, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            dashboard,
            renderer,
            json,
        }
    }

    pub async fn show_board(&self) -> Result<ExitCode> {
        let board = self.dashboard.board().await.context("Failed to build board")?;
        self.show(&board)
    }

    pub async fn show_memory(&self, args: MemoryArgs) -> Result<ExitCode> {
        let day = self
            .dashboard
            .memory(&ReadMemory::from(args))
            .await
            .context("Failed to read memory journal")?;
        self.show(&day)
    }

    pub async fn show_activity(&self, args: ActivityArgs) -> Result<ExitCode> {
        let feed = self
            .dashboard
            .activity(&ListActivity::from(args))
            .await
            .context("Failed to read memory journal")?;
        self.show(&feed)
    }

    pub async fn show_issues(&self) -> Result<ExitCode> {
        let report = self
            .dashboard
            .issues()
            .await
            .context("Failed to read memory journal")?;
        self.show(&report)
    }

    /// Prints a read-only view as JSON or rendered markdown.
    fn show<T: Serialize + Display>(&self, value: &T) -> Result<ExitCode> {
        if self.json {
            print_json(value)?;
        } else {
            self.renderer.render(&value.to_string())?;
        }
        Ok(ExitCode::SUCCESS)
    }

    pub async fn toggle(&self, args: ToggleArgs) -> Result<ExitCode> {
        let params = ToggleTask::from(args);
        let result = self.dashboard.toggle(&params).await;
        let response = ToggleResponse::from(result.clone().map(|_| ()));

        if self.json {
            print_json(&response)?;
        } else {
            match result {
                Ok(item) => self
                    .renderer
                    .render(&ToggleResult::new(params.path, item).to_string())?,
                Err(e) => self.renderer.render(&OperationStatus::from(&e).to_string())?,
            }
        }
        Ok(exit_code(response.ok))
    }

    pub fn list_actions(&self) -> Result<ExitCode> {
        self.show(&self.dashboard.actions_catalog())
    }

    pub async fn run_action(&self, args: RunArgs) -> Result<ExitCode> {
        let result = self.dashboard.run_action(&RunAction::from(args)).await;
        let response = ActionResponse::from(result.clone());

        if self.json {
            print_json(&response)?;
        } else {
            match &result {
                Ok(run) => {
                    self.renderer.render(&run.to_string())?;
                    if let Some(failure) = run.failure() {
                        self.renderer
                            .render(&OperationStatus::from(&failure).to_string())?;
                    }
                }
                Err(e) => self.renderer.render(&OperationStatus::from(e).to_string())?,
            }
        }
        Ok(exit_code(response.ok))
    }

    pub async fn show_logs(&self, args: LogsArgs) -> Result<ExitCode> {
        let params = ServiceLogs::from(args);
        let result = self.dashboard.service_logs(&params).await;
        let ok = result.is_ok();

        if self.json {
            let value = match &result {
                Ok(logs) => serde_json::json!({"ok": true, "service": params.service, "logs": logs}),
                Err(e) => serde_json::json!({"ok": false, "error": e.to_string()}),
            };
            print_json(&value)?;
        } else {
            match result {
                Ok(logs) => print!("{logs}"),
                Err(e) => self.renderer.render(&OperationStatus::from(&e).to_string())?,
            }
        }
        Ok(exit_code(ok))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to serialize response")?
    );
    Ok(())
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
