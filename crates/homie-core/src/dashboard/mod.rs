//! High-level dashboard API.
//!
//! [`Dashboard`] is the single entry point the CLI and the MCP server use. It
//! owns the resolved workspace, the manifest location and the action
//! dispatcher, and moves blocking filesystem work off the async runtime.
//!
//! ```rust,no_run
//! use homie_core::{params::ToggleTask, DashboardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = DashboardBuilder::new()
//!     .with_workspace(Some("/home/me/workspace"))
//!     .build()
//!     .await?;
//!
//! let board = dashboard.board().await?;
//! println!("{board}");
//!
//! dashboard
//!     .toggle(&ToggleTask {
//!         path: "proj/TODO.md".to_string(),
//!         line_no: 3,
//!         done: true,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::DashboardBuilder;

use crate::{
    actions::ActionDispatcher,
    board::build_board,
    error::{DashboardError, DispatchError, LogsError, Result, ToggleError},
    logs, memory,
    models::{
        ActionCatalog, ActionRun, ActivityFeed, BoardSummary, IssueReport, MemoryDay, TaskItem,
    },
    params::{ListActivity, ReadMemory, RunAction, ServiceLogs, ToggleTask},
    todo,
    workspace::Workspace,
};

/// Main dashboard interface over one workspace.
#[derive(Debug)]
pub struct Dashboard {
    workspace: Workspace,
    manifest_path: PathBuf,
    dispatcher: ActionDispatcher,
}

impl Dashboard {
    pub(crate) fn new(
        workspace: Workspace,
        manifest_path: PathBuf,
        dispatcher: ActionDispatcher,
    ) -> Self {
        Self {
            workspace,
            manifest_path,
            dispatcher,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.dispatcher
    }

    /// Directory holding the daily memory journal.
    pub fn memory_dir(&self) -> PathBuf {
        self.workspace.root().join(memory::MEMORY_DIR)
    }

    /// Aggregates the task board.
    ///
    /// # Errors
    ///
    /// Only fails if the blocking read task panics; bad task files and a
    /// malformed manifest degrade inside the aggregator.
    pub async fn board(&self) -> Result<BoardSummary> {
        let workspace = self.workspace.clone();
        let manifest_path = self.manifest_path.clone();
        task::spawn_blocking(move || build_board(&workspace, Some(&manifest_path)))
            .await
            .map_err(|e| DashboardError::join(&e))
    }

    /// Sets one checkbox and returns the updated item.
    ///
    /// # Errors
    ///
    /// Returns the first [`ToggleError`] precondition that fails.
    pub async fn toggle(&self, params: &ToggleTask) -> std::result::Result<TaskItem, ToggleError> {
        let workspace = self.workspace.clone();
        let params = params.clone();
        let path = params.path.clone();
        task::spawn_blocking(move || todo::toggle(&workspace, &params))
            .await
            .map_err(|e| ToggleError::Io {
                path,
                reason: e.to_string(),
            })?
    }

    /// Registered actions with their remaining cooldowns.
    pub fn actions_catalog(&self) -> ActionCatalog {
        self.dispatcher.catalog()
    }

    /// Dispatches an action through the cooldown gate.
    ///
    /// # Errors
    ///
    /// See [`ActionDispatcher::dispatch`].
    pub async fn run_action(&self, params: &RunAction) -> std::result::Result<ActionRun, DispatchError> {
        self.dispatcher.dispatch(&params.action).await
    }

    /// Recent journal lines for a whitelisted service.
    ///
    /// # Errors
    ///
    /// See [`logs::service_logs`].
    pub async fn service_logs(&self, params: &ServiceLogs) -> std::result::Result<String, LogsError> {
        logs::service_logs(params).await
    }

    /// One day of the memory journal.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::FileSystem` if the journal or the chosen day
    /// cannot be read.
    pub async fn memory(&self, params: &ReadMemory) -> Result<MemoryDay> {
        let dir = self.memory_dir();
        let date = params.date.clone();
        task::spawn_blocking(move || memory::read_day(&dir, date.as_deref()))
            .await
            .map_err(|e| DashboardError::join(&e))?
    }

    /// Classified recent journal lines.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::FileSystem` if the journal cannot be listed.
    pub async fn activity(&self, params: &ListActivity) -> Result<ActivityFeed> {
        let dir = self.memory_dir();
        let limit = params.limit;
        task::spawn_blocking(move || memory::activities(&dir, limit))
            .await
            .map_err(|e| DashboardError::join(&e))?
    }

    /// Errors and warnings mentioned in the newest journal day.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::FileSystem` if the newest day cannot be read.
    pub async fn issues(&self) -> Result<IssueReport> {
        let dir = self.memory_dir();
        task::spawn_blocking(move || memory::scan_issues(&dir))
            .await
            .map_err(|e| DashboardError::join(&e))?
    }
}
