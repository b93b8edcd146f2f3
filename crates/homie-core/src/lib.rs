//! Core library for the homie operator dashboard.
//!
//! The dashboard reads markdown task files scattered through a workspace,
//! aggregates their checkboxes into a progress board, writes single checkbox
//! toggles back to disk, and runs a small whitelist of maintenance commands
//! behind a per-action cooldown.
//!
//! # Layout
//!
//! - [`todo`]: checkbox parsing and single-line toggles
//! - [`board`]: manifest or discovery driven aggregation
//! - [`actions`]: action registry, cooldown dispatcher and subprocess runner
//! - [`logs`]: journal access for the managed services
//! - [`memory`]: day view, activity feed and issue scan of the memory journal
//! - [`dashboard`]: the async [`Dashboard`] facade and its builder
//! - [`display`]: markdown formatting for terminal and MCP output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use homie_core::{params::RunAction, DashboardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = DashboardBuilder::new()
//!     .with_workspace(Some("/home/me/workspace"))
//!     .build()
//!     .await?;
//!
//! println!("{}", dashboard.board().await?);
//!
//! match dashboard
//!     .run_action(&RunAction {
//!         action: "check_gateway_health".to_string(),
//!     })
//!     .await
//! {
//!     Ok(run) => println!("{run}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod board;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod logs;
pub mod memory;
pub mod models;
pub mod params;
pub mod todo;
pub mod workspace;

// Re-export commonly used types
pub use actions::{ActionDispatcher, ActionRegistry, Clock, ManualClock, SystemClock};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardBuilder};
pub use display::{LocalDateTime, OperationStatus, ToggleResult};
pub use error::{DashboardError, DispatchError, LogsError, Result, ToggleError};
pub use models::{
    ActionCatalog, ActionDefinition, ActionResponse, ActionRun, ActionStatus, Activity,
    ActivityFeed, ActivityKind, BoardSummary, Issue, IssueLevel, IssueReport, MemoryDay,
    ParsedFile, ProjectSummary, TaskItem, ToggleResponse,
};
pub use params::{ListActivity, ReadMemory, RunAction, ServiceLogs, ToggleTask};
pub use workspace::Workspace;
