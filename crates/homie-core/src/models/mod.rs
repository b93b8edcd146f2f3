//! Data models for the task board and the action dispatcher.
//!
//! Display implementations live in [`crate::display`]; the types here are
//! plain data with serde derives so every surface (CLI `--json`, MCP tools)
//! emits the same shapes.
//!
//! - [`task`]: [`TaskItem`] and [`ParsedFile`], the output of parsing one file
//! - [`board`]: [`ProjectSummary`] and [`BoardSummary`]
//! - [`action`]: [`ActionDefinition`], [`ActionRun`] and the catalog
//! - [`memory`]: journal day view, activity feed and issue scan
//! - [`responses`]: `{ok, ...}` response shapes with status classes

pub mod action;
pub mod board;
pub mod memory;
pub mod responses;
pub mod task;

pub use action::{ActionCatalog, ActionDefinition, ActionRun, ActionStatus};
pub use board::{BoardSummary, ProjectSummary};
pub use memory::{Activity, ActivityFeed, ActivityKind, Issue, IssueLevel, IssueReport, MemoryDay};
pub use responses::{ActionResponse, ToggleResponse};
pub use task::{percent, ParsedFile, TaskItem};
