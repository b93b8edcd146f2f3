//! Parameter structures for dashboard operations
//!
//! These are shared by every interface (CLI, MCP) and carry no framework
//! derives besides serde. JSON schema generation is behind the `schema`
//! feature so only the MCP layer pays for it.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these types (`#[serde(transparent)]` on the MCP
//! side, `From<..Args>` on the CLI side) instead of redefining them.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of journal lines returned by a log request.
pub const DEFAULT_LOG_LINES: u32 = 50;

/// Default number of entries in the activity feed.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 50;

/// Parameters for toggling a checkbox line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ToggleTask {
    /// Path of the task file, absolute or relative to the workspace root
    pub path: String,
    /// Zero-based line index as reported by the task board
    pub line_no: usize,
    /// Desired checkbox state
    pub done: bool,
}

/// Parameters for dispatching a registered action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RunAction {
    /// Identifier of the action, as listed in the catalog
    pub action: String,
}

/// Parameters for reading recent service logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ServiceLogs {
    /// systemd user unit, e.g. `openclaw-gateway.service`
    pub service: String,
    /// Number of journal lines to return (1-500)
    #[serde(default = "default_log_lines")]
    pub lines: u32,
}

impl Default for ServiceLogs {
    fn default() -> Self {
        Self {
            service: String::new(),
            lines: DEFAULT_LOG_LINES,
        }
    }
}

fn default_log_lines() -> u32 {
    DEFAULT_LOG_LINES
}

/// Parameters for reading one day of the memory journal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ReadMemory {
    /// Day to show as `YYYY-MM-DD`; the newest day when omitted or unknown
    #[serde(default)]
    pub date: Option<String>,
}

/// Parameters for the recent activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListActivity {
    /// Maximum number of entries
    #[serde(default = "default_activity_limit")]
    pub limit: usize,
}

impl Default for ListActivity {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ACTIVITY_LIMIT,
        }
    }
}

fn default_activity_limit() -> usize {
    DEFAULT_ACTIVITY_LIMIT
}
