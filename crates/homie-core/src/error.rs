//! Error types for the dashboard library.
//!
//! Board reads never fail on bad task files; those degrade to empty results
//! inside the aggregator. The types here cover what the caller must see:
//! rejected toggles, rejected or failed action dispatches, and setup errors.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for dashboard setup and I/O outside the board read.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The project manifest exists but could not be understood
    #[error("Malformed manifest '{path}': {reason}")]
    MalformedManifest { path: PathBuf, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// A checkbox toggle was rejected
    #[error(transparent)]
    Toggle(#[from] ToggleError),
    /// An action dispatch was rejected or failed
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// Reading service logs failed
    #[error(transparent)]
    Logs(#[from] LogsError),
}

impl DashboardError {
    /// Creates a builder for configuration errors.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Error raised when a blocking task cannot be joined.
    pub(crate) fn join(e: &tokio::task::JoinError) -> Self {
        Self::configuration(format!("Task join error: {e}"))
    }
}

/// Reasons a checkbox toggle is refused, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("Path is outside the workspace: {path}")]
    PathOutsideWorkspace { path: String },
    #[error("File not found: {path}")]
    FileNotFound { path: String },
    #[error("Unsupported file: {name} is not a task file")]
    UnsupportedFile { name: String },
    #[error("Invalid line number {line_no} (file has {line_count} lines)")]
    InvalidLine { line_no: usize, line_count: usize },
    #[error("Line {line_no} is not a checkbox task")]
    NotATaskLine { line_no: usize },
    /// The file passed every check but could not be read or written.
    #[error("Failed to rewrite '{path}': {reason}")]
    Io { path: String, reason: String },
}

impl ToggleError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PathOutsideWorkspace { .. } => "path_outside_workspace",
            Self::FileNotFound { .. } => "file_not_found",
            Self::UnsupportedFile { .. } => "unsupported_file",
            Self::InvalidLine { .. } => "invalid_line",
            Self::NotATaskLine { .. } => "not_a_task_line",
            Self::Io { .. } => "io_error",
        }
    }

    /// Status class for transports that speak HTTP-like codes.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Io { .. } => 500,
            _ => 400,
        }
    }
}

/// Reasons an action dispatch did not produce a successful run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Action not allowed: {action}")]
    ActionNotAllowed { action: String },
    #[error("Action '{action}' is cooling down, retry in {seconds_left}s")]
    CooldownActive { action: String, seconds_left: u64 },
    #[error("Action '{action}' timed out after {timeout_seconds}s")]
    ExecutionTimeout { action: String, timeout_seconds: u64 },
    #[error("Executable not found for action '{action}': {program}")]
    ExecutableNotFound { action: String, program: String },
    #[error("Action '{action}' exited with code {exit_code}")]
    NonZeroExit { action: String, exit_code: i32 },
    /// Spawning or waiting on the child failed for a reason other than a
    /// missing executable.
    #[error("Failed to run action '{action}': {reason}")]
    Spawn { action: String, reason: String },
}

impl DispatchError {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ActionNotAllowed { .. } => "action_not_allowed",
            Self::CooldownActive { .. } => "cooldown_active",
            Self::ExecutionTimeout { .. } => "execution_timeout",
            Self::ExecutableNotFound { .. } => "executable_not_found",
            Self::NonZeroExit { .. } => "non_zero_exit",
            Self::Spawn { .. } => "spawn_failed",
        }
    }

    /// Status class: 403 not allowed, 429 cooldown, 504 timeout, 500 otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ActionNotAllowed { .. } => 403,
            Self::CooldownActive { .. } => 429,
            Self::ExecutionTimeout { .. } => 504,
            Self::ExecutableNotFound { .. } | Self::NonZeroExit { .. } | Self::Spawn { .. } => {
                500
            }
        }
    }
}

/// Errors from the service log reader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogsError {
    #[error("Access to logs for '{service}' is not allowed")]
    ServiceNotAllowed { service: String },
    #[error("Error fetching logs: {stderr}")]
    Command { stderr: String },
    #[error("Timed out fetching logs for '{service}'")]
    Timeout { service: String },
}

impl LogsError {
    /// Status class for transports that speak HTTP-like codes.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ServiceNotAllowed { .. } => 403,
            Self::Command { .. } => 500,
            Self::Timeout { .. } => 504,
        }
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
