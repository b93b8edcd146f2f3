//! Transport-agnostic response shapes for toggles and action dispatches.
//!
//! Every response carries a `status` class so a transport can map it onto
//! its own status codes (400 for rejected toggles, 429 for cooldowns, 504 for
//! timeouts and so on).

use serde::{Deserialize, Serialize};

use super::ActionRun;
use crate::error::{DispatchError, ToggleError};

/// `{ok, message}` on success, `{ok: false, error, code}` on rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip)]
    pub status: u16,
}

impl ToggleResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: Some(message.into()),
            error: None,
            code: None,
            status: 200,
        }
    }

    pub fn failure(error: &ToggleError) -> Self {
        Self {
            ok: false,
            message: None,
            error: Some(error.to_string()),
            code: Some(error.code().to_string()),
            status: error.status_code(),
        }
    }
}

/// Outcome of an action dispatch.
///
/// Executed runs fill `action`..`ran_at`; refusals and execution failures
/// fill `error` (and `seconds_left` for cooldowns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    /// Epoch seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ran_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_left: Option<u64>,
    #[serde(skip)]
    pub status: u16,
}

impl ActionResponse {
    /// Response for a run that completed, whatever its exit code.
    pub fn from_run(run: &ActionRun) -> Self {
        let failure = run.failure();
        Self {
            ok: failure.is_none(),
            action: Some(run.action.clone()),
            label: Some(run.label.clone()),
            exit_code: Some(run.exit_code),
            stdout: Some(run.stdout.clone()),
            stderr: Some(run.stderr.clone()),
            ran_at: Some(run.ran_at.as_second()),
            error: failure.as_ref().map(ToString::to_string),
            code: failure.as_ref().map(|e| e.code().to_string()),
            seconds_left: None,
            status: failure.as_ref().map_or(200, DispatchError::status_code),
        }
    }

    /// Response for a dispatch that was refused or could not run.
    pub fn from_error(error: &DispatchError) -> Self {
        let seconds_left = match error {
            DispatchError::CooldownActive { seconds_left, .. } => Some(*seconds_left),
            _ => None,
        };
        Self {
            ok: false,
            action: None,
            label: None,
            exit_code: None,
            stdout: None,
            stderr: None,
            ran_at: None,
            error: Some(error.to_string()),
            code: Some(error.code().to_string()),
            seconds_left,
            status: error.status_code(),
        }
    }
}

impl From<std::result::Result<ActionRun, DispatchError>> for ActionResponse {
    fn from(result: std::result::Result<ActionRun, DispatchError>) -> Self {
        match result {
            Ok(run) => Self::from_run(&run),
            Err(e) => Self::from_error(&e),
        }
    }
}

impl From<std::result::Result<(), ToggleError>> for ToggleResponse {
    fn from(result: std::result::Result<(), ToggleError>) -> Self {
        match result {
            Ok(()) => Self::success("Task updated"),
            Err(e) => Self::failure(&e),
        }
    }
}
