//! Maintenance action definitions, run records and the catalog.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// A whitelisted maintenance command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Identifier callers dispatch by
    pub id: String,
    /// Human readable label
    pub label: String,
    /// Program followed by its arguments; never passed through a shell
    pub command: Vec<String>,
    /// Wall-clock limit for one execution
    pub timeout_seconds: u64,
}

impl ActionDefinition {
    pub fn new(id: &str, label: &str, command: &[&str], timeout_seconds: u64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            command: command.iter().map(|s| (*s).to_string()).collect(),
            timeout_seconds,
        }
    }

    /// The executable name, if the command is not empty.
    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }
}

/// Record of an action that ran to completion (any exit code).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRun {
    pub action: String,
    pub label: String,
    /// Exit code; `-1` when the child was terminated by a signal
    pub exit_code: i32,
    /// Tail of stdout, bounded
    pub stdout: String,
    /// Tail of stderr, bounded
    pub stderr: String,
    #[serde(with = "jiff::fmt::serde::timestamp::second::required")]
    pub ran_at: Timestamp,
}

impl ActionRun {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// The failure to surface for a non-zero exit, if any.
    pub fn failure(&self) -> Option<DispatchError> {
        (!self.succeeded()).then(|| DispatchError::NonZeroExit {
            action: self.action.clone(),
            exit_code: self.exit_code,
        })
    }
}

/// One row of the action catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStatus {
    pub id: String,
    pub label: String,
    pub cooldown_left_seconds: u64,
}

/// Registered actions with their current cooldowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCatalog {
    pub actions: Vec<ActionStatus>,
    /// Length of the cooldown window in seconds
    pub cooldown_seconds: u64,
}
