//! Status messages for operation feedback.

use std::fmt;

use crate::error::{DispatchError, LogsError, ToggleError};

/// A one-line success or failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl From<&ToggleError> for OperationStatus {
    fn from(error: &ToggleError) -> Self {
        Self::failure(error.to_string())
    }
}

impl From<&DispatchError> for OperationStatus {
    fn from(error: &DispatchError) -> Self {
        Self::failure(error.to_string())
    }
}

impl From<&LogsError> for OperationStatus {
    fn from(error: &LogsError) -> Self {
        Self::failure(error.to_string())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Task updated".to_string());
        assert_eq!(success.to_string(), "Success: Task updated\n");

        let failure = OperationStatus::from(&ToggleError::NotATaskLine { line_no: 2 });
        assert!(failure.to_string().starts_with("Error:"));
    }

    #[test]
    fn test_cooldown_status_mentions_wait() {
        let status = OperationStatus::from(&DispatchError::CooldownActive {
            action: "restart".to_string(),
            seconds_left: 12,
        });
        assert!(!status.success);
        assert!(status.message.contains("retry in 12s"));
    }
}
