//! Recent journal lines for the services the dashboard manages.

use std::time::Duration;

use log::debug;

use crate::{
    actions::runner::{run_command, CommandError},
    error::LogsError,
    params::ServiceLogs,
};

/// Units whose logs may be read.
pub const ALLOWED_SERVICES: &[&str] = &["openclaw-gateway.service", "homie-dashboard.service"];

/// Upper bound on requested journal lines.
pub const MAX_LOG_LINES: u32 = 500;

/// Bytes of journal output kept; room for [`MAX_LOG_LINES`] long lines.
pub const LOG_OUTPUT_LIMIT: usize = MAX_LOG_LINES as usize * 1024;

const LOGS_TIMEOUT: Duration = Duration::from_secs(10);

/// journalctl argv for a request, with `lines` clamped to `1..=MAX_LOG_LINES`.
///
/// # Errors
///
/// Returns [`LogsError::ServiceNotAllowed`] for units outside
/// [`ALLOWED_SERVICES`].
pub fn journal_command(params: &ServiceLogs) -> Result<Vec<String>, LogsError> {
    if !ALLOWED_SERVICES.contains(&params.service.as_str()) {
        return Err(LogsError::ServiceNotAllowed {
            service: params.service.clone(),
        });
    }
    let lines = params.lines.clamp(1, MAX_LOG_LINES);
    Ok(vec![
        "journalctl".to_string(),
        "--user".to_string(),
        "-u".to_string(),
        params.service.clone(),
        "-n".to_string(),
        lines.to_string(),
        "--no-pager".to_string(),
    ])
}

/// Reads recent logs for a whitelisted service.
///
/// # Errors
///
/// Returns `ServiceNotAllowed` for unknown units, `Timeout` if journalctl
/// hangs, and `Command` for a non-zero exit or a failed spawn.
pub async fn service_logs(params: &ServiceLogs) -> Result<String, LogsError> {
    let argv = journal_command(params)?;
    debug!("Reading logs: {}", argv.join(" "));
    match run_command(&argv, LOGS_TIMEOUT, LOG_OUTPUT_LIMIT).await {
        Ok(output) if output.exit_code == 0 => {
            if output.stdout.trim().is_empty() {
                Ok("No logs found.".to_string())
            } else {
                Ok(output.stdout)
            }
        }
        Ok(output) => Err(LogsError::Command {
            stderr: output.stderr,
        }),
        Err(CommandError::Timeout) => Err(LogsError::Timeout {
            service: params.service.clone(),
        }),
        Err(e) => Err(LogsError::Command {
            stderr: e.to_string(),
        }),
    }
}
