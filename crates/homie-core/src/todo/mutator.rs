//! Single-line checkbox toggles with workspace path guards.

use std::fs;

use log::{debug, info};

use super::parser::{match_line, LineMatch};
use crate::{
    error::ToggleError,
    models::TaskItem,
    params::ToggleTask,
    workspace::Workspace,
};

/// Sets the checkbox at `params.line_no` of `params.path` to `params.done`.
///
/// Checks run in a fixed order and stop at the first failure: containment in
/// the workspace, existence, file name, line range, then the line itself.
/// The whole file is read and rewritten; nothing is locked, so a concurrent
/// edit to the same file between the read and the write is lost.
///
/// Returns the item as it reads after the rewrite.
///
/// # Errors
///
/// Returns the first [`ToggleError`] whose precondition fails, or
/// [`ToggleError::Io`] if the file cannot be read or written.
pub fn toggle(workspace: &Workspace, params: &ToggleTask) -> Result<TaskItem, ToggleError> {
    let resolved = workspace.resolve(&params.path);
    let display = resolved.display().to_string();

    if !workspace.contains(&resolved) {
        return Err(ToggleError::PathOutsideWorkspace { path: display });
    }
    if !resolved.is_file() {
        return Err(ToggleError::FileNotFound { path: display });
    }
    let name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !workspace.is_mutable_name(&name) {
        return Err(ToggleError::UnsupportedFile { name });
    }

    let content = fs::read_to_string(&resolved).map_err(|e| ToggleError::Io {
        path: display.clone(),
        reason: e.to_string(),
    })?;
    let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
    let line_count = lines.len();
    let line = lines.get(params.line_no).ok_or(ToggleError::InvalidLine {
        line_no: params.line_no,
        line_count,
    })?;

    let LineMatch::Match { dialect, .. } = match_line(line) else {
        return Err(ToggleError::NotATaskLine {
            line_no: params.line_no,
        });
    };
    let rewritten = dialect
        .rewrite(line, params.done)
        .ok_or(ToggleError::NotATaskLine {
            line_no: params.line_no,
        })?;
    debug!("toggle {display}:{} {line:?} -> {rewritten:?}", params.line_no);

    let item = match match_line(&rewritten) {
        LineMatch::Match { done, text, .. } => TaskItem {
            text: text.to_string(),
            done,
            line_no: params.line_no,
        },
        LineMatch::NoMatch => {
            return Err(ToggleError::NotATaskLine {
                line_no: params.line_no,
            })
        }
    };
    lines[params.line_no] = rewritten;

    let mut output = lines.join("\n");
    if !output.ends_with('\n') {
        output.push('\n');
    }
    fs::write(&resolved, output).map_err(|e| ToggleError::Io {
        path: display.clone(),
        reason: e.to_string(),
    })?;

    info!(
        "Marked {display}:{} as {}",
        params.line_no,
        if item.done { "done" } else { "open" }
    );
    Ok(item)
}
