//! Directory walk that finds task files when no manifest applies.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    memory::MEMORY_DIR,
    workspace::{Workspace, ROOT_EXCLUDED_FILE, TASK_FILE_NAMES},
};

/// Directory names never descended into. Hidden directories are skipped too.
pub const IGNORED_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "__pycache__",
    ".venv",
    "venv",
    "env",
    MEMORY_DIR,
];

fn is_ignored_dir(name: &str) -> bool {
    name.starts_with('.') || IGNORED_DIRS.contains(&name)
}

/// Finds task files under the workspace root.
///
/// The result is deduplicated by canonical path and sorted bytewise so the
/// board order does not depend on directory iteration order. Symlinked
/// directories are not followed. Unreadable directories are skipped.
pub fn discover(workspace: &Workspace) -> Vec<PathBuf> {
    let root = workspace.root();
    let mut seen = HashSet::new();
    let mut found = Vec::new();
    let mut push = |path: PathBuf| {
        if let Ok(canonical) = fs::canonicalize(&path) {
            if seen.insert(canonical.clone()) {
                found.push(canonical);
            }
        }
    };

    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping unreadable directory {}: {e}", dir.display());
                continue;
            }
        };
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let path = entry.path();
            if file_type.is_dir() {
                if !is_ignored_dir(name) {
                    stack.push(path);
                }
            } else if TASK_FILE_NAMES.contains(&name)
                && !(dir.as_path() == root && name == ROOT_EXCLUDED_FILE)
                && path.is_file()
            {
                push(path);
            }
        }
    }

    let own = workspace.base_dir().join(workspace.own_task_file());
    if own.is_file() {
        push(own);
    }

    found.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    debug!("Discovered {} task files under {}", found.len(), root.display());
    found
}

/// Directory containing a discovered file.
pub(crate) fn parent_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(path)
}
