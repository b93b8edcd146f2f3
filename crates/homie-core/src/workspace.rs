//! Workspace root, dashboard base directory and path containment rules.

use std::{
    ffi::OsStr,
    fs,
    path::{Component, Path, PathBuf},
};

use crate::error::{DashboardError, Result};

/// File names recognized as task files during discovery and toggles.
pub const TASK_FILE_NAMES: &[&str] = &["TODO.md", "todo.md", "TASKS.md", "tasks.md"];

/// Task file in the workspace root that discovery leaves out (agent queue).
pub const ROOT_EXCLUDED_FILE: &str = "TASKS.md";

/// Default name of the dashboard's own task file inside its base directory.
pub const DEFAULT_OWN_TASK_FILE: &str = "DASHBOARD_TODO.md";

/// Label for a task file directly in the workspace root.
pub const WORKSPACE_LABEL: &str = "Workspace";

/// Label for a task file directly in the dashboard base directory.
pub const DASHBOARD_LABEL: &str = "Dashboard";

/// Canonical locations the board reads from and toggles write into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    base_dir: PathBuf,
    own_task_file: String,
}

impl Workspace {
    /// Canonicalizes `root`; `base_dir` is resolved against it but may be
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::FileSystem` if the root does not exist or is
    /// not a directory.
    pub fn new(root: &Path, base_dir: &Path, own_task_file: impl Into<String>) -> Result<Self> {
        let root = fs::canonicalize(root).map_err(|e| DashboardError::file_system(root, e))?;
        if !root.is_dir() {
            return Err(DashboardError::file_system(
                &root,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "workspace is not a directory"),
            ));
        }
        let base_dir = resolve_against(&root, base_dir);
        Ok(Self {
            root,
            base_dir,
            own_task_file: own_task_file.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn own_task_file(&self) -> &str {
        &self.own_task_file
    }

    /// Resolves a caller-supplied path to an absolute canonical form.
    ///
    /// Relative paths are taken relative to the root. Paths that do not exist
    /// are resolved through their deepest existing ancestor, so `..` and
    /// symlinks cannot smuggle a missing file past [`Workspace::contains`].
    pub fn resolve(&self, raw: &str) -> PathBuf {
        resolve_against(&self.root, Path::new(raw))
    }

    /// Component-wise containment in the canonical root.
    pub fn contains(&self, resolved: &Path) -> bool {
        resolved.starts_with(&self.root)
    }

    /// Whether a toggle may rewrite a file with this base name.
    pub fn is_mutable_name(&self, name: &str) -> bool {
        TASK_FILE_NAMES.contains(&name) || name == self.own_task_file
    }

    /// Board label for a discovered task file living in `dir`.
    pub fn label_for(&self, dir: &Path) -> String {
        if dir == self.root {
            WORKSPACE_LABEL.to_string()
        } else if dir == self.base_dir {
            DASHBOARD_LABEL.to_string()
        } else {
            dir_name(dir)
        }
    }
}

/// Name of a directory's last component, or its full display form.
pub(crate) fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .and_then(OsStr::to_str)
        .map_or_else(|| dir.display().to_string(), ToString::to_string)
}

fn resolve_against(root: &Path, raw: &Path) -> PathBuf {
    let absolute = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        root.join(raw)
    };
    fs::canonicalize(&absolute).unwrap_or_else(|_| canonicalize_missing(&absolute))
}

/// Resolves `path` without requiring it to exist. Symlinks in the existing
/// prefix are followed before each `..` is applied, so `link/..` lands in the
/// link target's parent rather than back where the link lives.
fn canonicalize_missing(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved = canonicalize_existing_prefix(&resolved);
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    canonicalize_existing_prefix(&resolved)
}

/// Canonicalizes the deepest existing ancestor and appends the rest.
fn canonicalize_existing_prefix(path: &Path) -> PathBuf {
    let mut existing = path;
    let mut tail = Vec::new();
    loop {
        if let Ok(canonical) = fs::canonicalize(existing) {
            return tail.iter().rev().fold(canonical, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                existing = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn workspace() -> (TempDir, Workspace) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("dashboard")).unwrap();
        let ws = Workspace::new(temp_dir.path(), Path::new("dashboard"), DEFAULT_OWN_TASK_FILE)
            .expect("Failed to open workspace");
        (temp_dir, ws)
    }

    #[test]
    fn test_relative_paths_resolve_inside_root() {
        let (_temp_dir, ws) = workspace();
        let resolved = ws.resolve("proj/TODO.md");
        assert!(ws.contains(&resolved));
        assert!(resolved.ends_with("proj/TODO.md"));
    }

    #[test]
    fn test_parent_traversal_is_outside() {
        let (_temp_dir, ws) = workspace();
        let resolved = ws.resolve("../../etc/TODO.md");
        assert!(!ws.contains(&resolved));
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_outside() {
        let (temp_dir, ws) = workspace();
        let sibling = format!("{}-other/TODO.md", temp_dir.path().display());
        assert!(!ws.contains(&ws.resolve(&sibling)));
    }

    #[test]
    fn test_missing_path_with_parent_steps_stays_inside() {
        let (_temp_dir, ws) = workspace();
        fs::create_dir(ws.root().join("proj")).unwrap();
        let resolved = ws.resolve("proj/../other/./TODO.md");
        assert_eq!(resolved, ws.root().join("other").join("TODO.md"));
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_step_after_symlink_follows_the_link() {
        let (_temp_dir, ws) = workspace();
        let outside = TempDir::new().unwrap();
        fs::create_dir(outside.path().join("dir")).unwrap();
        std::os::unix::fs::symlink(outside.path().join("dir"), ws.root().join("link")).unwrap();

        let resolved = ws.resolve("link/../missing/TODO.md");
        assert!(!ws.contains(&resolved));
        assert_eq!(
            resolved,
            outside.path().canonicalize().unwrap().join("missing").join("TODO.md")
        );
    }

    #[test]
    fn test_labels() {
        let (_temp_dir, ws) = workspace();
        assert_eq!(ws.label_for(ws.root()), WORKSPACE_LABEL);
        assert_eq!(ws.label_for(ws.base_dir()), DASHBOARD_LABEL);
        assert_eq!(ws.label_for(&ws.root().join("alpha")), "alpha");
    }

    #[test]
    fn test_mutable_names() {
        let (_temp_dir, ws) = workspace();
        assert!(ws.is_mutable_name("TODO.md"));
        assert!(ws.is_mutable_name("tasks.md"));
        assert!(ws.is_mutable_name(DEFAULT_OWN_TASK_FILE));
        assert!(!ws.is_mutable_name("README.md"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(Workspace::new(&missing, Path::new("dashboard"), DEFAULT_OWN_TASK_FILE).is_err());
    }
}
