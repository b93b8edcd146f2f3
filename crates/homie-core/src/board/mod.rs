//! Task board aggregation.
//!
//! The board comes from the project manifest when it yields at least one
//! project with checkboxes; otherwise from a discovery walk of the workspace.
//! A manifest project that temporarily has no checkboxes is dropped from the
//! board, but does not switch the board over to discovery while any other
//! manifest project still has items.
//!
//! - [`manifest`]: manifest JSON shapes and loading
//! - [`discovery`]: workspace walk with pruning rules

pub mod discovery;
pub mod manifest;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    models::{BoardSummary, ParsedFile, ProjectSummary},
    todo::parse_file,
    workspace::{dir_name, Workspace},
};
pub use discovery::discover;
pub use manifest::{Manifest, ManifestEntry};

/// Builds the board for `workspace`, preferring the manifest at
/// `manifest_path` when one is given and usable.
///
/// Never fails: unreadable task files count as empty and a malformed manifest
/// falls back to discovery.
pub fn build_board(workspace: &Workspace, manifest_path: Option<&Path>) -> BoardSummary {
    if let Some(path) = manifest_path {
        match Manifest::load(path) {
            Ok(Some(manifest)) => {
                let projects = projects_from_manifest(workspace, &manifest);
                if !projects.is_empty() {
                    debug!("Board built from manifest {}", path.display());
                    return BoardSummary::from_projects(projects);
                }
                debug!(
                    "Manifest {} has no project with tasks, using discovery",
                    path.display()
                );
            }
            Ok(None) => debug!("No manifest at {}, using discovery", path.display()),
            Err(e) => warn!("{e}; using discovery"),
        }
    }
    BoardSummary::from_projects(projects_from_discovery(workspace))
}

/// Manifest projects with at least one checkbox, in manifest order.
pub fn projects_from_manifest(workspace: &Workspace, manifest: &Manifest) -> Vec<ProjectSummary> {
    manifest
        .entries
        .iter()
        .filter_map(|entry| {
            let path = resolve_entry(workspace.root(), &entry.file);
            let parsed = read_parsed(&path);
            if parsed.is_empty() {
                return None;
            }
            let name = entry.declared_name().map_or_else(
                || path.parent().map(dir_name).unwrap_or_default(),
                ToString::to_string,
            );
            Some(ProjectSummary::from_parsed(
                name,
                path.display().to_string(),
                parsed,
            ))
        })
        .collect()
}

/// Discovered projects with at least one checkbox, in path order.
pub fn projects_from_discovery(workspace: &Workspace) -> Vec<ProjectSummary> {
    discover(workspace)
        .into_iter()
        .filter_map(|path| {
            let parsed = read_parsed(&path);
            if parsed.is_empty() {
                return None;
            }
            let name = workspace.label_for(discovery::parent_dir(&path));
            Some(ProjectSummary::from_parsed(
                name,
                path.display().to_string(),
                parsed,
            ))
        })
        .collect()
}

fn resolve_entry(root: &Path, file: &str) -> PathBuf {
    let joined = root.join(file);
    fs::canonicalize(&joined).unwrap_or(joined)
}

fn read_parsed(path: &Path) -> ParsedFile {
    parse_file(path).unwrap_or_else(|e| {
        debug!("Treating {} as empty: {e}", path.display());
        ParsedFile::default()
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::workspace::{DASHBOARD_LABEL, DEFAULT_OWN_TASK_FILE, WORKSPACE_LABEL};

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn workspace(temp_dir: &TempDir) -> Workspace {
        Workspace::new(temp_dir.path(), Path::new("dashboard"), DEFAULT_OWN_TASK_FILE).unwrap()
    }

    #[test]
    fn test_discovery_labels() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "TODO.md", "- [ ] root task\n");
        write(root, "dashboard/TODO.md", "- [x] dash task\n");
        write(root, "alpha/TODO.md", "- [ ] alpha task\n");

        let board = build_board(&workspace(&temp_dir), None);
        let names: Vec<&str> = board.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec![WORKSPACE_LABEL, "alpha", DASHBOARD_LABEL]);
    }

    #[test]
    fn test_empty_files_are_excluded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "alpha/TODO.md", "# nothing to do\n");
        write(root, "beta/TODO.md", "- [x] one\n- [ ] two\n");

        let board = build_board(&workspace(&temp_dir), None);
        assert_eq!(board.projects.len(), 1);
        assert_eq!(board.projects[0].name, "beta");
        assert_eq!(board.total, 2);
        assert_eq!(board.done, 1);
    }

    #[test]
    fn test_undecodable_file_degrades_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("alpha")).unwrap();
        fs::write(root.join("alpha/TODO.md"), [0xff, 0xfe, 0x00, 0x2d]).unwrap();

        let board = build_board(&workspace(&temp_dir), None);
        assert!(board.is_empty());
        assert_eq!(board.percent, 0);
    }

    #[test]
    fn test_manifest_name_defaults_to_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "alpha/TODO.md", "- [ ] a\n");
        let manifest = Manifest {
            entries: vec![ManifestEntry {
                name: None,
                file: "alpha/TODO.md".to_string(),
            }],
        };
        let projects = projects_from_manifest(&workspace(&temp_dir), &manifest);
        assert_eq!(projects[0].name, "alpha");
        assert!(Path::new(&projects[0].path).is_absolute());
    }
}
