//! Project manifest: an explicit, ordered list of task files.
//!
//! Two JSON shapes are accepted:
//!
//! ```json
//! {"projects": [{"name": "Alpha", "file": "alpha/TODO.md"}]}
//! [{"file": "beta/TODO.md"}]
//! ```

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// One declared project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Display name; the file's parent directory name when absent or blank
    #[serde(default)]
    pub name: Option<String>,
    /// Task file path relative to the workspace root
    pub file: String,
}

impl ManifestEntry {
    /// The declared name, if it is not blank.
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ManifestDocument {
    Wrapped { projects: Vec<ManifestEntry> },
    Bare(Vec<ManifestEntry>),
}

/// Parsed manifest, entries in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Parses manifest JSON.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::MalformedManifest` for JSON that matches
    /// neither accepted shape.
    pub fn parse(path: &Path, json: &str) -> Result<Self> {
        let document: ManifestDocument =
            serde_json::from_str(json).map_err(|e| DashboardError::MalformedManifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let entries = match document {
            ManifestDocument::Wrapped { projects } => projects,
            ManifestDocument::Bare(entries) => entries,
        };
        Ok(Self { entries })
    }

    /// Loads the manifest at `path`; `Ok(None)` when there is none.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::MalformedManifest` when the file exists but
    /// cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(json) => Self::parse(path, &json).map(Some),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DashboardError::MalformedManifest {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_shape() {
        let manifest = Manifest::parse(
            Path::new("projects.json"),
            r#"{"projects":[{"name":"Alpha","file":"alpha/TODO.md"},{"file":"beta/TODO.md"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(manifest.entries[0].declared_name(), Some("Alpha"));
        assert_eq!(manifest.entries[1].declared_name(), None);
    }

    #[test]
    fn test_bare_shape_and_blank_name() {
        let manifest = Manifest::parse(
            Path::new("projects.json"),
            r#"[{"name":"  ","file":"gamma/TODO.md"}]"#,
        )
        .unwrap();
        assert_eq!(manifest.entries[0].declared_name(), None);
    }

    #[test]
    fn test_malformed() {
        let err = Manifest::parse(Path::new("projects.json"), r#"{"projects": 3}"#).unwrap_err();
        assert!(matches!(err, DashboardError::MalformedManifest { .. }));
    }

    #[test]
    fn test_missing_file_is_none() {
        let loaded = Manifest::load(Path::new("/nonexistent/homie/projects.json")).unwrap();
        assert!(loaded.is_none());
    }
}
