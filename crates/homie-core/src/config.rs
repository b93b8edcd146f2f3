//! Optional JSON configuration file.
//!
//! Looked up as `$XDG_CONFIG_HOME/homie/config.json` unless a path is given
//! explicitly. Every key is optional; command-line flags override it and
//! built-in defaults fill whatever neither sets.
//!
//! ```json
//! {
//!   "workspace": "/home/me/workspace",
//!   "cooldown_seconds": 120,
//!   "actions": [
//!     {"id": "check", "label": "Check", "command": ["true"], "timeout_seconds": 5}
//!   ]
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DashboardError, Result},
    models::ActionDefinition,
};

const CONFIG_PREFIX: &str = "homie";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Workspace root containing the task files
    pub workspace: Option<PathBuf>,
    /// Dashboard's own directory, relative to the workspace unless absolute
    pub base_dir: Option<PathBuf>,
    /// Project manifest, relative to the workspace unless absolute
    pub manifest: Option<PathBuf>,
    /// Minimum seconds between two runs of one action
    pub cooldown_seconds: Option<u64>,
    /// File name of the dashboard's own task file
    pub own_task_file: Option<String>,
    /// Replaces the built-in action table when present
    pub actions: Option<Vec<ActionDefinition>>,
}

impl DashboardConfig {
    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::FileSystem` if the file cannot be read and
    /// `DashboardError::Configuration` if it is not valid config JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| DashboardError::file_system(path, e))?;
        serde_json::from_str(&json).map_err(|e| {
            DashboardError::configuration(format!("invalid config {}: {e}", path.display()))
        })
    }

    /// Reads the XDG config file if one exists, else returns defaults.
    ///
    /// # Errors
    ///
    /// Same as [`DashboardConfig::load`] for a config file that exists.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => {
                debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Location of an existing XDG config file.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(CONFIG_PREFIX).find_config_file(CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"cooldown_seconds": 5, "actions": [{"id":"noop","label":"Noop","command":["true"],"timeout_seconds":1}]}"#,
        )
        .unwrap();

        let config = DashboardConfig::load(&path).unwrap();
        assert_eq!(config.cooldown_seconds, Some(5));
        assert!(config.workspace.is_none());
        assert_eq!(config.actions.unwrap()[0].id, "noop");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"port": 8899}"#).unwrap();
        assert!(matches!(
            DashboardConfig::load(&path),
            Err(DashboardError::Configuration { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            DashboardConfig::load(&temp_dir.path().join("missing.json")),
            Err(DashboardError::FileSystem { .. })
        ));
    }
}
