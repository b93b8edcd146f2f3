//! Builder for creating and configuring Dashboard instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Dashboard;
use crate::{
    actions::{ActionDispatcher, ActionRegistry, Clock, SystemClock, DEFAULT_COOLDOWN_SECONDS},
    config::DashboardConfig,
    error::{DashboardError, Result},
    workspace::{Workspace, DEFAULT_OWN_TASK_FILE},
};

const DEFAULT_BASE_DIR: &str = "dashboard";
const DEFAULT_MANIFEST: &str = "projects.json";

/// Builder for creating and configuring Dashboard instances.
///
/// Explicit `with_*` settings win over the config file, which wins over the
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct DashboardBuilder {
    config: DashboardConfig,
    workspace: Option<PathBuf>,
    base_dir: Option<PathBuf>,
    manifest: Option<PathBuf>,
    cooldown_seconds: Option<u64>,
    registry: Option<ActionRegistry>,
    clock: Option<Arc<dyn Clock>>,
}

impl DashboardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `config` as the layer beneath explicit settings.
    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the workspace root. Defaults to the current directory.
    pub fn with_workspace<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.workspace = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the dashboard's own directory. Defaults to `<workspace>/dashboard`.
    pub fn with_base_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.base_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the project manifest. Defaults to `<base_dir>/projects.json`.
    pub fn with_manifest<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.manifest = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_cooldown_seconds(mut self, seconds: Option<u64>) -> Self {
        if seconds.is_some() {
            self.cooldown_seconds = seconds;
        }
        self
    }

    pub fn with_registry(mut self, registry: ActionRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds the configured dashboard instance.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::FileSystem` if the workspace root does not
    /// exist or the current directory cannot be determined.
    pub async fn build(self) -> Result<Dashboard> {
        let Self {
            config,
            workspace,
            base_dir,
            manifest,
            cooldown_seconds,
            registry,
            clock,
        } = self;

        let root = match workspace.or(config.workspace) {
            Some(root) => root,
            None => std::env::current_dir().map_err(|e| DashboardError::file_system(".", e))?,
        };
        let base_dir = base_dir
            .or(config.base_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR));
        let own_task_file = config
            .own_task_file
            .unwrap_or_else(|| DEFAULT_OWN_TASK_FILE.to_string());

        let workspace = task::spawn_blocking(move || Workspace::new(&root, &base_dir, own_task_file))
            .await
            .map_err(|e| DashboardError::join(&e))??;

        let manifest_path = match manifest.or(config.manifest) {
            Some(path) if path.is_absolute() => path,
            Some(path) => workspace.root().join(path),
            None => workspace.base_dir().join(DEFAULT_MANIFEST),
        };
        let registry = registry
            .or_else(|| config.actions.map(ActionRegistry::new))
            .unwrap_or_default();
        let cooldown_seconds = cooldown_seconds
            .or(config.cooldown_seconds)
            .unwrap_or(DEFAULT_COOLDOWN_SECONDS);
        let clock = clock.unwrap_or_else(|| Arc::new(SystemClock));

        debug!(
            "Dashboard workspace={} base_dir={} manifest={} actions={} cooldown={}s",
            workspace.root().display(),
            workspace.base_dir().display(),
            manifest_path.display(),
            registry.len(),
            cooldown_seconds
        );

        Ok(Dashboard::new(
            workspace,
            manifest_path,
            ActionDispatcher::new(registry, cooldown_seconds, clock),
        ))
    }
}
