#![allow(dead_code)]

use std::{fs, path::Path, sync::Arc};

use homie_core::{ActionDefinition, ActionRegistry, Dashboard, DashboardBuilder, ManualClock};
use jiff::Timestamp;
use tempfile::TempDir;

/// Writes `content` to `rel` under `root`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("relative path has a parent"))
        .expect("Failed to create parent directories");
    fs::write(path, content).expect("Failed to write file");
}

/// Clock parked at a fixed instant.
pub fn test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Timestamp::from_second(1_700_000_000).expect("valid timestamp"),
    ))
}

/// Helper function to create a dashboard over an empty temp workspace
pub async fn create_test_dashboard(
    actions: Vec<ActionDefinition>,
    clock: Arc<ManualClock>,
) -> (TempDir, Dashboard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dashboard = DashboardBuilder::new()
        .with_workspace(Some(temp_dir.path()))
        .with_registry(ActionRegistry::new(actions))
        .with_clock(clock)
        .build()
        .await
        .expect("Failed to create dashboard");
    (temp_dir, dashboard)
}

/// Action appending one line to `counter` per execution.
pub fn counting_action(id: &str, counter: &Path, extra: &str) -> ActionDefinition {
    let script = format!("echo run >> '{}'{extra}", counter.display());
    ActionDefinition::new(id, id, &["sh", "-c", &script], 5)
}

/// Number of executions recorded by [`counting_action`].
pub fn run_count(counter: &Path) -> usize {
    fs::read_to_string(counter).map_or(0, |s| s.lines().count())
}
