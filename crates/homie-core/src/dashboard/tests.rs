//! Tests for the dashboard facade.

use std::{fs, sync::Arc};

use jiff::{SignedDuration, Timestamp};
use tempfile::TempDir;

use super::*;
use crate::{
    actions::{ActionRegistry, ManualClock},
    config::DashboardConfig,
    models::ActionDefinition,
};

/// Helper function to create a dashboard over a temp workspace
async fn create_test_dashboard(clock: Arc<ManualClock>) -> (TempDir, Dashboard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let registry = ActionRegistry::new(vec![ActionDefinition::new(
        "say_hi",
        "Say Hi",
        &["sh", "-c", "echo hi"],
        5,
    )]);
    let dashboard = DashboardBuilder::new()
        .with_workspace(Some(temp_dir.path()))
        .with_registry(registry)
        .with_cooldown_seconds(Some(30))
        .with_clock(clock)
        .build()
        .await
        .expect("Failed to create dashboard");
    (temp_dir, dashboard)
}

#[tokio::test]
async fn test_defaults_resolve_under_workspace() {
    let clock = Arc::new(ManualClock::default());
    let (temp_dir, dashboard) = create_test_dashboard(clock).await;
    let root = temp_dir.path().canonicalize().unwrap();

    assert_eq!(dashboard.workspace().root(), root);
    assert_eq!(dashboard.workspace().base_dir(), root.join("dashboard"));
    assert_eq!(
        dashboard.manifest_path(),
        root.join("dashboard").join("projects.json")
    );
    assert_eq!(dashboard.actions_catalog().cooldown_seconds, 30);
}

#[tokio::test]
async fn test_missing_workspace_fails_to_build() {
    let temp_dir = TempDir::new().unwrap();
    let result = DashboardBuilder::new()
        .with_workspace(Some(temp_dir.path().join("nope")))
        .build()
        .await;
    assert!(matches!(result, Err(DashboardError::FileSystem { .. })));
}

#[tokio::test]
async fn test_explicit_settings_override_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = DashboardConfig {
        workspace: Some(temp_dir.path().to_path_buf()),
        cooldown_seconds: Some(5),
        manifest: Some("custom.json".into()),
        actions: Some(vec![ActionDefinition::new("noop", "Noop", &["true"], 1)]),
        ..DashboardConfig::default()
    };

    let dashboard = DashboardBuilder::new()
        .with_config(config)
        .with_cooldown_seconds(Some(90))
        .build()
        .await
        .unwrap();

    let root = temp_dir.path().canonicalize().unwrap();
    assert_eq!(dashboard.manifest_path(), root.join("custom.json"));
    let catalog = dashboard.actions_catalog();
    assert_eq!(catalog.cooldown_seconds, 90);
    assert_eq!(catalog.actions.len(), 1);
    assert_eq!(catalog.actions[0].id, "noop");
}

#[tokio::test]
async fn test_board_and_toggle_round_trip() {
    let clock = Arc::new(ManualClock::default());
    let (temp_dir, dashboard) = create_test_dashboard(clock).await;
    let project = temp_dir.path().join("alpha");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("TODO.md"), "# Alpha\n- [ ] one\n- [x] two\n").unwrap();

    let board = dashboard.board().await.unwrap();
    assert_eq!(board.projects.len(), 1);
    assert_eq!(board.projects[0].name, "alpha");
    assert_eq!((board.total, board.done, board.percent), (2, 1, 50));

    let item = dashboard
        .toggle(&ToggleTask {
            path: "alpha/TODO.md".to_string(),
            line_no: 1,
            done: true,
        })
        .await
        .unwrap();
    assert!(item.done);
    assert_eq!(item.text, "one");

    let board = dashboard.board().await.unwrap();
    assert_eq!((board.total, board.done, board.percent), (2, 2, 100));
}

#[tokio::test]
async fn test_run_action_respects_cooldown() {
    let clock = Arc::new(ManualClock::new(Timestamp::from_second(1_000).unwrap()));
    let (_temp_dir, dashboard) = create_test_dashboard(Arc::clone(&clock)).await;
    let params = RunAction {
        action: "say_hi".to_string(),
    };

    let run = dashboard.run_action(&params).await.unwrap();
    assert!(run.succeeded());
    assert_eq!(run.stdout.trim(), "hi");

    let err = dashboard.run_action(&params).await.unwrap_err();
    assert!(matches!(err, DispatchError::CooldownActive { seconds_left: 30, .. }));
    assert_eq!(dashboard.actions_catalog().actions[0].cooldown_left_seconds, 30);

    clock.advance(SignedDuration::from_secs(30));
    assert!(dashboard.run_action(&params).await.is_ok());
}

#[tokio::test]
async fn test_service_logs_rejects_unknown_unit() {
    let clock = Arc::new(ManualClock::default());
    let (_temp_dir, dashboard) = create_test_dashboard(clock).await;
    let err = dashboard
        .service_logs(&ServiceLogs {
            service: "sshd.service".to_string(),
            lines: 10,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, LogsError::ServiceNotAllowed { .. }));
}
