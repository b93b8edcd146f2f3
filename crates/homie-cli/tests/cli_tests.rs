use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary workspace with one project
fn create_cli_test_workspace() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let project = temp_dir.path().join("alpha");
    fs::create_dir_all(&project).expect("Failed to create project dir");
    fs::write(project.join("TODO.md"), "# Alpha\n- [ ] write spec\n- [x] set up repo\n")
        .expect("Failed to write task file");
    temp_dir
}

/// Helper function to create a Command with --no-color and an isolated
/// config directory
fn homie_cmd(workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("homie").expect("Failed to find homie binary");
    cmd.env("XDG_CONFIG_HOME", workspace.join(".config"))
        .arg("--no-color")
        .arg("--workspace")
        .arg(workspace);
    cmd
}

/// Writes a config replacing the builtin actions with harmless ones.
fn write_test_config(workspace: &Path) -> std::path::PathBuf {
    let path = workspace.join("homie.json");
    fs::write(
        &path,
        r#"{
            "cooldown_seconds": 120,
            "actions": [
                {"id": "greet", "label": "Greet", "command": ["echo", "hello"], "timeout_seconds": 5},
                {"id": "fail", "label": "Fail", "command": ["sh", "-c", "exit 4"], "timeout_seconds": 5}
            ]
        }"#,
    )
    .expect("Failed to write config");
    path
}

#[test]
fn test_cli_board_is_default_command() {
    let temp_dir = create_cli_test_workspace();

    homie_cmd(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("# Task Board"))
        .stdout(predicate::str::contains("## alpha (1/2, 50%)"))
        .stdout(predicate::str::contains("- [ ] write spec (line 1)"));
}

#[test]
fn test_cli_board_json() {
    let temp_dir = create_cli_test_workspace();

    let output = homie_cmd(temp_dir.path())
        .args(["--json", "board"])
        .output()
        .expect("Failed to run homie");
    assert!(output.status.success());

    let board: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(board["total"], 2);
    assert_eq!(board["done"], 1);
    assert_eq!(board["percent"], 50);
    assert_eq!(board["projects"][0]["name"], "alpha");
}

#[test]
fn test_cli_empty_workspace() {
    let temp_dir = TempDir::new().unwrap();

    homie_cmd(temp_dir.path())
        .arg("board")
        .assert()
        .success()
        .stdout(predicate::str::contains("No task files found."));
}

#[test]
fn test_cli_toggle_writes_file() {
    let temp_dir = create_cli_test_workspace();

    homie_cmd(temp_dir.path())
        .args(["toggle", "alpha/TODO.md", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked line 1 of `alpha/TODO.md` as done"));

    let content = fs::read_to_string(temp_dir.path().join("alpha/TODO.md")).unwrap();
    assert_eq!(content, "# Alpha\n- [x] write spec\n- [x] set up repo\n");

    homie_cmd(temp_dir.path())
        .args(["toggle", "alpha/TODO.md", "2", "--undone"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("alpha/TODO.md")).unwrap();
    assert_eq!(content, "# Alpha\n- [x] write spec\n- [ ] set up repo\n");
}

#[test]
fn test_cli_toggle_rejects_heading_line() {
    let temp_dir = create_cli_test_workspace();

    homie_cmd(temp_dir.path())
        .args(["--json", "toggle", "alpha/TODO.md", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""ok": false"#))
        .stdout(predicate::str::contains("not_a_task_line"));
}

#[test]
fn test_cli_actions_lists_configured_actions() {
    let temp_dir = create_cli_test_workspace();
    let config = write_test_config(temp_dir.path());

    homie_cmd(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .arg("actions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cooldown: 120s"))
        .stdout(predicate::str::contains("- **Greet** (`greet`): ready"));
}

#[test]
fn test_cli_actions_lists_builtin_actions() {
    let temp_dir = create_cli_test_workspace();

    homie_cmd(temp_dir.path())
        .args(["--json", "actions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("restart_openclaw_gateway"))
        .stdout(predicate::str::contains("check_gateway_health"))
        .stdout(predicate::str::contains(r#""cooldown_seconds": 60"#));
}

#[test]
fn test_cli_run_action() {
    let temp_dir = create_cli_test_workspace();
    let config = write_test_config(temp_dir.path());

    homie_cmd(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--json", "run", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""ok": true"#))
        .stdout(predicate::str::contains(r#""exit_code": 0"#))
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn test_cli_run_failing_action_exits_non_zero() {
    let temp_dir = create_cli_test_workspace();
    let config = write_test_config(temp_dir.path());

    homie_cmd(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .args(["run", "fail"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("exited with code 4"));
}

#[test]
fn test_cli_run_unknown_action() {
    let temp_dir = create_cli_test_workspace();

    homie_cmd(temp_dir.path())
        .args(["--json", "run", "rm_rf"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("action_not_allowed"));
}

#[test]
fn test_cli_logs_rejects_unknown_service() {
    let temp_dir = create_cli_test_workspace();

    homie_cmd(temp_dir.path())
        .args(["logs", "sshd.service"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("is not allowed"));
}

#[test]
fn test_cli_missing_workspace_fails() {
    let temp_dir = TempDir::new().unwrap();

    homie_cmd(&temp_dir.path().join("missing"))
        .arg("board")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize dashboard"));
}

#[test]
fn test_cli_memory_and_issues() {
    let temp_dir = create_cli_test_workspace();
    let memory = temp_dir.path().join("memory");
    fs::create_dir_all(&memory).unwrap();
    fs::write(memory.join("2024-05-01.md"), "Installed the backup skill\n").unwrap();
    fs::write(memory.join("2024-05-02.md"), "Gateway restart failed twice\n").unwrap();

    homie_cmd(temp_dir.path())
        .args(["memory", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Memory 2024-05-01"))
        .stdout(predicate::str::contains("Installed the backup skill"));

    homie_cmd(temp_dir.path())
        .args(["activity", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gateway restart failed twice"))
        .stdout(predicate::str::contains("backup skill").not());

    homie_cmd(temp_dir.path())
        .args(["--json", "issues"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""nominal": false"#))
        .stdout(predicate::str::contains(r#""level": "error""#));
}

#[test]
fn test_cli_empty_journal() {
    let temp_dir = create_cli_test_workspace();

    homie_cmd(temp_dir.path())
        .arg("memory")
        .assert()
        .success()
        .stdout(predicate::str::contains("No memory files"));

    homie_cmd(temp_dir.path())
        .arg("issues")
        .assert()
        .success()
        .stdout(predicate::str::contains("All systems nominal."));
}
