//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn gate_button_bin() -> Command {
    let mut cmd = Command::cargo_bin("gate-button").expect("binary builds");
    cmd.env_remove("GATE_BUTTON_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    gate_button_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gate"))
        .stdout(predicate::str::contains("--pin"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--debounce"))
        .stdout(predicate::str::contains("--simulate"));
}

#[test]
fn version_output() {
    gate_button_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gate-button"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_honors_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gate.toml");

    gate_button_bin()
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("gate.toml"));
}

#[test]
fn config_path_honors_env() {
    gate_button_bin()
        .args(["config", "path"])
        .env("GATE_BUTTON_CONFIG", "/tmp/from-env.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/from-env.toml"));
}

#[test]
fn config_init_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    gate_button_bin()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("http://gatecontrol/trigger"));
    assert!(content.contains("pin = 4"));
}

#[test]
fn config_show_merges_file_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[gpio]\npin = 17\n").unwrap();

    gate_button_bin()
        .args(["config", "show", "--url", "http://10.1.1.1/open", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("pin = 17"))
        .stdout(predicate::str::contains("http://10.1.1.1/open"))
        .stdout(predicate::str::contains("aplay"));
}

#[test]
fn invalid_debounce_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    gate_button_bin()
        .args(["--debounce", "whenever", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gpio.debounce"));
}

#[test]
fn malformed_config_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[gate\n").unwrap();

    gate_button_bin()
        .args(["trigger", "--config"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn config_show_invalid_debounce_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    gate_button_bin()
        .args(["config", "show", "--debounce", "whenever", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gpio.debounce"));
}

#[test]
fn config_show_malformed_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[gpio\n").unwrap();

    gate_button_bin()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .code(2);
}

#[test]
fn config_init_twice_is_runtime_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    gate_button_bin()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();

    gate_button_bin()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}
