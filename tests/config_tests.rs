//! Config subcommand integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn growl_bin(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("growl").expect("binary builds");
    cmd.env("GROWL_CONFIG", config_dir.path().join("config.toml"));
    cmd
}

#[test]
fn config_path_points_at_override() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_list_with_no_file() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("platform"))
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["config", "set", "notification.name", "Builder"])
        .assert()
        .success();

    growl_bin(&dir)
        .args(["config", "get", "notification.name"])
        .assert()
        .success()
        .stdout("Builder\n");

    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("[notification]"));
    assert!(content.contains("name = \"Builder\""));
}

#[test]
fn config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir).args(["config", "init"]).assert().success();

    growl_bin(&dir)
        .args(["config", "get", "executor"])
        .assert()
        .success()
        .stdout("direct\n");
}
