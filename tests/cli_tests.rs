//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// growl with an isolated, empty config location
fn growl_bin(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("growl").expect("binary builds");
    cmd.env("GROWL_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("GROWL_PLATFORM")
        .env_remove("GROWL_EXECUTOR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--sticky"))
        .stdout(predicate::str::contains("--priority"))
        .stdout(predicate::str::contains("--image"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn message_is_required() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir).assert().failure().code(2);
}

#[test]
fn darwin_dry_run_with_title() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["--platform", "darwin", "--dry-run", "-t", "Mail", "New mail"])
        .assert()
        .success()
        .stdout("growlnotify -m \"New mail\" Mail\n");
}

#[test]
fn linux_dry_run_with_title() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["--platform", "linux", "--dry-run", "-t", "Mail", "New mail"])
        .assert()
        .success()
        .stdout("notify-send 'Mail'  'New mail'\n");
}

#[test]
fn darwin_dry_run_all_options() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args([
            "--platform",
            "darwin",
            "--dry-run",
            "--image",
            "file.txt",
            "-s",
            "-p",
            "-1",
            "-n",
            "Builder",
            "-w",
            "-i",
            "build",
            "Done",
        ])
        .assert()
        .success()
        .stdout("growlnotify --icon txt --sticky --priority -1 --name Builder -w -d build -m \"Done\"\n");
}

#[test]
fn linux_dry_run_ignores_darwin_only_options() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args([
            "--platform",
            "linux",
            "--dry-run",
            "--image",
            "icon.png",
            "-n",
            "Builder",
            "-w",
            "-i",
            "build",
            "-p",
            "High",
            "Done",
        ])
        .assert()
        .success()
        .stdout("notify-send -i icon.png 'Done'\n");
}

#[test]
fn platform_from_environment() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .env("GROWL_PLATFORM", "darwin")
        .args(["--dry-run", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("growlnotify"));
}

#[test]
fn config_defaults_apply_to_notifications() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["config", "set", "notification.priority", "critical"])
        .assert()
        .success();
    growl_bin(&dir)
        .args(["config", "set", "notification.title", "CI"])
        .assert()
        .success();

    growl_bin(&dir)
        .args(["--platform", "linux", "--dry-run", "Done"])
        .assert()
        .success()
        .stdout("notify-send -u critical 'CI'  'Done'\n");
}

#[test]
fn cli_flags_override_config_defaults() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["config", "set", "platform", "darwin"])
        .assert()
        .success();

    growl_bin(&dir)
        .args(["--platform", "linux", "--dry-run", "Done"])
        .assert()
        .success()
        .stdout("notify-send 'Done'\n");
}

#[test]
fn empty_title_and_image_are_omitted() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["--platform", "linux", "--dry-run", "-t", "", "--image", "", "Done"])
        .assert()
        .success()
        .stdout("notify-send 'Done'\n");
}

#[test]
fn zero_padded_priority_is_dropped() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .args(["--platform", "darwin", "--dry-run", "-p", "01", "Done"])
        .assert()
        .success()
        .stdout("growlnotify -m \"Done\"\n");
}

#[test]
fn executor_help_mentions_legacy_shell_invocation() {
    let dir = TempDir::new().unwrap();
    growl_bin(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("legacy invocation"));
}
