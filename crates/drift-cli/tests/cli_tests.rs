//! Integration tests for the cfgdrift binary.
//!
//! These tests exercise the compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

/// Get a Command for the cfgdrift binary
fn cfgdrift() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cfgdrift"));
    cmd.env_remove("CFGDRIFT_HOME").env_remove("RUST_LOG");
    cmd
}

/// Render a built-in default through the binary itself
fn defaults_of(file: &str) -> Vec<u8> {
    cfgdrift()
        .args(["defaults", file])
        .output()
        .expect("failed to run cfgdrift defaults")
        .stdout
}

/// Create `<home>/config` populated with the current defaults
fn setup_home() -> (TempDir, PathBuf) {
    let home = tempdir().unwrap();
    let config_dir = home.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    for file in ["config.toml", "app.toml"] {
        fs::write(config_dir.join(file), defaults_of(file)).unwrap();
    }
    (home, config_dir)
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    cfgdrift()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("defaults"));
}

#[test]
fn test_version_output() {
    cfgdrift()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cfgdrift"));
}

#[test]
fn test_no_command_prints_hint() {
    cfgdrift()
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}

// ============================================================================
// Defaults Command
// ============================================================================

#[test]
fn test_defaults_config_toml() {
    cfgdrift()
        .args(["defaults", "config.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[rpc]"))
        .stdout(predicate::str::contains("moniker"));
}

#[test]
fn test_defaults_unknown_file_fails() {
    cfgdrift()
        .args(["defaults", "client.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config file"));
}

// ============================================================================
// Check Command
// ============================================================================

#[test]
fn test_check_up_to_date() {
    let (home, _) = setup_home();

    cfgdrift()
        .args(["check", "--home"])
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml is up to date."))
        .stdout(predicate::str::contains("app.toml is up to date."))
        .stdout(predicate::str::contains("outdated").not());
}

#[test]
fn test_check_home_from_env() {
    let (home, _) = setup_home();

    cfgdrift()
        .arg("check")
        .env("CFGDRIFT_HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("app.toml is up to date."));
}

#[test]
fn test_check_declined_prompt_leaves_file() {
    let (home, config_dir) = setup_home();
    let stale = "moniker = \"my-node\"\nfast_sync = true\n";
    fs::write(config_dir.join("config.toml"), stale).unwrap();

    cfgdrift()
        .args(["check", "--home"])
        .arg(home.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your config.toml file structure is outdated."))
        .stdout(predicate::str::contains("  - fast_sync"))
        .stdout(predicate::str::contains("  + rpc"))
        .stdout(predicate::str::contains("  * moniker"))
        .stdout(predicate::str::contains("(y/n): "))
        .stdout(predicate::str::contains("config.toml was not updated."));

    assert_eq!(fs::read_to_string(config_dir.join("config.toml")).unwrap(), stale);
}

#[test]
fn test_check_accepted_prompt_rewrites_file() {
    let (home, config_dir) = setup_home();
    fs::write(config_dir.join("app.toml"), "pruning = \"default\"\n").unwrap();

    cfgdrift()
        .args(["check", "--home"])
        .arg(home.path())
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("app.toml has been updated with the new structure."));

    assert_eq!(fs::read(config_dir.join("app.toml")).unwrap(), defaults_of("app.toml"));
}

#[test]
fn test_check_closed_stdin_declines() {
    let (home, config_dir) = setup_home();
    fs::write(config_dir.join("app.toml"), "legacy = 1\n").unwrap();

    cfgdrift()
        .args(["check", "--home"])
        .arg(home.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("app.toml was not updated."));

    assert_eq!(fs::read_to_string(config_dir.join("app.toml")).unwrap(), "legacy = 1\n");
}

#[test]
fn test_check_yes_then_no_drift() {
    let (home, config_dir) = setup_home();
    fs::write(config_dir.join("config.toml"), "[p2p]\npex = false\n").unwrap();

    cfgdrift()
        .args(["check", "--yes", "--home"])
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(y/n)").not())
        .stdout(predicate::str::contains("config.toml has been updated"));

    cfgdrift()
        .args(["check", "--home"])
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml is up to date."));
}

#[test]
fn test_check_dry_run_never_writes() {
    let (home, config_dir) = setup_home();
    fs::write(config_dir.join("app.toml"), "legacy = 1\n").unwrap();

    cfgdrift()
        .args(["check", "--dry-run", "--home"])
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(y/n)").not())
        .stdout(predicate::str::contains("cfgdrift check --yes"));

    assert_eq!(fs::read_to_string(config_dir.join("app.toml")).unwrap(), "legacy = 1\n");
}

#[test]
fn test_check_missing_file_fails_before_later_files() {
    let (home, config_dir) = setup_home();
    fs::remove_file(config_dir.join("config.toml")).unwrap();
    fs::write(config_dir.join("app.toml"), "legacy = 1\n").unwrap();

    cfgdrift()
        .args(["check", "--yes", "--home"])
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading config.toml"));

    assert_eq!(fs::read_to_string(config_dir.join("app.toml")).unwrap(), "legacy = 1\n");
}

#[test]
fn test_check_malformed_file_fails() {
    let (home, config_dir) = setup_home();
    fs::write(config_dir.join("config.toml"), "[rpc\nladdr = 1").unwrap();

    cfgdrift()
        .args(["check", "--home"])
        .arg(home.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error parsing existing config.toml"));
}

// ============================================================================
// Check-File Command
// ============================================================================

#[test]
fn test_check_file_single_file() {
    let (_home, config_dir) = setup_home();
    fs::write(config_dir.join("app.toml"), "halt-height = 5\n").unwrap();

    cfgdrift()
        .args(["check-file", "app.toml", "--yes", "--dir"])
        .arg(&config_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("  * halt-height"))
        .stdout(predicate::str::contains("  + api"));

    assert_eq!(fs::read(config_dir.join("app.toml")).unwrap(), defaults_of("app.toml"));
}

#[test]
fn test_check_file_unknown_name() {
    let dir = tempdir().unwrap();

    cfgdrift()
        .args(["check-file", "genesis.json", "--dir"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Known files: config.toml, app.toml"));
}
