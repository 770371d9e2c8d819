//! Integration tests for configuration layering.
//!
//! Tests the priority chain: hardcoded defaults < XDG config < project config < CLI args

#![allow(clippy::unwrap_used)] // Test code uses unwrap for brevity
#![allow(deprecated)] // cargo_bin deprecation warning

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use extreme_scan_test_support::SyntheticImageBuilder;
use predicates::prelude::*;

fn scan_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("extreme-scan").unwrap();
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Directory with one image that is 3% near-black.
fn three_percent_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let img = SyntheticImageBuilder::with_extreme_pixels(10, 10, 3, [0, 0, 0]);
    SyntheticImageBuilder::save_png(dir.path(), "dim.png", &img);
    dir
}

#[test]
fn test_project_config_threshold_applies() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join(".extreme-scan.toml"),
        r"
[scan]
threshold = 2.0
dry_run = true
",
    )
    .unwrap();
    let dir = three_percent_dir();

    scan_cmd(home.path())
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename to x-dim.png"));
}

#[test]
fn test_cli_threshold_overrides_project_config() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join(".extreme-scan.toml"),
        r"
[scan]
threshold = 2.0
",
    )
    .unwrap();
    let dir = three_percent_dir();

    scan_cmd(home.path())
        .arg("--threshold")
        .arg("5")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dim.png - OK"));
}

#[test]
fn test_project_config_overrides_xdg_config() {
    let home = tempfile::tempdir().unwrap();
    let xdg_dir = home.path().join(".config").join("extreme-scan");
    fs::create_dir_all(&xdg_dir).unwrap();
    fs::write(
        xdg_dir.join("config.toml"),
        r"
[scan]
threshold = 2.0
dry_run = true
",
    )
    .unwrap();
    fs::write(
        home.path().join(".extreme-scan.toml"),
        r"
[scan]
threshold = 50.0
",
    )
    .unwrap();
    let dir = three_percent_dir();

    scan_cmd(home.path())
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("dim.png - OK"));
}

#[test]
fn test_xdg_config_applies() {
    let home = tempfile::tempdir().unwrap();
    let xdg_dir = home.path().join(".config").join("extreme-scan");
    fs::create_dir_all(&xdg_dir).unwrap();
    fs::write(
        xdg_dir.join("config.toml"),
        r"
[output]
quiet = true
",
    )
    .unwrap();
    let dir = three_percent_dir();

    scan_cmd(home.path())
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Processing")
                .not()
                .and(predicate::str::contains("Total files: 1")),
        );
}

#[test]
fn test_invalid_config_threshold_warns_and_falls_back() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join(".extreme-scan.toml"),
        r"
[scan]
threshold = 500.0
",
    )
    .unwrap();
    let dir = three_percent_dir();

    scan_cmd(home.path())
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("scan.threshold must be 0.0-100.0"))
        .stdout(predicate::str::contains("dim.png - OK"));
}

#[test]
fn test_unparseable_config_is_ignored() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".extreme-scan.toml"), "[scan\nthreshold =").unwrap();
    let dir = three_percent_dir();

    scan_cmd(home.path())
        .arg("-v")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to parse config file"));
}
