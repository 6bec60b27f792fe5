//! Corruption recovery tests for gymlog.
//!
//! These tests verify the system can handle:
//! - Corrupted progress log files
//! - Unknown stored preferences
//! - Stored logs with missing or malformed entries

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gymlog").expect("Failed to find gymlog binary");
    cmd.env("XDG_CONFIG_HOME", dir.join("config"))
        .arg("--data-dir")
        .arg(dir.join("data"));
    cmd
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

fn store_dir(dir: &Path) -> PathBuf {
    let store = dir.join("data/store");
    fs::create_dir_all(&store).unwrap();
    store
}

#[test]
fn test_corrupted_progress_log() {
    let temp_dir = setup_test_dir();
    let store = store_dir(temp_dir.path());
    fs::write(store.join("progressLog"), "{ invalid json }}}}").unwrap();

    cli(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bänkpress"));

    // Next write replaces the corrupt file with a clean log
    cli(temp_dir.path())
        .args(["start", "bench", "50"])
        .assert()
        .success();

    let raw = fs::read_to_string(store.join("progressLog")).unwrap();
    let log: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(log["bench"]["start"], "50");
    assert_eq!(log.as_object().unwrap().len(), 8);
}

#[test]
fn test_unknown_stored_preferences() {
    let temp_dir = setup_test_dir();
    let store = store_dir(temp_dir.path());
    fs::write(store.join("theme"), "sepia").unwrap();
    fs::write(store.join("compactMode"), "tiny").unwrap();

    cli(temp_dir.path())
        .arg("prefs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme:   system"))
        .stdout(predicate::str::contains("Compact: auto"));
}

#[test]
fn test_partial_stored_log() {
    let temp_dir = setup_test_dir();
    let store = store_dir(temp_dir.path());
    // Only one exercise, with a short actuals array
    fs::write(
        store.join("progressLog"),
        r#"{"plank":{"start":"40","actuals":["41"]}}"#,
    )
    .unwrap();

    cli(temp_dir.path())
        .args(["export", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Plankan,3×30–45 sek,40,40,41,45,,50,,55,",
        ))
        .stdout(predicate::str::contains("Latsdrag,4×8–10,,8,,9,,10,,10,"));
}

#[test]
fn test_numeric_stored_values_are_kept() {
    let temp_dir = setup_test_dir();
    let store = store_dir(temp_dir.path());
    fs::write(
        store.join("progressLog"),
        r#"{"bench":{"start":40},"plank":{"start":"30","actuals":[31,null]}}"#,
    )
    .unwrap();

    cli(temp_dir.path())
        .args(["export", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bänkpress,4×8–10,40,8,,9,,10,,10,"))
        .stdout(predicate::str::contains(
            "Plankan,3×30–45 sek,30,30,31,35,,40,,45,",
        ));
}

#[test]
fn test_non_numeric_start_renders_empty_targets() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .args(["start", "plank", "lång"])
        .assert()
        .success();

    cli(temp_dir.path())
        .args(["export", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plankan,3×30–45 sek,lång,,,,,,,,"));
}

#[test]
fn test_empty_store_files() {
    let temp_dir = setup_test_dir();
    let store = store_dir(temp_dir.path());
    fs::write(store.join("progressLog"), "").unwrap();
    fs::write(store.join("theme"), "").unwrap();

    cli(temp_dir.path()).arg("show").assert().success();
}
