//! Binary tests for papmap-tables
//!
//! These run the actual binary as a subprocess.

#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn papmap() -> Command {
    let mut cmd = Command::cargo_bin("papmap-tables").unwrap();
    cmd.env_remove("PAPMAP_INPUT_DIR")
        .env_remove("PAPMAP_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("xlsx")).unwrap();

    papmap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Scenario 6"));

    for n in 1..=6 {
        let path = dir.path().join("json").join(format!("scenario-{n}.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
    }
}

#[test]
fn test_directories_from_flags() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tables");
    let output = dir.path().join("public").join("data");
    fs::create_dir(&input).unwrap();

    papmap()
        .arg("--input-dir")
        .arg(&input)
        .arg("--output-dir")
        .arg(&output)
        .assert()
        .success();

    assert!(output.join("scenario-1.json").exists());
}

#[test]
fn test_directories_from_env() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tables");
    let output = dir.path().join("out");
    fs::create_dir(&input).unwrap();

    papmap()
        .env("PAPMAP_INPUT_DIR", &input)
        .env("PAPMAP_OUTPUT_DIR", &output)
        .assert()
        .success();

    assert!(output.join("scenario-3.json").exists());
}

#[test]
fn test_missing_input_directory_fails() {
    let dir = TempDir::new().unwrap();

    papmap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input directory not found"));

    assert!(!dir.path().join("json").exists());
}

#[test]
fn test_corrupt_spreadsheet_fails_naming_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("xlsx");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("5-broken.xlsx"), b"garbage").unwrap();

    papmap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("5-broken.xlsx"))
        .stderr(predicate::str::contains("1 scenario(s) failed"));

    // The other scenarios are still written
    assert!(dir.path().join("json/scenario-4.json").exists());
    assert!(!dir.path().join("json/scenario-5.json").exists());
}

#[test]
fn test_skip_unreadable_succeeds() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("xlsx");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("5-broken.xlsx"), b"garbage").unwrap();

    papmap()
        .current_dir(dir.path())
        .arg("--skip-unreadable")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped"));

    assert_eq!(
        fs::read_to_string(dir.path().join("json/scenario-5.json")).unwrap(),
        "[]"
    );
}

#[test]
fn test_list_scenarios() {
    papmap()
        .arg("--list-scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("Post-colposcopy plan"))
        .stdout(predicate::str::contains("Referral Screen Result"))
        .stdout(predicate::str::contains("scenario-6.json"));
}

#[test]
fn test_help() {
    papmap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--input-dir"))
        .stdout(predicate::str::contains("--dense"));
}
