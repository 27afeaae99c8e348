//! Integration tests for the config command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::tally_cmd;

#[test]
fn test_config_set_and_get_file() {
    let temp = TempDir::new().unwrap();

    tally_cmd()
        .current_dir(temp.path())
        .args(["config", "file", "logs/releases.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set file = logs/releases.txt"));

    let content = fs::read_to_string(temp.path().join(".tally/config.toml")).unwrap();
    assert!(content.contains("file = \"logs/releases.txt\""));

    tally_cmd()
        .current_dir(temp.path())
        .args(["config", "file"])
        .assert()
        .success()
        .stdout("logs/releases.txt\n");
}

#[test]
fn test_configured_file_is_used() {
    let temp = TempDir::new().unwrap();

    tally_cmd()
        .current_dir(temp.path())
        .args(["config", "file", "logs/releases.txt"])
        .assert()
        .success();

    tally_cmd()
        .current_dir(temp.path())
        .args(["add", "release 1"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("logs/releases.txt")).unwrap(),
        "release 1\n"
    );
}

#[test]
fn test_config_list_shows_default() {
    let temp = TempDir::new().unwrap();

    tally_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("file = release.txt"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    tally_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
