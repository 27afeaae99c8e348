//! Integration tests for the tally command line

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::tally_cmd;

fn add(temp: &TempDir, text: &str) {
    tally_cmd()
        .current_dir(temp.path())
        .arg("add")
        .arg(text)
        .assert()
        .success();
}

#[test]
fn test_add_and_lines_use_default_file() {
    let temp = TempDir::new().unwrap();
    add(&temp, "release 1");
    add(&temp, "release 2");

    assert!(temp.path().join("release.txt").exists());

    tally_cmd()
        .current_dir(temp.path())
        .arg("lines")
        .assert()
        .success()
        .stdout("release 1\nrelease 2\n");
}

#[test]
fn test_tag_and_list() {
    let temp = TempDir::new().unwrap();
    add(&temp, "release 1");
    add(&temp, "release 2");

    tally_cmd()
        .current_dir(temp.path())
        .args(["tag", "release 2", "current"])
        .assert()
        .success();

    tally_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout("release 1\nrelease 2 [current]\n");

    tally_cmd()
        .current_dir(temp.path())
        .args(["line", "current"])
        .assert()
        .success()
        .stdout("release 2\n");

    tally_cmd()
        .current_dir(temp.path())
        .args(["line-tag", "release 1"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_list_empty_log() {
    let temp = TempDir::new().unwrap();

    tally_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Log is empty"));
}

#[test]
fn test_up_down_and_boundary() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("release.txt");
    fs::write(&log, "release 1\nrelease 2 [current]\n").unwrap();

    tally_cmd()
        .current_dir(temp.path())
        .args(["up", "current"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "release 1 [current]\nrelease 2\n"
    );

    tally_cmd()
        .current_dir(temp.path())
        .args(["up", "current"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Cannot move tag"));

    tally_cmd()
        .current_dir(temp.path())
        .args(["down", "current"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "release 1\nrelease 2 [current]\n"
    );
}

#[test]
fn test_move_untag_and_remove_first() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("release.txt");
    fs::write(&log, "release 1 [current]\nrelease 2\nrelease 3\n").unwrap();

    tally_cmd()
        .current_dir(temp.path())
        .args(["move", "release 1", "release 3"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "release 1\nrelease 2\nrelease 3 [current]\n"
    );

    tally_cmd()
        .current_dir(temp.path())
        .args(["untag", "current"])
        .assert()
        .success();

    tally_cmd()
        .current_dir(temp.path())
        .arg("remove-first")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&log).unwrap(), "release 2\nrelease 3\n");
}

#[test]
fn test_error_exit_codes() {
    let temp = TempDir::new().unwrap();
    add(&temp, "release 1");

    tally_cmd()
        .current_dir(temp.path())
        .args(["tag", "release 9", "current"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No such line found: 'release 9'"));

    tally_cmd()
        .current_dir(temp.path())
        .args(["line", "current"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("tally tag <line> current"));

    tally_cmd()
        .current_dir(temp.path())
        .args(["add", "release [2]"])
        .assert()
        .code(5);
}

#[test]
fn test_file_flag_and_env() {
    let temp = TempDir::new().unwrap();

    tally_cmd()
        .current_dir(temp.path())
        .args(["--file", "other.txt", "add", "release 1"])
        .assert()
        .success();
    assert!(temp.path().join("other.txt").exists());
    assert!(!temp.path().join("release.txt").exists());

    tally_cmd()
        .current_dir(temp.path())
        .env("TALLY_FILE", "other.txt")
        .arg("lines")
        .assert()
        .success()
        .stdout("release 1\n");
}
