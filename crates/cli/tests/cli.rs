// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end tests driving the `jot` binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn jot(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jot").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn commands_outside_a_store_fail() {
    let dir = TempDir::new().unwrap();
    jot(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn init_new_list_roundtrip() {
    let dir = TempDir::new().unwrap();

    jot(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized note store"));

    jot(&dir)
        .args(["new", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created "));

    jot(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"));
}

#[test]
fn edit_history_revert_roundtrip() {
    let dir = TempDir::new().unwrap();
    jot(&dir).arg("init").assert().success();

    let output = jot(&dir).args(["new", "v1"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let id = stdout.trim().strip_prefix("Created ").unwrap().to_string();

    jot(&dir).args(["edit", &id, "v2"]).assert().success();

    jot(&dir)
        .args(["history", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. ").and(predicate::str::contains("v1")));

    jot(&dir)
        .args(["revert", &id, "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reverted"));

    jot(&dir)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("v1\n"));
}

#[test]
fn sync_without_remote_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    jot(&dir).arg("init").assert().success();

    jot(&dir)
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no remote configured"));
}

#[test]
fn empty_note_is_rejected() {
    let dir = TempDir::new().unwrap();
    jot(&dir).arg("init").assert().success();

    jot(&dir)
        .args(["new", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}
