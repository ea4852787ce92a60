// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use tempfile::TempDir;

use super::run_impl;
use crate::config::Config;
use crate::error::Error;

#[test]
fn init_creates_store_with_config_and_gitignore() {
    let dir = TempDir::new().unwrap();
    run_impl(dir.path(), None).unwrap();

    let store_dir = dir.path().join(".jot");
    assert!(store_dir.is_dir());
    assert!(store_dir.join("config.toml").is_file());
    assert_eq!(
        std::fs::read_to_string(store_dir.join(".gitignore")).unwrap(),
        "lock\n"
    );

    let config = Config::load(&store_dir).unwrap();
    assert_eq!(config.remote, None);
    assert!(config.snapshot_on_revert);
}

#[test]
fn init_records_remote_url() {
    let dir = TempDir::new().unwrap();
    run_impl(dir.path(), Some("http://localhost:5000/api/notes".into())).unwrap();

    let config = Config::load(&dir.path().join(".jot")).unwrap();
    assert_eq!(
        config.remote.as_deref(),
        Some("http://localhost:5000/api/notes")
    );
}

#[test]
fn init_twice_fails() {
    let dir = TempDir::new().unwrap();
    run_impl(dir.path(), None).unwrap();

    let err = run_impl(dir.path(), None).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized(_)));
}
