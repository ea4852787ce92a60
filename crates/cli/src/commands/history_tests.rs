// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::run_impl;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[test]
fn fresh_note_has_no_history() {
    let mut ctx = TestContext::new();
    let id = ctx.create_note("hello");

    let out = run_impl(&ctx.notebook, &id).unwrap();
    assert_eq!(out, "No version history available.");
}

#[test]
fn history_is_numbered_from_one_oldest_first() {
    let mut ctx = TestContext::new();
    let id = ctx.create_note("v1");
    ctx.notebook.edit(&id, "v2").unwrap();
    ctx.notebook.edit(&id, "v3").unwrap();

    let out = run_impl(&ctx.notebook, &id).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1. "));
    assert!(lines[0].ends_with("v1"));
    assert!(lines[1].starts_with("2. "));
    assert!(lines[1].ends_with("v2"));
}

#[test]
fn history_for_unknown_id_fails() {
    let ctx = TestContext::new();
    let err = run_impl(&ctx.notebook, "nope").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(jot_core::Error::NoteNotFound(_))
    ));
}
