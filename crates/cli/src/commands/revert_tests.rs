// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::run_impl;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[test]
fn revert_restores_the_numbered_version() {
    let mut ctx = TestContext::new();
    let id = ctx.create_note("v1");
    ctx.notebook.edit(&id, "v2").unwrap();
    ctx.notebook.edit(&id, "v3").unwrap();

    run_impl(&mut ctx.notebook, &id, 1).unwrap();

    let note = ctx.notebook.get(&id).unwrap();
    assert_eq!(note.content, "v1");
    // v1, v2, plus the pre-revert snapshot of v3
    assert_eq!(note.snapshots().len(), 3);
    assert_eq!(note.snapshots()[2].content, "v3");
}

#[test]
fn version_zero_is_rejected() {
    let mut ctx = TestContext::new();
    let id = ctx.create_note("v1");
    let err = run_impl(&mut ctx.notebook, &id, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidVersion));
}

#[test]
fn out_of_range_version_fails() {
    let mut ctx = TestContext::new();
    let id = ctx.create_note("v1");
    let err = run_impl(&mut ctx.notebook, &id, 5).unwrap_err();
    assert!(matches!(
        err,
        Error::Core(jot_core::Error::SnapshotNotFound { .. })
    ));
}
