// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jot-core: Shared library for the jot note-taking tool.
//!
//! This crate provides the note data model, durable local storage, the
//! lifecycle manager, and the sync engine used by the `jot` CLI.

pub mod error;
pub mod export;
pub mod id;
pub mod note;
pub mod notebook;
pub mod remote;
pub mod store;
pub mod sync;

pub use error::{Error, Result};
pub use note::{Note, VersionSnapshot};
pub use notebook::Notebook;
pub use remote::{PushReceipt, RemoteNote, RemoteStore};
pub use store::LocalStore;
pub use sync::{PushFailure, SyncEngine, SyncReport};
