// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jot-core operations.

use thiserror::Error;

/// All possible errors that can occur in jot-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("note not found: {0}")]
    NoteNotFound(String),

    #[error("snapshot {index} not found for note {id}")]
    SnapshotNotFound { id: String, index: usize },

    #[error("note content cannot be empty")]
    EmptyContent,

    #[error("store is locked by another process")]
    StoreLocked,

    #[error("corrupted store: {0}")]
    CorruptedStore(String),

    #[error("remote unavailable: {0}")]
    SyncUnavailable(String),

    #[error("push failed: {0}")]
    PushFailed(String),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for jot-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
