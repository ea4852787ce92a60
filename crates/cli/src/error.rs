// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the jotrs library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'jot init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no remote configured\n  hint: set 'remote' in .jot/config.toml or rerun 'jot init --remote <url>'")]
    NoRemote,

    #[error("invalid version number: versions are numbered from 1")]
    InvalidVersion,

    #[error("sync finished with failures: {pushed} pushed, {failed} failed")]
    PartialSync { pushed: usize, failed: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] jot_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for jotrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
