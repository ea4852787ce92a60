// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod delete;
pub mod edit;
pub mod export;
pub mod history;
pub mod init;
pub mod list;
pub mod new;
pub mod revert;
pub mod show;
pub mod sync;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::PathBuf;

use jot_core::{LocalStore, Notebook};

use crate::config::{find_store_dir, Config};
use crate::error::Result;

/// Opens the notebook for the nearest `.jot` store.
pub fn open_notebook() -> Result<(Notebook, Config, PathBuf)> {
    let store_dir = find_store_dir()?;
    let config = Config::load(&store_dir)?;
    let store = LocalStore::open(&store_dir)?;
    let notebook = Notebook::open(store)?.with_revert_snapshots(config.snapshot_on_revert);
    tracing::debug!(store = %store_dir.display(), "opened note store");
    Ok((notebook, config, store_dir))
}
