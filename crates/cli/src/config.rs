// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Note store configuration.
//!
//! Configuration lives in `.jot/config.toml` and holds:
//! - `remote`: URL of the remote note collection (absent = local-only)
//! - `snapshot_on_revert`: whether reverting snapshots the pre-revert state

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const STORE_DIR_NAME: &str = ".jot";
const CONFIG_FILE_NAME: &str = "config.toml";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Store configuration held in `.jot/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Remote note collection URL; absent means local-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    /// Snapshot the pre-revert state when reverting (default true).
    #[serde(default = "default_snapshot_on_revert")]
    pub snapshot_on_revert: bool,
}

fn default_snapshot_on_revert() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: None,
            snapshot_on_revert: true,
        }
    }
}

impl Config {
    /// Loads the configuration from a store directory.
    pub fn load(store_dir: &Path) -> Result<Self> {
        let path = store_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// Writes the configuration into a store directory.
    pub fn save(&self, store_dir: &Path) -> Result<()> {
        let raw = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(store_dir.join(CONFIG_FILE_NAME), raw)?;
        Ok(())
    }
}

/// Finds the nearest `.jot` directory, walking up from the current
/// directory.
pub fn find_store_dir() -> Result<PathBuf> {
    let mut dir = std::env::current_dir()?;
    loop {
        let candidate = dir.join(STORE_DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }
        if !dir.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Creates a fresh `.jot` directory under `base` with a default config.
pub fn init_store_dir(base: &Path, remote: Option<String>) -> Result<PathBuf> {
    let store_dir = base.join(STORE_DIR_NAME);
    if store_dir.exists() {
        return Err(Error::AlreadyInitialized(store_dir.display().to_string()));
    }

    fs::create_dir_all(&store_dir)?;
    let config = Config {
        remote,
        ..Config::default()
    };
    config.save(&store_dir)?;
    // The lock file is runtime state, not content
    fs::write(store_dir.join(GITIGNORE_FILE_NAME), "lock\n")?;
    Ok(store_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
