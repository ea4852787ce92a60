// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable local storage for notes.
//!
//! The [`LocalStore`] persists the whole note collection as a single JSON
//! file, loaded wholesale at startup and replaced wholesale on every
//! mutation. Replacement is atomic: the new collection is written to a
//! temporary file, fsynced, and renamed over the old one, so a crash leaves
//! either the old state or the new state, never a partial write.
//!
//! Opening a store takes an exclusive file lock for the lifetime of the
//! handle. Lifecycle operations and sync cycles race destructively over
//! read-modify-write sequences, so there is exactly one writer at a time.

use std::collections::HashSet;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::note::Note;

const NOTES_FILE: &str = "notes.json";
const SYNC_FILE: &str = "sync.json";
const LOCK_FILE: &str = "lock";

/// Watermark state persisted across sync invocations.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SyncState {
    last_synced: Option<DateTime<Utc>>,
}

/// File-backed store holding the canonical note collection.
pub struct LocalStore {
    dir: PathBuf,
    /// Held for the lifetime of the store; released on drop.
    _lock: File,
}

impl LocalStore {
    /// Opens the store at `dir`, creating the directory if needed.
    ///
    /// Fails with [`Error::StoreLocked`] if another process holds the store.
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        let lock = acquire_lock(&dir.join(LOCK_FILE))?;
        Ok(LocalStore {
            dir: dir.to_path_buf(),
            _lock: lock,
        })
    }

    /// The directory this store lives in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Loads the full note collection.
    ///
    /// Returns an empty collection if no prior state exists.
    pub fn load_all(&self) -> Result<Vec<Note>> {
        let path = self.dir.join(NOTES_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&path)?;
        let notes: Vec<Note> = serde_json::from_reader(BufReader::new(file))?;
        check_unique_ids(&notes)?;
        Ok(notes)
    }

    /// Replaces the persisted collection with `notes`, atomically.
    pub fn save_all(&self, notes: &[Note]) -> Result<()> {
        check_unique_ids(notes)?;
        self.write_atomic(NOTES_FILE, &serde_json::to_vec_pretty(notes)?)?;
        tracing::debug!(count = notes.len(), "persisted note collection");
        Ok(())
    }

    /// Loads the timestamp of the last fully successful sync, if any.
    pub fn load_last_synced(&self) -> Result<Option<DateTime<Utc>>> {
        let path = self.dir.join(SYNC_FILE);
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)?;
        let state: SyncState = serde_json::from_reader(BufReader::new(file))?;
        Ok(state.last_synced)
    }

    /// Advances the sync watermark.
    pub fn save_last_synced(&self, at: DateTime<Utc>) -> Result<()> {
        let state = SyncState {
            last_synced: Some(at),
        };
        self.write_atomic(SYNC_FILE, &serde_json::to_vec(&state)?)
    }

    fn write_atomic(&self, name: &str, bytes: &[u8]) -> Result<()> {
        let tmp = self.dir.join(format!("{name}.tmp"));
        let mut file = File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        fs::rename(&tmp, self.dir.join(name))?;
        Ok(())
    }
}

fn acquire_lock(lock_path: &Path) -> Result<File> {
    use fs2::FileExt;

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(lock_path)?;
    file.try_lock_exclusive().map_err(|_| Error::StoreLocked)?;
    Ok(file)
}

fn check_unique_ids(notes: &[Note]) -> Result<()> {
    let mut seen = HashSet::new();
    for note in notes {
        if !seen.insert(note.id.as_str()) {
            return Err(Error::CorruptedStore(format!(
                "duplicate note id '{}'",
                note.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
