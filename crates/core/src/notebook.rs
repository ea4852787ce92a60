// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Note lifecycle manager.
//!
//! The [`Notebook`] owns the canonical in-memory note collection and writes
//! every mutation through to its [`LocalStore`] before committing, so a
//! crash immediately after a successful call never loses the mutation, and
//! a storage failure never leaves memory ahead of disk.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::id;
use crate::note::{self, Note};
use crate::store::LocalStore;

/// The canonical note collection with write-through persistence.
pub struct Notebook {
    store: LocalStore,
    notes: Vec<Note>,
    snapshot_on_revert: bool,
}

impl Notebook {
    /// Opens a notebook over the given store, loading any prior state.
    pub fn open(store: LocalStore) -> Result<Self> {
        let notes = store.load_all()?;
        Ok(Notebook {
            store,
            notes,
            snapshot_on_revert: true,
        })
    }

    /// Controls whether `revert` snapshots the pre-revert state first.
    ///
    /// Defaults to true, so reverts are themselves undoable via history.
    pub fn with_revert_snapshots(mut self, enabled: bool) -> Self {
        self.snapshot_on_revert = enabled;
        self
    }

    /// All notes, in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// All notes, most recently touched first.
    pub fn sorted(&self) -> Vec<Note> {
        let mut notes = self.notes.clone();
        note::sort_for_display(&mut notes);
        notes
    }

    /// Looks up a note by id.
    pub fn get(&self, id: &str) -> Result<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NoteNotFound(id.to_string()))
    }

    /// Timestamp of the last fully successful sync, if any.
    pub fn last_synced(&self) -> Result<Option<chrono::DateTime<Utc>>> {
        self.store.load_last_synced()
    }

    /// Advances the sync watermark.
    pub fn set_last_synced(&self, at: chrono::DateTime<Utc>) -> Result<()> {
        self.store.save_last_synced(at)
    }

    /// Creates a new note. Content must be non-empty after trimming.
    pub fn create(&mut self, content: &str) -> Result<Note> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::EmptyContent);
        }

        let created_at = Utc::now();
        let notes = &self.notes;
        let id = id::generate_unique_id(content, &created_at, |candidate| {
            notes.iter().any(|n| n.id == candidate)
        });

        let note = Note::new(id, content.to_string(), created_at);
        let mut next = self.notes.clone();
        next.push(note.clone());
        self.commit(next)?;

        tracing::debug!(id = %note.id, "created note");
        Ok(note)
    }

    /// Replaces a note's content, snapshotting the pre-edit state.
    ///
    /// The snapshot captures the content and timestamp as they were before
    /// this edit, then the note is updated and marked unsynced.
    pub fn edit(&mut self, id: &str, new_content: &str) -> Result<Note> {
        let new_content = new_content.trim();
        if new_content.is_empty() {
            return Err(Error::EmptyContent);
        }

        let mut next = self.notes.clone();
        let note = find_mut(&mut next, id)?;

        let prior = note.content.clone();
        let prior_at = note.snapshot_timestamp();
        note.push_snapshot(prior, prior_at);
        note.content = new_content.to_string();
        note.last_edited = Some(Utc::now());
        note.synced = false;

        let updated = note.clone();
        self.commit(next)?;
        Ok(updated)
    }

    /// Restores a note to the snapshot at `index` in its version log.
    ///
    /// No snapshot is ever removed. When revert snapshots are enabled the
    /// pre-revert state is appended to the log first.
    pub fn revert(&mut self, id: &str, index: usize) -> Result<Note> {
        let mut next = self.notes.clone();
        let note = find_mut(&mut next, id)?;

        let restored = note
            .snapshot(index)
            .ok_or_else(|| Error::SnapshotNotFound {
                id: id.to_string(),
                index,
            })?
            .content
            .clone();

        if self.snapshot_on_revert {
            let prior = note.content.clone();
            let prior_at = note.snapshot_timestamp();
            note.push_snapshot(prior, prior_at);
        }
        note.content = restored;
        note.last_edited = Some(Utc::now());
        note.synced = false;

        let updated = note.clone();
        self.commit(next)?;
        Ok(updated)
    }

    /// Removes a note unconditionally. No tombstone, no soft delete.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if !self.notes.iter().any(|n| n.id == id) {
            return Err(Error::NoteNotFound(id.to_string()));
        }

        let next: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| n.id != id)
            .cloned()
            .collect();
        self.commit(next)?;

        tracing::debug!(id, "deleted note");
        Ok(())
    }

    /// Replaces the whole collection. Used by the sync engine to write back
    /// the reconciled set; never a partial in-place mutation.
    pub fn replace_all(&mut self, notes: Vec<Note>) -> Result<()> {
        self.commit(notes)
    }

    /// Persists `next` and only then swaps it in.
    fn commit(&mut self, next: Vec<Note>) -> Result<()> {
        self.store.save_all(&next)?;
        self.notes = next;
        Ok(())
    }
}

fn find_mut<'a>(notes: &'a mut [Note], id: &str) -> Result<&'a mut Note> {
    notes
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or_else(|| Error::NoteNotFound(id.to_string()))
}

#[cfg(test)]
#[path = "notebook_tests.rs"]
mod tests;
