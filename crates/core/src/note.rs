// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core note types.
//!
//! A [`Note`] carries its own version history: every edit appends a
//! [`VersionSnapshot`] of the content it replaced. The log is append-only
//! and is only ever discarded when the note itself is deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A saved prior state of a note: the content that was replaced, and the
/// timestamp of the edit that produced it (or the creation time, for the
/// first snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSnapshot {
    /// The note's content before the edit that produced this snapshot.
    pub content: String,
    /// When that prior content was last touched.
    pub last_edited: DateTime<Utc>,
}

/// A single user-authored text entry with identity, content, and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque unique identifier, assigned at creation, immutable.
    pub id: String,
    /// Current text body.
    pub content: String,
    /// Set once at creation, immutable.
    pub created_at: DateTime<Utc>,
    /// Null until the first edit; updated on every edit or revert.
    pub last_edited: Option<DateTime<Utc>>,
    /// Append-only history, oldest first.
    #[serde(default)]
    pub versions: Vec<VersionSnapshot>,
    /// True once the note's current state has been pushed to the remote.
    #[serde(default)]
    pub synced: bool,
}

impl Note {
    /// Creates a new note with an empty version log.
    pub fn new(id: String, content: String, created_at: DateTime<Utc>) -> Self {
        Note {
            id,
            content,
            created_at,
            last_edited: None,
            versions: Vec::new(),
            synced: false,
        }
    }

    /// Appends a snapshot of a prior state. Pure append: never reorders,
    /// never deduplicates, never fails.
    pub fn push_snapshot(&mut self, content: String, last_edited: DateTime<Utc>) {
        self.versions.push(VersionSnapshot {
            content,
            last_edited,
        });
    }

    /// The version log in insertion (chronological) order.
    pub fn snapshots(&self) -> &[VersionSnapshot] {
        &self.versions
    }

    /// Looks up a snapshot by its position in the log.
    pub fn snapshot(&self, index: usize) -> Option<&VersionSnapshot> {
        self.versions.get(index)
    }

    /// The timestamp the next snapshot of the current state should carry:
    /// the last edit time, or the creation time if never edited.
    pub fn snapshot_timestamp(&self) -> DateTime<Utc> {
        self.last_edited.unwrap_or(self.created_at)
    }
}

/// Sorts notes most-recently-touched first: last edited descending, with
/// never-edited notes after edited ones, ordered by creation time descending.
pub fn sort_for_display(notes: &mut [Note]) {
    notes.sort_by(|a, b| match (a.last_edited, b.last_edited) {
        (Some(a_edited), Some(b_edited)) => b_edited.cmp(&a_edited),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.created_at.cmp(&a.created_at),
    });
}

#[cfg(test)]
#[path = "note_tests.rs"]
mod tests;
