// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation of the local store against a remote note collection.
//!
//! A sync invocation, in order:
//!
//! 1. Pull the remote collection in full. If unreachable, fail without
//!    touching local state or the watermark.
//! 2. Adopt the fetched set as local state.
//! 3. Select push candidates from the pre-pull local set: notes created or
//!    edited after the watermark (all notes if never synced).
//! 4. Push each candidate independently; failures are collected, not fatal.
//! 5. Advance the watermark only if every push succeeded, so failed notes
//!    are retried with the same candidate set on the next sync.
//!
//! The write-back set is the adopted remote collection plus every pre-pull
//! candidate, so a failed push never drops the only copy of an unsynced
//! note.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::note::Note;
use crate::notebook::Notebook;
use crate::remote::{RemoteNote, RemoteStore};

/// One note the remote rejected or timed out on during push.
#[derive(Debug, Clone, PartialEq)]
pub struct PushFailure {
    pub id: String,
    pub reason: String,
}

/// Outcome of a sync invocation.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Notes fetched from the remote collection.
    pub pulled: usize,
    /// Candidates pushed successfully.
    pub pushed: usize,
    /// Candidates the remote rejected; the watermark did not advance.
    pub failures: Vec<PushFailure>,
    /// The watermark after this invocation.
    pub last_synced: Option<DateTime<Utc>>,
}

impl SyncReport {
    /// True if every push succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reconciles a [`Notebook`] against a remote collection.
pub struct SyncEngine<R: RemoteStore> {
    remote: R,
}

impl<R: RemoteStore> SyncEngine<R> {
    pub fn new(remote: R) -> Self {
        SyncEngine { remote }
    }

    /// Runs one sync invocation.
    ///
    /// Requires exclusive access to the notebook for the whole cycle: the
    /// candidate snapshot is taken before the pull replaces local state.
    pub fn sync(&self, notebook: &mut Notebook) -> Result<SyncReport> {
        let last_synced = notebook.last_synced()?;

        // Candidate selection reads the set as it was before the pull.
        let pre_pull: Vec<Note> = notebook.notes().to_vec();

        let fetched = self.remote.fetch_all()?;
        let pulled = fetched.len();
        let adopted: Vec<Note> = fetched.into_iter().map(RemoteNote::into_note).collect();

        let mut candidates = select_candidates(&pre_pull, last_synced);
        debug!(
            pulled,
            candidates = candidates.len(),
            "pulled remote collection"
        );

        let mut pushed = 0usize;
        let mut failures = Vec::new();
        for note in &mut candidates {
            match self.remote.push(note) {
                Ok(receipt) => {
                    note.synced = true;
                    pushed += 1;
                    debug!(id = %note.id, remote_id = %receipt.note_id, "pushed note");
                }
                Err(e) => {
                    warn!(id = %note.id, error = %e, "push failed");
                    failures.push(PushFailure {
                        id: note.id.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        // Write back the adopted set plus every candidate. Failed candidates
        // keep synced = false and the unchanged watermark retries them.
        let mut merged = adopted;
        for candidate in candidates {
            match merged.iter_mut().find(|n| n.id == candidate.id) {
                Some(existing) => *existing = candidate,
                None => merged.push(candidate),
            }
        }
        notebook.replace_all(merged)?;

        let mut report = SyncReport {
            pulled,
            pushed,
            failures,
            last_synced,
        };

        if report.failures.is_empty() {
            let now = Utc::now();
            notebook.set_last_synced(now)?;
            report.last_synced = Some(now);
            info!(pulled, pushed, "sync complete");
        } else {
            info!(
                pulled,
                pushed,
                failed = report.failures.len(),
                "sync incomplete, watermark unchanged"
            );
        }

        Ok(report)
    }
}

/// Selects the notes that are new or changed since the watermark.
///
/// With no watermark, every note is a candidate.
pub fn select_candidates(notes: &[Note], last_synced: Option<DateTime<Utc>>) -> Vec<Note> {
    match last_synced {
        None => notes.to_vec(),
        Some(t) => notes
            .iter()
            .filter(|n| n.created_at > t || n.last_edited.is_some_and(|e| e > t))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
