// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote note collection contract and wire types.
//!
//! The remote speaks camelCase JSON. Remote-assigned ids may arrive as JSON
//! numbers (auto-increment keys) or strings; both are normalized to strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::note::{Note, VersionSnapshot};

/// Wire form of a note on the remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteNote {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_edited: Option<DateTime<Utc>>,
    #[serde(default)]
    pub versions: Vec<VersionSnapshot>,
}

impl RemoteNote {
    /// Adopts a fetched note as local state. A note fetched from the remote
    /// is by definition already present there.
    pub fn into_note(self) -> Note {
        Note {
            id: self.id,
            content: self.content,
            created_at: self.created_at,
            last_edited: self.last_edited,
            versions: self.versions,
            synced: true,
        }
    }
}

/// Acknowledgement returned by the remote for a pushed note.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushReceipt {
    pub message: String,
    #[serde(deserialize_with = "flexible_id")]
    pub note_id: String,
}

/// A remote note collection, reachable only when online.
///
/// Implementations must bound every call with a timeout. Unreachability
/// surfaces as [`crate::Error::SyncUnavailable`] from `fetch_all` and as
/// [`crate::Error::PushFailed`] from `push`.
pub trait RemoteStore {
    /// Fetches the remote collection in full.
    fn fetch_all(&self) -> Result<Vec<RemoteNote>>;

    /// Submits a note to the remote collection as a new entry, including
    /// its timestamps and version history.
    fn push(&self, note: &Note) -> Result<PushReceipt>;

    /// Replaces the content of an existing remote note.
    fn update(&self, id: &str, content: &str) -> Result<()>;

    /// Removes a note from the remote collection.
    fn delete(&self, id: &str) -> Result<()>;
}

impl<R: RemoteStore + ?Sized> RemoteStore for &R {
    fn fetch_all(&self) -> Result<Vec<RemoteNote>> {
        (**self).fetch_all()
    }

    fn push(&self, note: &Note) -> Result<PushReceipt> {
        (**self).push(note)
    }

    fn update(&self, id: &str, content: &str) -> Result<()> {
        (**self).update(id, content)
    }

    fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id)
    }
}

fn flexible_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Text(s) => s,
    })
}

#[cfg(test)]
#[path = "remote_tests.rs"]
mod tests;
