// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP implementation of the remote note collection.
//!
//! Every request is bounded by a timeout; an expired timeout or refused
//! connection is a failure, never an indefinite block.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;

use jot_core::{Error, Note, PushReceipt, RemoteNote, RemoteStore, VersionSnapshot};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote note collection reached over HTTP.
pub struct HttpRemote {
    client: Client,
    base_url: String,
}

impl HttpRemote {
    /// Builds a client for the collection at `base_url`.
    pub fn new(base_url: &str) -> jot_core::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::SyncUnavailable(e.to_string()))?;

        Ok(HttpRemote {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn note_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PushBody<'a> {
    content: &'a str,
    created_at: DateTime<Utc>,
    last_edited: Option<DateTime<Utc>>,
    versions: &'a [VersionSnapshot],
}

#[derive(Serialize)]
struct UpdateBody<'a> {
    content: &'a str,
}

impl RemoteStore for HttpRemote {
    fn fetch_all(&self) -> jot_core::Result<Vec<RemoteNote>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .map_err(|e| Error::SyncUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::SyncUnavailable(format!(
                "GET {}: {}",
                self.base_url,
                response.status()
            )));
        }
        response
            .json()
            .map_err(|e| Error::SyncUnavailable(e.to_string()))
    }

    fn push(&self, note: &Note) -> jot_core::Result<PushReceipt> {
        let body = PushBody {
            content: &note.content,
            created_at: note.created_at,
            last_edited: note.last_edited,
            versions: &note.versions,
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&body)
            .send()
            .map_err(|e| Error::PushFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::PushFailed(format!(
                "POST {}: {}",
                self.base_url,
                response.status()
            )));
        }
        response.json().map_err(|e| Error::PushFailed(e.to_string()))
    }

    fn update(&self, id: &str, content: &str) -> jot_core::Result<()> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(&UpdateBody { content })
            .send()
            .map_err(|e| Error::PushFailed(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::NoteNotFound(id.to_string())),
            s if s.is_success() => Ok(()),
            s => Err(Error::PushFailed(format!("PUT {}: {}", self.note_url(id), s))),
        }
    }

    fn delete(&self, id: &str) -> jot_core::Result<()> {
        let response = self
            .client
            .delete(self.note_url(id))
            .send()
            .map_err(|e| Error::PushFailed(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::NoteNotFound(id.to_string())),
            s if s.is_success() => Ok(()),
            s => Err(Error::PushFailed(format!(
                "DELETE {}: {}",
                self.note_url(id),
                s
            ))),
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
