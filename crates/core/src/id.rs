// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Generate a note ID from content and creation timestamp.
/// The ID is the first 8 hex chars of SHA256(content + timestamp).
pub fn generate_id(content: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", content, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    hex::encode(&hash[..4]) // First 8 hex chars (4 bytes)
}

/// Generate a unique ID, handling collisions by appending an incrementing
/// suffix.
pub fn generate_unique_id<F>(content: &str, created_at: &DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base_id = generate_id(content, created_at);

    if !exists(&base_id) {
        return base_id;
    }

    // Handle collision with incrementing suffix
    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
