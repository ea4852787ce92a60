// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use jot_core::Notebook;

use crate::error::Result;

use super::open_notebook;

pub fn run(id: &str) -> Result<()> {
    let (notebook, _, _) = open_notebook()?;
    let rendered = run_impl(&notebook, id)?;
    println!("{}", rendered);
    Ok(())
}

/// Internal implementation returning the rendered history for testing.
///
/// Versions are numbered from 1, oldest first, matching the numbers
/// `revert` accepts.
pub(crate) fn run_impl(notebook: &Notebook, id: &str) -> Result<String> {
    let note = notebook.get(id)?;
    if note.snapshots().is_empty() {
        return Ok("No version history available.".to_string());
    }

    let mut lines = Vec::with_capacity(note.snapshots().len());
    for (i, snapshot) in note.snapshots().iter().enumerate() {
        lines.push(format!(
            "{}. [{}] {}",
            i + 1,
            snapshot.last_edited.format("%Y-%m-%d %H:%M:%S"),
            snapshot.content
        ));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
