// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use jot_core::Notebook;

use crate::error::Result;

use super::open_notebook;

pub fn run(id: &str, content: &str) -> Result<()> {
    let (mut notebook, _, _) = open_notebook()?;
    run_impl(&mut notebook, id, content)
}

/// Internal implementation that accepts the notebook for testing.
pub(crate) fn run_impl(notebook: &mut Notebook, id: &str, content: &str) -> Result<()> {
    let note = notebook.edit(id, content)?;
    println!("Updated {} (version {} saved)", note.id, note.versions.len());
    Ok(())
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
