// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use jot_core::Notebook;

use crate::error::Result;

use super::open_notebook;

pub fn run(content: &str) -> Result<()> {
    let (mut notebook, _, _) = open_notebook()?;
    run_impl(&mut notebook, content)
}

/// Internal implementation that accepts the notebook for testing.
pub(crate) fn run_impl(notebook: &mut Notebook, content: &str) -> Result<()> {
    let note = notebook.create(content)?;
    println!("Created {}", note.id);
    Ok(())
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
