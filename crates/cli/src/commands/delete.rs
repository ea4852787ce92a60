// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use jot_core::Notebook;

use crate::error::Result;

use super::open_notebook;

pub fn run(id: &str) -> Result<()> {
    let (mut notebook, _, _) = open_notebook()?;
    run_impl(&mut notebook, id)
}

/// Internal implementation that accepts the notebook for testing.
pub(crate) fn run_impl(notebook: &mut Notebook, id: &str) -> Result<()> {
    notebook.delete(id)?;
    println!("Deleted {}", id);
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
