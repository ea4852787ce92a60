// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use jot_core::Notebook;

use crate::error::{Error, Result};

use super::open_notebook;

pub fn run(id: &str, version: usize) -> Result<()> {
    let (mut notebook, _, _) = open_notebook()?;
    run_impl(&mut notebook, id, version)
}

/// Internal implementation that accepts the notebook for testing.
///
/// `version` is the 1-based number shown by `jot history`.
pub(crate) fn run_impl(notebook: &mut Notebook, id: &str, version: usize) -> Result<()> {
    if version == 0 {
        return Err(Error::InvalidVersion);
    }

    let note = notebook.revert(id, version - 1)?;
    println!("Reverted {} to version {}", note.id, version);
    Ok(())
}

#[cfg(test)]
#[path = "revert_tests.rs"]
mod tests;
