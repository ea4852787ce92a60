// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use jot_core::{export, Notebook};

use crate::error::Result;

use super::open_notebook;

pub fn run(dest: &Path, id: Option<&str>) -> Result<()> {
    let (notebook, _, _) = open_notebook()?;
    run_impl(&notebook, dest, id)
}

/// Internal implementation that accepts the notebook for testing.
///
/// A `.zip` destination bundles the notes into one archive; anything else
/// is treated as a directory receiving one text file per note.
pub(crate) fn run_impl(notebook: &Notebook, dest: &Path, id: Option<&str>) -> Result<()> {
    let notes = match id {
        Some(id) => vec![notebook.get(id)?.clone()],
        None => notebook.sorted(),
    };

    if dest.extension().is_some_and(|e| e == "zip") {
        export::export_archive(&notes, dest)?;
        println!("Exported {} notes to {}", notes.len(), dest.display());
    } else {
        let paths = export::export_notes(&notes, dest)?;
        println!("Exported {} notes to {}", paths.len(), dest.display());
    }
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
