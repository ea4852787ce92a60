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

/// Internal implementation returning the rendered note for testing.
pub(crate) fn run_impl(notebook: &Notebook, id: &str) -> Result<String> {
    let note = notebook.get(id)?;

    let mut out = String::new();
    out.push_str(&format!("id:       {}\n", note.id));
    out.push_str(&format!(
        "created:  {}\n",
        note.created_at.format("%Y-%m-%d %H:%M:%S")
    ));
    if let Some(edited) = note.last_edited {
        out.push_str(&format!(
            "edited:   {}\n",
            edited.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    out.push_str(&format!("versions: {}\n", note.versions.len()));
    out.push_str(&format!("synced:   {}\n", if note.synced { "yes" } else { "no" }));
    out.push('\n');
    out.push_str(&note.content);
    Ok(out)
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
