// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use serde::Serialize;

use jot_core::{Note, Notebook};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::open_notebook;

/// JSON representation of a note for list output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListNoteJson<'a> {
    id: &'a str,
    content: &'a str,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_edited: Option<DateTime<Utc>>,
    versions: usize,
    synced: bool,
}

pub fn run(output: OutputFormat) -> Result<()> {
    let (notebook, _, _) = open_notebook()?;
    let rendered = run_impl(&notebook, output)?;
    println!("{}", rendered);
    Ok(())
}

/// Internal implementation returning the rendered listing for testing.
pub(crate) fn run_impl(notebook: &Notebook, output: OutputFormat) -> Result<String> {
    let notes = notebook.sorted();
    match output {
        OutputFormat::Text => Ok(render_text(&notes)),
        OutputFormat::Json => render_json(&notes),
    }
}

fn render_text(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes available".to_string();
    }

    let mut lines = Vec::with_capacity(notes.len());
    for note in notes {
        let touched = note.last_edited.unwrap_or(note.created_at);
        let marker = if note.synced { ' ' } else { '*' };
        lines.push(format!(
            "{}{}  {}  {}",
            marker,
            note.id,
            touched.format("%Y-%m-%d %H:%M"),
            first_line(&note.content)
        ));
    }
    lines.join("\n")
}

fn render_json(notes: &[Note]) -> Result<String> {
    let entries: Vec<ListNoteJson<'_>> = notes
        .iter()
        .map(|n| ListNoteJson {
            id: &n.id,
            content: &n.content,
            created_at: n.created_at,
            last_edited: n.last_edited,
            versions: n.versions.len(),
            synced: n.synced,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or_default()
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
