// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Note export: one text file per note, optionally bundled into a single
//! zip archive.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::ZipWriter;

use crate::error::Result;
use crate::note::Note;

/// File name under which a note is exported.
pub fn note_file_name(id: &str) -> String {
    format!("note_{id}.txt")
}

/// Writes one note as `note_{id}.txt` under `dir`.
pub fn export_note(note: &Note, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(note_file_name(&note.id));
    fs::write(&path, &note.content)?;
    Ok(path)
}

/// Writes each note as `note_{id}.txt` under `dir`. Returns the paths
/// written, in the order of `notes`.
pub fn export_notes(notes: &[Note], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut paths = Vec::with_capacity(notes.len());
    for note in notes {
        let path = dir.join(note_file_name(&note.id));
        fs::write(&path, &note.content)?;
        paths.push(path);
    }
    Ok(paths)
}

/// Bundles all notes into a single zip archive at `path`, one entry per
/// note.
pub fn export_archive(notes: &[Note], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = ZipWriter::new(file);
    let options = FileOptions::default();

    for note in notes {
        writer.start_file(note_file_name(&note.id), options)?;
        writer.write_all(note.content.as_bytes())?;
    }
    writer.finish()?;
    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
