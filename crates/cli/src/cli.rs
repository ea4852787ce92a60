// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  jot init                Initialize a note store
  jot new \"Buy milk\"      Create a note
  jot list                List notes
  jot edit <id> \"...\"     Replace a note's content
  jot sync                Reconcile with the remote collection";

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "A local-first note-taking tool with version history and remote sync")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize a note store in the current directory
    Init {
        /// Remote note collection URL (e.g. http://localhost:5000/api/notes)
        #[arg(long)]
        remote: Option<String>,
    },

    /// Create a new note
    New {
        /// Note content (must be non-empty)
        content: String,
    },

    /// List notes, most recently touched first
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a single note with its metadata
    Show {
        id: String,
    },

    /// Show a note's version history
    History {
        id: String,
    },

    /// Replace a note's content, snapshotting the prior version
    Edit {
        id: String,
        content: String,
    },

    /// Restore a note to a prior version from its history
    #[command(after_help = "Versions are numbered from 1, as shown by 'jot history'.")]
    Revert {
        id: String,
        /// Version number to restore
        version: usize,
    },

    /// Delete a note and its entire history
    Delete {
        id: String,
    },

    /// Reconcile the local store with the remote collection
    Sync,

    /// Export notes as one text file per note, or as a single zip archive
    #[command(after_help = "Examples:\n  \
        jot export backup/           One note_<id>.txt per note under backup/\n  \
        jot export notes.zip         All notes bundled into notes.zip\n  \
        jot export backup/ --id <id> Export a single note")]
    Export {
        /// Destination directory, or a .zip path for a bundled archive
        dest: PathBuf,
        /// Export only this note
        #[arg(long)]
        id: Option<String>,
    },
}
