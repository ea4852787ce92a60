// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jotrs - A local-first note-taking library.
//!
//! This crate provides the functionality behind the `jot` CLI tool: notes
//! live in a `.jot/` store with per-note version history, and `jot sync`
//! reconciles the store against a remote HTTP note collection.
//!
//! # Main Components
//!
//! - [`config`] - Store discovery and `.jot/config.toml`
//! - [`jot_core::Notebook`] - Lifecycle operations with write-through
//!   persistence
//! - [`jot_core::SyncEngine`] - Reconciliation against the remote
//! - [`Error`] - Error types for all operations

mod cli;
mod commands;
mod http;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_store_dir, init_store_dir, Config};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { remote } => commands::init::run(remote),
        Command::New { content } => commands::new::run(&content),
        Command::List { output } => commands::list::run(output),
        Command::Show { id } => commands::show::run(&id),
        Command::History { id } => commands::history::run(&id),
        Command::Edit { id, content } => commands::edit::run(&id, &content),
        Command::Revert { id, version } => commands::revert::run(&id, version),
        Command::Delete { id } => commands::delete::run(&id),
        Command::Sync => commands::sync::run(),
        Command::Export { dest, id } => commands::export::run(&dest, id.as_deref()),
    }
}
