// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use jot_core::{Notebook, RemoteStore, SyncEngine, SyncReport};

use crate::error::{Error, Result};
use crate::http::HttpRemote;

use super::open_notebook;

pub fn run() -> Result<()> {
    let (mut notebook, config, _) = open_notebook()?;
    let url = config.remote.as_deref().ok_or(Error::NoRemote)?;
    let remote = HttpRemote::new(url)?;

    let report = run_impl(&mut notebook, &remote)?;
    print_report(&report);

    if report.is_clean() {
        Ok(())
    } else {
        Err(Error::PartialSync {
            pushed: report.pushed,
            failed: report.failures.len(),
        })
    }
}

/// Internal implementation generic over the remote for testing.
pub(crate) fn run_impl<R: RemoteStore>(
    notebook: &mut Notebook,
    remote: R,
) -> Result<SyncReport> {
    Ok(SyncEngine::new(remote).sync(notebook)?)
}

fn print_report(report: &SyncReport) {
    println!("Pulled {} notes, pushed {}", report.pulled, report.pushed);
    for failure in &report.failures {
        eprintln!("  push failed for {}: {}", failure.id, failure.reason);
    }
    if report.is_clean() {
        if let Some(at) = report.last_synced {
            println!("Synced at {}", at.format("%Y-%m-%d %H:%M:%S"));
        }
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
