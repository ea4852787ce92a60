// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::config::init_store_dir;
use crate::error::Result;

pub fn run(remote: Option<String>) -> Result<()> {
    let base = std::env::current_dir()?;
    run_impl(&base, remote)
}

/// Internal implementation that accepts the base directory for testing.
pub(crate) fn run_impl(base: &Path, remote: Option<String>) -> Result<()> {
    let store_dir = init_store_dir(base, remote.clone())?;

    println!("Initialized note store at {}", store_dir.display());
    if let Some(url) = remote {
        println!("Remote: {}", url);
    }

    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
