// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use rung_core::Database;

use crate::config::{get_db_path, init_rung_dir, Config};
use crate::error::Result;

pub fn run(owner: Option<&str>, database: Option<String>) -> Result<()> {
    let target_path = std::env::current_dir()?;
    run_impl(&target_path, owner, database)
}

/// Internal implementation that accepts the target directory for testing.
pub(crate) fn run_impl(path: &Path, owner: Option<&str>, database: Option<String>) -> Result<()> {
    let config = Config::new(owner, database)?;
    let rung_dir = init_rung_dir(path, &config)?;

    // Create the schema now so the first command does not pay for it
    let db_path = get_db_path(&rung_dir, &config);
    Database::open_with_timeout(&db_path, config.busy_timeout())?;
    tracing::info!(path = %db_path.display(), "initialized list");

    println!("Initialized list at {}", rung_dir.display());
    match &config.owner {
        Some(owner) => println!("Owner: {}", owner),
        None => println!("No owner set; pass --owner or set RUNG_OWNER"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
