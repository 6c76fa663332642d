// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod add;
pub mod clear;
pub mod init;
pub mod lifecycle;
pub mod list;
pub mod remove;
pub mod reorder;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::io::Write;

use rung_core::{Database, Owner, Response};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::{find_rung_dir, get_db_path, Config};
use crate::display::format_notice;
use crate::error::Result;

/// Open the configured database and resolve whose list to act on.
pub fn open_list(owner_flag: Option<&str>) -> Result<(Database, Owner)> {
    let rung_dir = find_rung_dir()?;
    let config = Config::load(&rung_dir)?;
    let owner = config.resolve_owner(owner_flag)?;
    let db_path = get_db_path(&rung_dir, &config);
    let db = Database::open_with_timeout(&db_path, config.busy_timeout())?;
    tracing::debug!(path = %db_path.display(), %owner, "opened list");
    Ok((db, owner))
}

/// Print a notice line. Alerts go to stderr so scripts can tell them apart.
pub(crate) fn print_notice(out: &mut impl Write, response: &Response, subject: &str) -> Result<()> {
    let line = format_notice(&response.notice, subject);
    if response.notice.is_alert() {
        eprintln!("warning: {line}");
    } else {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub(crate) fn print_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Print `response` as JSON, or run `text` for the human-readable form.
pub(crate) fn emit<W, F>(out: &mut W, format: OutputFormat, response: &Response, text: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    match format {
        OutputFormat::Json => print_json(out, response),
        OutputFormat::Text => text(out),
    }
}
