// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rung_core::{Database, Item, ListCounts, ListFilter, Owner};
use rung_view::ReorderViewModel;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::{format_filter_bar, format_item_line};
use crate::error::Result;

use super::{open_list, print_json};

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson<'a> {
    filter: ListFilter,
    counts: ListCounts,
    items: Vec<&'a Item>,
}

pub fn run(owner: Option<&str>, filter: ListFilter, output: OutputFormat) -> Result<()> {
    let (db, owner) = open_list(owner)?;
    run_impl(&db, &owner, filter, output, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts db/owner for testing.
pub(crate) fn run_impl(
    db: &Database,
    owner: &Owner,
    filter: ListFilter,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = ReorderViewModel::new(db.list_items(owner)?);
    view.set_filter(filter);
    write_list(&view, output, out)
}

/// Render what `view` currently displays.
pub(crate) fn write_list(
    view: &ReorderViewModel,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let items = view.display_items();
    match output {
        OutputFormat::Json => print_json(
            out,
            &ListOutputJson {
                filter: view.filter(),
                counts: view.counts(),
                items,
            },
        ),
        OutputFormat::Text => {
            writeln!(out, "{}", format_filter_bar(view.counts(), view.filter()))?;
            if let Some(message) = view.empty_message() {
                writeln!(out, "{message}")?;
            }
            for item in items {
                writeln!(out, "{}", format_item_line(item))?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
