// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rung_core::{Database, Intent, Outcome, Owner};

use crate::cli::OutputFormat;
use crate::display::item_subject;
use crate::error::Result;

use super::{emit, open_list, print_notice};

pub fn run(owner: Option<&str>, title: &str, output: OutputFormat) -> Result<()> {
    let (mut db, owner) = open_list(owner)?;
    run_impl(&mut db, &owner, title, output, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts db/owner for testing.
pub(crate) fn run_impl(
    db: &mut Database,
    owner: &Owner,
    title: &str,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let response = db.apply(
        owner,
        Intent::Create {
            title: title.to_string(),
        },
    )?;
    emit(out, output, &response, |out| {
        let subject = match &response.outcome {
            Outcome::Item(item) => item_subject(item),
            _ => String::new(),
        };
        print_notice(out, &response, &subject)
    })
}

#[cfg(test)]
#[path = "add_tests.rs"]
mod tests;
