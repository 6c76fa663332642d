// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rung_core::{Database, Intent, Outcome, Owner};

use crate::error::Result;

use super::{open_list, print_notice};

pub fn run(owner: Option<&str>) -> Result<()> {
    let (mut db, owner) = open_list(owner)?;
    run_impl(&mut db, &owner, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts db/owner for testing.
pub(crate) fn run_impl(db: &mut Database, owner: &Owner, out: &mut impl Write) -> Result<()> {
    let response = db.apply(owner, Intent::ClearCompleted)?;
    let subject = match response.outcome {
        Outcome::Cleared(count) if count > 0 => count.to_string(),
        _ => String::new(),
    };
    print_notice(out, &response, &subject)
}

#[cfg(test)]
#[path = "clear_tests.rs"]
mod tests;
