// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rung_core::{Database, Intent, ItemId, Outcome, Owner};

use crate::display::item_subject;
use crate::error::Result;

use super::{open_list, print_notice};

pub fn done(owner: Option<&str>, ids: &[ItemId]) -> Result<()> {
    let (mut db, owner) = open_list(owner)?;
    set_completed_impl(&mut db, &owner, ids, true, &mut std::io::stdout().lock())
}

pub fn reopen(owner: Option<&str>, ids: &[ItemId]) -> Result<()> {
    let (mut db, owner) = open_list(owner)?;
    set_completed_impl(&mut db, &owner, ids, false, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts db/owner for testing.
///
/// Each id is its own transaction; the first failure stops the rest.
pub(crate) fn set_completed_impl(
    db: &mut Database,
    owner: &Owner,
    ids: &[ItemId],
    completed: bool,
    out: &mut impl Write,
) -> Result<()> {
    for &id in ids {
        let response = db.apply(owner, Intent::SetCompleted { id, completed })?;
        if let Outcome::Item(item) = &response.outcome {
            print_notice(out, &response, &item_subject(item))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
