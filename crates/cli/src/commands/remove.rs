// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use rung_core::{Database, Intent, ItemId, Owner};

use crate::error::Result;

use super::{open_list, print_notice};

pub fn run(owner: Option<&str>, ids: &[ItemId]) -> Result<()> {
    let (mut db, owner) = open_list(owner)?;
    run_impl(&mut db, &owner, ids, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts db/owner for testing.
pub(crate) fn run_impl(
    db: &mut Database,
    owner: &Owner,
    ids: &[ItemId],
    out: &mut impl Write,
) -> Result<()> {
    for &id in ids {
        let response = db.apply(owner, Intent::Delete { id })?;
        print_notice(out, &response, &id.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "remove_tests.rs"]
mod tests;
