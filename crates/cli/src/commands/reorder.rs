// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `move`, `up` and `down`.
//!
//! `move` sends the requested index straight to the store, which clamps it.
//! `up` and `down` derive a one-step move from the current list the same way
//! an interactive client does, so they refuse to step past either end.

use std::io::Write;

use rung_core::{Database, Intent, Item, ItemId, Outcome, Owner, Response};
use rung_view::ReorderViewModel;

use crate::cli::OutputFormat;
use crate::display::item_subject;
use crate::error::Result;

use super::list::write_list;
use super::{emit, open_list, print_notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn edge(self) -> &'static str {
        match self {
            Direction::Up => "top",
            Direction::Down => "bottom",
        }
    }
}

pub fn move_to(owner: Option<&str>, id: ItemId, index: i64, output: OutputFormat) -> Result<()> {
    let (mut db, owner) = open_list(owner)?;
    move_impl(&mut db, &owner, id, index, output, &mut std::io::stdout().lock())
}

pub fn step(owner: Option<&str>, id: ItemId, direction: Direction) -> Result<()> {
    let (mut db, owner) = open_list(owner)?;
    step_impl(&mut db, &owner, id, direction, &mut std::io::stdout().lock())
}

/// Internal implementation that accepts db/owner for testing.
pub(crate) fn move_impl(
    db: &mut Database,
    owner: &Owner,
    id: ItemId,
    index: i64,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let response = db.apply(
        owner,
        Intent::Move {
            id,
            target_index: index,
        },
    )?;
    emit(out, output, &response, |out| print_moved(out, &response, id))
}

/// Internal implementation that accepts db/owner for testing.
pub(crate) fn step_impl(
    db: &mut Database,
    owner: &Owner,
    id: ItemId,
    direction: Direction,
    out: &mut impl Write,
) -> Result<()> {
    let mut view = ReorderViewModel::new(db.list_items(owner)?);
    let intent = match direction {
        Direction::Up => view.move_up(id)?,
        Direction::Down => view.move_down(id)?,
    };
    let Some(intent) = intent else {
        eprintln!("warning: item {id} is already at the {}", direction.edge());
        return Ok(());
    };
    let response = db.apply(owner, intent.into())?;
    print_moved(out, &response, id)
}

fn print_moved(out: &mut impl Write, response: &Response, id: ItemId) -> Result<()> {
    let Outcome::List(items) = &response.outcome else {
        return Ok(());
    };
    let subject = items
        .iter()
        .find(|item| item.id == id)
        .map_or_else(|| id.to_string(), item_subject);
    print_notice(out, response, &subject)?;
    let view = ReorderViewModel::new(items.to_vec());
    write_list(&view, OutputFormat::Text, out)
}

#[cfg(test)]
#[path = "reorder_tests.rs"]
mod tests;
