// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core item types for ranked personal lists.
//!
//! This module contains the fundamental data types: Item, ItemId, Owner,
//! ListFilter, and ListCounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::rank::Rank;
use crate::validate::validate_owner;

/// Opaque identity of an item. Assigned by storage, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(raw: i64) -> Self {
        ItemId(raw)
    }

    /// Returns the raw value used in storage.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(ItemId)
            .map_err(|_| Error::Validation {
                field: "id",
                reason: format!("'{s}' is not a valid item id"),
            })
    }
}

/// The user a list belongs to. Partition key for every rank invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    /// Creates an owner from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the name is blank or too long.
    pub fn new(name: &str) -> Result<Self> {
        validate_owner(name).map(Owner)
    }

    /// Wraps a value read back from storage, which was validated on the way in.
    pub(crate) fn from_stored(name: String) -> Self {
        Owner(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of an owner's ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub owner: Owner,
    pub title: String,
    pub completed: bool,
    /// 1-based position within the owner's list.
    pub rank: Rank,
    /// Tie-break only; ordering is by rank.
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Short status label used in list output.
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "Done"
        } else {
            "Open"
        }
    }
}

/// Which subset of the list is displayed.
///
/// Only [`ListFilter::All`] shows visual positions that equal rank positions,
/// so reordering is restricted to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    #[default]
    All,
    Open,
    Completed,
}

impl ListFilter {
    /// Returns the string representation used in arguments and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ListFilter::All => "all",
            ListFilter::Open => "open",
            ListFilter::Completed => "completed",
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Open => !item.completed,
            ListFilter::Completed => item.completed,
        }
    }

    /// Message shown when nothing matches.
    pub fn empty_message(&self) -> &'static str {
        match self {
            ListFilter::All => "No todos yet.",
            ListFilter::Open => "No open todos yet.",
            ListFilter::Completed => "No completed todos yet.",
        }
    }

    pub fn allows_reorder(&self) -> bool {
        *self == ListFilter::All
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ListFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "all" => Ok(ListFilter::All),
            "open" => Ok(ListFilter::Open),
            "completed" | "complete" | "done" => Ok(ListFilter::Completed),
            _ => Err(Error::Validation {
                field: "filter",
                reason: format!("'{s}' is not one of: all, open, completed"),
            }),
        }
    }
}

/// Item counts per filter, shown next to the filter names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCounts {
    pub all: usize,
    pub open: usize,
    pub completed: usize,
}

impl ListCounts {
    pub fn from_items(items: &[Item]) -> Self {
        let completed = items.iter().filter(|item| item.completed).count();
        ListCounts {
            all: items.len(),
            open: items.len() - completed,
            completed,
        }
    }

    pub fn for_filter(&self, filter: ListFilter) -> usize {
        match filter {
            ListFilter::All => self.all,
            ListFilter::Open => self.open,
            ListFilter::Completed => self.completed,
        }
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
