// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rung-core: ranked personal lists
//!
//! This crate provides the item model, rank arithmetic, and the SQLite-backed
//! store that keeps every owner's list densely ranked. Both the `rung` CLI and
//! the `rung-view` reorder model build on it.

pub mod db;
pub mod error;
pub mod intent;
pub mod item;
pub mod rank;
pub mod validate;

pub use db::Database;
pub use error::{Error, Result};
pub use intent::{Intent, Notice, Outcome, Response};
pub use item::{Item, ItemId, ListCounts, ListFilter, Owner};
pub use rank::{Rank, RankViolation, Relocation};
