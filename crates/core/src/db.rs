// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed rank store.
//!
//! The [`Database`] struct owns every owner's ordered list and keeps the rank
//! invariant: after each committed mutation, an owner's ranks are exactly
//! `1..=N`. Every mutation runs in one `BEGIN IMMEDIATE` transaction, so the
//! read-then-rewrite of a re-rank is never interleaved with another writer.
//! Every statement is scoped by owner.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::item::{Item, ItemId, ListCounts, ListFilter, Owner};
use crate::rank::{self, Rank};
use crate::validate::validate_title;

/// Default time a writer waits for the lock before failing with a conflict.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// SQL schema for ranked lists.
///
/// No UNIQUE index on `(owner, rank)`: ranks are rewritten row by row inside
/// a transaction and collide transiently.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner TEXT NOT NULL,
    title TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    rank INTEGER NOT NULL DEFAULT 1 CHECK (rank > 0),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Indexes, applied after migrations so older tables have every column.
pub const INDEXES: &str = r#"
CREATE INDEX IF NOT EXISTS idx_items_owner_rank ON items(owner, rank);
CREATE INDEX IF NOT EXISTS idx_items_owner_completed ON items(owner, completed);
"#;

const ITEM_COLUMNS: &str = "id, owner, title, completed, rank, created_at, updated_at";

/// Canonical ordering. Rank decides; the rest only makes ties deterministic.
const ORDER_BY: &str = "ORDER BY rank ASC, created_at ASC, id ASC";

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn item_from_row(row: &Row<'_>) -> std::result::Result<Item, rusqlite::Error> {
    let created_str: String = row.get(5)?;
    let updated_str: String = row.get(6)?;
    Ok(Item {
        id: ItemId::new(row.get(0)?),
        owner: Owner::from_stored(row.get(1)?),
        title: row.get(2)?,
        completed: row.get(3)?,
        rank: row.get(4)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

/// Run schema creation and all migrations on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    migrate_add_rank(conn)?;
    conn.execute_batch(INDEXES)?;
    Ok(())
}

/// Migration: add the rank column to lists created before reordering existed.
///
/// Each owner's items are backfilled newest first, the order those lists were
/// displayed in before ranks existed.
fn migrate_add_rank(conn: &Connection) -> Result<()> {
    let has_rank: bool = conn
        .query_row(
            "SELECT COUNT(*) > 0 FROM pragma_table_info('items') WHERE name = 'rank'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);

    if has_rank {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE items ADD COLUMN rank INTEGER NOT NULL DEFAULT 1",
        [],
    )?;
    let backfilled = conn.execute(
        "UPDATE items SET rank = 1 + (
             SELECT COUNT(*) FROM items AS newer
             WHERE newer.owner = items.owner
               AND (newer.created_at > items.created_at
                    OR (newer.created_at = items.created_at AND newer.id > items.id))
         )",
        [],
    )?;
    tracing::info!(backfilled, "added rank column");
    Ok(())
}

/// Every item of `owner`, in canonical order.
fn ordered_items(conn: &Connection, owner: &Owner, filter: ListFilter) -> Result<Vec<Item>> {
    let condition = match filter {
        ListFilter::All => "",
        ListFilter::Open => " AND completed = 0",
        ListFilter::Completed => " AND completed = 1",
    };
    let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE owner = ?1{condition} {ORDER_BY}");
    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map(params![owner.as_str()], item_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(items)
}

/// `(id, stored rank)` for every item of `owner`, in canonical order.
fn ordered_ranks(conn: &Connection, owner: &Owner) -> Result<Vec<(ItemId, Rank)>> {
    let sql = format!("SELECT id, rank FROM items WHERE owner = ?1 {ORDER_BY}");
    let mut stmt = conn.prepare_cached(&sql)?;
    let ranks = stmt
        .query_map(params![owner.as_str()], |row| {
            Ok((ItemId::new(row.get(0)?), row.get(1)?))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(ranks)
}

fn find_item(conn: &Connection, owner: &Owner, id: ItemId) -> Result<Item> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE owner = ?1 AND id = ?2");
    let mut stmt = conn.prepare_cached(&sql)?;
    let item = stmt
        .query_row(params![owner.as_str(), id.get()], item_from_row)
        .optional()?;
    item.ok_or(Error::NotFound(id))
}

fn write_ranks(conn: &Connection, owner: &Owner, changes: &[(ItemId, Rank)]) -> Result<()> {
    let mut stmt = conn.prepare_cached("UPDATE items SET rank = ?1 WHERE owner = ?2 AND id = ?3")?;
    for (id, rank) in changes {
        stmt.execute(params![rank, owner.as_str(), id.get()])?;
    }
    Ok(())
}

/// Renumber the survivors of a deletion to `1..=N`, keeping their order.
/// Returns how many rows had to be rewritten.
fn compact_ranks(conn: &Connection, owner: &Owner) -> Result<usize> {
    let current = ordered_ranks(conn, owner)?;
    let order: Vec<ItemId> = current.iter().map(|(id, _)| *id).collect();
    let changes = rank::rank_changes(&current, &order);
    write_ranks(conn, owner, &changes)?;
    Ok(changes.len())
}

/// SQLite database connection with rank store operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Open a database connection, waiting at most `busy_timeout` for the
    /// write lock before a mutation fails with [`Error::Conflict`].
    pub fn open_with_timeout(path: &Path, busy_timeout: Duration) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Start a write transaction. The lock is taken up front so that the
    /// owner's ranks cannot change between our read and our rewrite.
    fn begin(&mut self) -> Result<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }

    /// Create an item at the top of the owner's list.
    ///
    /// Every existing item moves down by one and the new item takes rank 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank or over-long title; nothing
    /// is written in that case.
    pub fn insert_at_top(&mut self, owner: &Owner, title: &str) -> Result<Item> {
        let title = validate_title(title)?;
        let now = Utc::now().to_rfc3339();

        let tx = self.begin()?;
        let shifted = tx.execute(
            "UPDATE items SET rank = rank + 1 WHERE owner = ?1",
            params![owner.as_str()],
        )?;
        tx.execute(
            "INSERT INTO items (owner, title, completed, rank, created_at, updated_at)
             VALUES (?1, ?2, 0, 1, ?3, ?3)",
            params![owner.as_str(), title, now],
        )?;
        let id = ItemId::new(tx.last_insert_rowid());
        let item = find_item(&tx, owner, id)?;
        tx.commit()?;

        tracing::debug!(%owner, %id, shifted, "inserted item at top");
        Ok(item)
    }

    /// Mark an item completed or open. Rank is untouched.
    pub fn set_completed(&mut self, owner: &Owner, id: ItemId, completed: bool) -> Result<Item> {
        let tx = self.begin()?;
        let affected = tx.execute(
            "UPDATE items SET completed = ?1, updated_at = ?2 WHERE owner = ?3 AND id = ?4",
            params![completed, Utc::now().to_rfc3339(), owner.as_str(), id.get()],
        )?;
        if affected == 0 {
            return Err(Error::NotFound(id));
        }
        let item = find_item(&tx, owner, id)?;
        tx.commit()?;

        tracing::debug!(%owner, %id, completed, "set completion");
        Ok(item)
    }

    /// Move an item to a zero-based position in the owner's full list.
    ///
    /// `target_index` is clamped into range rather than rejected. Moving an
    /// item onto its own position succeeds without writing anything.
    /// Returns the owner's list in its new order.
    pub fn move_to_index(&mut self, owner: &Owner, id: ItemId, target_index: i64) -> Result<Vec<Item>> {
        self.reorder(owner, id, |_| target_index)
    }

    /// Move an item one position towards the top. A no-op for the first item.
    pub fn move_up(&mut self, owner: &Owner, id: ItemId) -> Result<Vec<Item>> {
        self.reorder(owner, id, |from| from as i64 - 1)
    }

    /// Move an item one position towards the bottom. A no-op for the last item.
    pub fn move_down(&mut self, owner: &Owner, id: ItemId) -> Result<Vec<Item>> {
        self.reorder(owner, id, |from| from as i64 + 1)
    }

    fn reorder<F>(&mut self, owner: &Owner, id: ItemId, target: F) -> Result<Vec<Item>>
    where
        F: FnOnce(usize) -> i64,
    {
        let tx = self.begin()?;
        let current = ordered_ranks(&tx, owner)?;
        let mut order: Vec<ItemId> = current.iter().map(|(item_id, _)| *item_id).collect();
        let from = order
            .iter()
            .position(|item_id| *item_id == id)
            .ok_or(Error::NotFound(id))?;
        let relocation =
            rank::relocate_from(&mut order, from, target(from)).ok_or(Error::NotFound(id))?;

        let changes = rank::rank_changes(&current, &order);
        write_ranks(&tx, owner, &changes)?;
        let items = ordered_items(&tx, owner, ListFilter::All)?;
        tx.commit()?;

        tracing::debug!(
            %owner,
            %id,
            from = relocation.from,
            to = relocation.to,
            rewritten = changes.len(),
            "moved item"
        );
        Ok(items)
    }

    /// Delete one item and close the gap it leaves.
    pub fn delete_item(&mut self, owner: &Owner, id: ItemId) -> Result<()> {
        let tx = self.begin()?;
        let affected = tx.execute(
            "DELETE FROM items WHERE owner = ?1 AND id = ?2",
            params![owner.as_str(), id.get()],
        )?;
        if affected == 0 {
            return Err(Error::NotFound(id));
        }
        let compacted = compact_ranks(&tx, owner)?;
        tx.commit()?;

        tracing::debug!(%owner, %id, compacted, "deleted item");
        Ok(())
    }

    /// Delete every completed item of the owner and compact the rest.
    ///
    /// Returns the number of items removed; zero is not an error.
    pub fn delete_where_completed(&mut self, owner: &Owner) -> Result<usize> {
        let tx = self.begin()?;
        let removed = tx.execute(
            "DELETE FROM items WHERE owner = ?1 AND completed = 1",
            params![owner.as_str()],
        )?;
        let compacted = if removed > 0 {
            compact_ranks(&tx, owner)?
        } else {
            0
        };
        tx.commit()?;

        tracing::debug!(%owner, removed, compacted, "cleared completed items");
        Ok(removed)
    }

    /// The owner's full list in canonical order.
    pub fn list_items(&self, owner: &Owner) -> Result<Vec<Item>> {
        ordered_items(&self.conn, owner, ListFilter::All)
    }

    /// The subset of the owner's list matching `filter`, in canonical order.
    pub fn list_filtered(&self, owner: &Owner, filter: ListFilter) -> Result<Vec<Item>> {
        ordered_items(&self.conn, owner, filter)
    }

    /// Get one of the owner's items.
    pub fn get_item(&self, owner: &Owner, id: ItemId) -> Result<Item> {
        find_item(&self.conn, owner, id)
    }

    /// Zero-based position of an item in the owner's full list.
    pub fn index_of(&self, owner: &Owner, id: ItemId) -> Result<usize> {
        ordered_ranks(&self.conn, owner)?
            .iter()
            .position(|(item_id, _)| *item_id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Item counts for each filter.
    pub fn counts(&self, owner: &Owner) -> Result<ListCounts> {
        let (all, completed): (i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM items WHERE owner = ?1",
            params![owner.as_str()],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let all = usize::try_from(all).unwrap_or(0);
        let completed = usize::try_from(completed).unwrap_or(0);
        Ok(ListCounts {
            all,
            open: all.saturating_sub(completed),
            completed,
        })
    }

    /// Verify that the owner's ranks are exactly `1..=N`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptedData`] naming the first violation.
    pub fn check_ranks(&self, owner: &Owner) -> Result<()> {
        let ranks: Vec<Rank> = ordered_ranks(&self.conn, owner)?
            .into_iter()
            .map(|(_, rank)| rank)
            .collect();
        rank::check_dense(&ranks)
            .map_err(|violation| Error::CorruptedData(format!("owner '{owner}': {violation}")))
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
