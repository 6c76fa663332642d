// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rung-core operations.

use rusqlite::ErrorCode;
use thiserror::Error;

use crate::item::ItemId;

/// All possible errors that can occur in rung-core operations.
///
/// Every variant is reported before anything is committed: a failed
/// operation never leaves a partial re-rank behind.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{field} {reason}")]
    Validation { field: &'static str, reason: String },

    /// Unknown id, or an id owned by someone else. Both read the same.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    #[error("transaction conflict: {0}\n  hint: nothing was changed, the request can be retried")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

impl Error {
    /// True for failures where the mutation was not applied and an identical
    /// request may succeed later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        match e.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
                Error::Conflict(e.to_string())
            }
            _ => Error::Database(e),
        }
    }
}

/// A specialized Result type for rung-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
