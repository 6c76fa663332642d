// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    not_found = { Error::NotFound(ItemId::new(42)), "item not found: 42" },
    validation = {
        Error::Validation { field: "title", reason: "can't be blank".into() },
        "title can't be blank"
    },
    conflict = { Error::Conflict("database is locked".into()), "can be retried" },
    corrupted = { Error::CorruptedData("gap at rank 2".into()), "gap at rank 2" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected), "{err}");
}

#[test]
fn only_conflict_is_retryable() {
    assert!(Error::Conflict("busy".into()).is_retryable());
    assert!(!Error::NotFound(ItemId::new(1)).is_retryable());
    assert!(!Error::Validation {
        field: "title",
        reason: "can't be blank".into()
    }
    .is_retryable());
}

#[test]
fn busy_sqlite_error_maps_to_conflict() {
    let sqlite_err = rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
        Some("database is locked".into()),
    );
    let err: Error = sqlite_err.into();
    assert!(matches!(err, Error::Conflict(_)));
}

#[test]
fn other_sqlite_error_maps_to_database() {
    let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, Error::Database(_)));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}
