// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

#[parameterized(
    plain = { "Buy milk", "Buy milk" },
    padded = { "  Buy milk \n", "Buy milk" },
    at_limit = { &"a".repeat(MAX_TITLE_LENGTH), &"a".repeat(MAX_TITLE_LENGTH) },
)]
fn valid_titles(input: &str, expected: &str) {
    assert_eq!(validate_title(input).unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    spaces = { "   " },
    newline = { "\n\t" },
)]
fn blank_titles_are_rejected(input: &str) {
    match validate_title(input) {
        Err(Error::Validation { field, reason }) => {
            assert_eq!(field, "title");
            assert_eq!(reason, "can't be blank");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn title_over_limit_is_rejected() {
    let title = "a".repeat(MAX_TITLE_LENGTH + 1);
    match validate_title(&title) {
        Err(Error::Validation { field, reason }) => {
            assert_eq!(field, "title");
            assert_eq!(reason, "is too long (maximum is 160 characters)");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn title_length_counts_characters_not_bytes() {
    let title = "é".repeat(MAX_TITLE_LENGTH);
    assert!(title.len() > MAX_TITLE_LENGTH);
    assert!(validate_title(&title).is_ok());
}

#[test]
fn owner_over_limit_is_rejected() {
    let owner = "o".repeat(MAX_OWNER_LENGTH + 1);
    assert!(matches!(
        validate_owner(&owner),
        Err(Error::Validation { field: "owner", .. })
    ));
}
