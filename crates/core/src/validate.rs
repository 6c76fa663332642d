// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

// Input length limits, in characters
pub const MAX_TITLE_LENGTH: usize = 160;
pub const MAX_OWNER_LENGTH: usize = 100;

/// Validate a title, returning it trimmed.
pub fn validate_title(title: &str) -> Result<String> {
    validate_text("title", title, MAX_TITLE_LENGTH)
}

/// Validate an owner name, returning it trimmed.
pub fn validate_owner(owner: &str) -> Result<String> {
    validate_text("owner", owner, MAX_OWNER_LENGTH)
}

fn validate_text(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            field,
            reason: "can't be blank".to_string(),
        });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(Error::Validation {
            field,
            reason: format!("is too long (maximum is {max} characters)"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
