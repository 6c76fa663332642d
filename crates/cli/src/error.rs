// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the rung CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'rung init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("no owner given\n  hint: pass --owner, set RUNG_OWNER, or set owner in .rung/config.toml")]
    OwnerRequired,

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Store(#[from] rung_core::Error),

    #[error("cannot move item: {0}")]
    Reorder(#[from] rung_view::DragError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the command failed without changing anything and may be
    /// run again as is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Store(e) if e.is_retryable())
    }
}

/// A specialized Result type for the rung CLI.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
