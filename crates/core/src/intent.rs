// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Intents accepted from the request layer.
//!
//! An [`Intent`] is one user action against one owner's list. Applying it
//! runs exactly one store transaction and yields an [`Outcome`] plus the
//! flash-style [`Notice`] a front end shows for it.

use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::Result;
use crate::item::{Item, ItemId, Owner};

/// A single mutation requested by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Create { title: String },
    SetCompleted { id: ItemId, completed: bool },
    /// `target_index` is zero-based into the full, unfiltered list and may be
    /// out of range; it is clamped.
    Move { id: ItemId, target_index: i64 },
    Delete { id: ItemId },
    ClearCompleted,
}

impl Intent {
    /// Returns the string representation used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Create { .. } => "create",
            Intent::SetCompleted { .. } => "set_completed",
            Intent::Move { .. } => "move",
            Intent::Delete { .. } => "delete",
            Intent::ClearCompleted => "clear_completed",
        }
    }
}

/// What an applied intent produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "data", rename_all = "snake_case")]
pub enum Outcome {
    /// The created or updated item.
    Item(Item),
    /// The owner's full list after a move.
    List(Vec<Item>),
    Deleted(ItemId),
    /// Number of completed items removed.
    Cleared(usize),
}

/// User-facing message for an applied intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "snake_case")]
pub enum Notice {
    Info(&'static str),
    /// The request succeeded but did nothing the user would expect.
    Alert(&'static str),
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Info(message) | Notice::Alert(message) => message,
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Notice::Alert(_))
    }
}

/// Result of [`Database::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub outcome: Outcome,
    pub notice: Notice,
}

impl Database {
    /// Apply one intent for `owner` as a single transaction.
    pub fn apply(&mut self, owner: &Owner, intent: Intent) -> Result<Response> {
        tracing::debug!(%owner, intent = intent.as_str(), "applying intent");
        let response = match intent {
            Intent::Create { title } => Response {
                outcome: Outcome::Item(self.insert_at_top(owner, &title)?),
                notice: Notice::Info("Todo added"),
            },
            Intent::SetCompleted { id, completed } => Response {
                outcome: Outcome::Item(self.set_completed(owner, id, completed)?),
                notice: Notice::Info("Todo updated"),
            },
            Intent::Move { id, target_index } => Response {
                outcome: Outcome::List(self.move_to_index(owner, id, target_index)?),
                notice: Notice::Info("Todo moved"),
            },
            Intent::Delete { id } => {
                self.delete_item(owner, id)?;
                Response {
                    outcome: Outcome::Deleted(id),
                    notice: Notice::Info("Todo deleted"),
                }
            }
            Intent::ClearCompleted => {
                let count = self.delete_where_completed(owner)?;
                let notice = if count > 0 {
                    Notice::Info("Completed todos cleared")
                } else {
                    Notice::Alert("No completed todos to clear")
                };
                Response {
                    outcome: Outcome::Cleared(count),
                    notice,
                }
            }
        };
        Ok(response)
    }
}

#[cfg(test)]
#[path = "intent_tests.rs"]
mod tests;
