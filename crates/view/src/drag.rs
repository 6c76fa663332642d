// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drag-to-reorder state for one list view.
//!
//! The model keeps the last authoritative list untouched while a drag is in
//! progress and derives the preview from it through [`rung_core::rank`], the
//! same arithmetic the store uses. Network I/O is left to the caller: a
//! finished gesture yields at most one [`MoveIntent`].
//!
//! After a commit the model is idle again but keeps showing the projected
//! order until [`ReorderViewModel::apply_authoritative`] delivers the
//! confirmed list. Only one move may be outstanding at a time.

use std::collections::HashMap;

use rung_core::rank;
use rung_core::{Intent, Item, ItemId, ListCounts, ListFilter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendered position of one row, in the same coordinate space as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub id: ItemId,
    pub top: f64,
    pub height: f64,
}

impl RowGeometry {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Request to move `id` to `target_index` in the owner's full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub id: ItemId,
    pub target_index: i64,
}

impl From<MoveIntent> for Intent {
    fn from(intent: MoveIntent) -> Self {
        Intent::Move {
            id: intent.id,
            target_index: intent.target_index,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source_id: ItemId,
        /// Index of the source in the authoritative list.
        source_index: usize,
        /// Index the source would land on if dropped now.
        preview_index: usize,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Why a reorder gesture was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("reordering is only available in the unfiltered list")]
    FilterActive,

    #[error("a drag is already in progress")]
    AlreadyDragging,

    #[error("the previous move has not been confirmed yet")]
    AwaitingCommit,

    #[error("item {0} is not in the list")]
    UnknownItem(ItemId),
}

/// Client-side list state: authoritative items, active filter, drag state.
#[derive(Debug, Clone, Default)]
pub struct ReorderViewModel {
    items: Vec<Item>,
    filter: ListFilter,
    state: DragState,
    /// Projected order shown while a committed move awaits confirmation.
    pending: Option<Vec<ItemId>>,
}

fn as_target(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

impl ReorderViewModel {
    /// Creates a model over an authoritative list, in rank order.
    pub fn new(items: Vec<Item>) -> Self {
        ReorderViewModel {
            items,
            ..Default::default()
        }
    }

    /// The last authoritative list. Never changed by a drag.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filter(&self) -> ListFilter {
        self.filter
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn has_pending_move(&self) -> bool {
        self.pending.is_some()
    }

    fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    fn ensure_reorderable(&self) -> Result<(), DragError> {
        if !self.filter.allows_reorder() {
            return Err(DragError::FilterActive);
        }
        if self.state.is_dragging() {
            return Err(DragError::AlreadyDragging);
        }
        if self.pending.is_some() {
            return Err(DragError::AwaitingCommit);
        }
        Ok(())
    }

    /// Enter `Dragging` for `id`.
    pub fn begin_drag(&mut self, id: ItemId) -> Result<(), DragError> {
        self.ensure_reorderable()?;
        let index = self.index_of(id).ok_or(DragError::UnknownItem(id))?;
        tracing::trace!(%id, index, "drag started");
        self.state = DragState::Dragging {
            source_id: id,
            source_index: index,
            preview_index: index,
        };
        Ok(())
    }

    /// Recompute the preview slot from the pointer position.
    ///
    /// The slot is the number of rows, other than the source, whose midpoint
    /// lies above `pointer_y`. Returns the new slot, or `None` when idle.
    pub fn pointer_moved(&mut self, pointer_y: f64, rows: &[RowGeometry]) -> Option<usize> {
        let last = self.items.len().saturating_sub(1);
        let DragState::Dragging {
            source_id,
            preview_index,
            ..
        } = &mut self.state
        else {
            return None;
        };
        let crossed = rows
            .iter()
            .filter(|row| row.id != *source_id && row.midpoint() < pointer_y)
            .count();
        *preview_index = crossed.min(last);
        Some(*preview_index)
    }

    /// Ids in preview order while dragging, `None` otherwise.
    pub fn preview_order(&self) -> Option<Vec<ItemId>> {
        match self.state {
            DragState::Dragging {
                source_id,
                preview_index,
                ..
            } => rank::relocated(&self.ids(), &source_id, as_target(preview_index)),
            DragState::Idle => None,
        }
    }

    /// Drop the dragged item at its preview slot.
    ///
    /// Returns the move to send, or `None` when the item did not change place
    /// or nothing was being dragged.
    pub fn commit(&mut self) -> Option<MoveIntent> {
        let DragState::Dragging {
            source_id,
            source_index,
            preview_index,
        } = std::mem::take(&mut self.state)
        else {
            return None;
        };
        if preview_index == source_index {
            tracing::trace!(id = %source_id, "drag dropped in place");
            return None;
        }
        let target_index = as_target(preview_index);
        self.pending = rank::relocated(&self.ids(), &source_id, target_index);
        tracing::debug!(id = %source_id, from = source_index, to = preview_index, "move committed");
        Some(MoveIntent {
            id: source_id,
            target_index,
        })
    }

    /// Abandon the drag. Returns whether one was in progress.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.state.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Switch the visible subset. An active drag is cancelled.
    pub fn set_filter(&mut self, filter: ListFilter) {
        if self.cancel() {
            tracing::trace!(%filter, "filter change cancelled drag");
        }
        self.filter = filter;
    }

    /// Replace the authoritative list, e.g. with the response to a move.
    ///
    /// Clears any pending move. A drag in progress follows its source item,
    /// or is cancelled if the item is gone.
    pub fn apply_authoritative(&mut self, items: Vec<Item>) {
        self.items = items;
        self.pending = None;
        if let DragState::Dragging {
            source_id,
            preview_index,
            ..
        } = self.state
        {
            self.state = match self.index_of(source_id) {
                Some(index) => DragState::Dragging {
                    source_id,
                    source_index: index,
                    preview_index: preview_index.min(self.items.len().saturating_sub(1)),
                },
                None => DragState::Idle,
            };
        }
    }

    /// Forget the projected order of a move the store rejected.
    pub fn discard_pending(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// One-step move toward the top. `Ok(None)` when already first.
    pub fn move_up(&mut self, id: ItemId) -> Result<Option<MoveIntent>, DragError> {
        self.step(id, |index, _| index.checked_sub(1))
    }

    /// One-step move toward the bottom. `Ok(None)` when already last.
    pub fn move_down(&mut self, id: ItemId) -> Result<Option<MoveIntent>, DragError> {
        self.step(id, |index, len| Some(index + 1).filter(|next| *next < len))
    }

    fn step<F>(&mut self, id: ItemId, target: F) -> Result<Option<MoveIntent>, DragError>
    where
        F: FnOnce(usize, usize) -> Option<usize>,
    {
        self.ensure_reorderable()?;
        let index = self.index_of(id).ok_or(DragError::UnknownItem(id))?;
        let Some(target) = target(index, self.items.len()) else {
            return Ok(None);
        };
        let target_index = as_target(target);
        self.pending = rank::relocated(&self.ids(), &id, target_index);
        Ok(Some(MoveIntent { id, target_index }))
    }

    pub fn can_move_up(&self, id: ItemId) -> bool {
        self.can_reorder() && self.index_of(id).is_some_and(|index| index > 0)
    }

    pub fn can_move_down(&self, id: ItemId) -> bool {
        self.can_reorder()
            && self
                .index_of(id)
                .is_some_and(|index| index + 1 < self.items.len())
    }

    /// Items to render: preview, pending, or authoritative order, filtered.
    pub fn display_items(&self) -> Vec<&Item> {
        let order = self.preview_order().or_else(|| self.pending.clone());
        let Some(order) = order else {
            return self
                .items
                .iter()
                .filter(|item| self.filter.matches(item))
                .collect();
        };
        let by_id: HashMap<ItemId, &Item> = self.items.iter().map(|item| (item.id, item)).collect();
        order
            .iter()
            .filter_map(|id| by_id.get(id).copied())
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    /// Where the dragged item would land, `None` when not dragging.
    pub fn insertion_slot(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { preview_index, .. } => Some(preview_index),
            DragState::Idle => None,
        }
    }

    /// Whether drag handles and move buttons should be enabled.
    pub fn can_reorder(&self) -> bool {
        self.filter.allows_reorder() && self.pending.is_none()
    }

    pub fn counts(&self) -> ListCounts {
        ListCounts::from_items(&self.items)
    }

    /// Message for an empty view under the active filter.
    pub fn empty_message(&self) -> Option<&'static str> {
        let any_visible = self.items.iter().any(|item| self.filter.matches(item));
        (!any_visible).then(|| self.filter.empty_message())
    }
}

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
