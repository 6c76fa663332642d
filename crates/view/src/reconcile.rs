// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Position corrections between renders.
//!
//! After the list re-renders in a new order, each row that kept its id but
//! changed its vertical offset is animated from where it used to be. This is
//! cosmetic only; skipping it never affects ordering.

use std::collections::HashMap;
use std::time::Duration;

use rung_core::ItemId;

use crate::drag::RowGeometry;

/// Animation length for one correction.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(180);

/// Offsets smaller than this are not worth animating.
const MIN_DELTA: f64 = 1.0;

/// Animate row `id` from `from_offset` (relative to its new top) back to 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionCorrection {
    pub id: ItemId,
    pub from_offset: f64,
    pub duration: Duration,
}

/// Remembers each row's last top offset.
#[derive(Debug, Clone)]
pub struct Reconciler {
    previous: HashMap<ItemId, f64>,
    duration: Duration,
}

impl Default for Reconciler {
    fn default() -> Self {
        Reconciler::new(DEFAULT_DURATION)
    }
}

impl Reconciler {
    pub fn new(duration: Duration) -> Self {
        Reconciler {
            previous: HashMap::new(),
            duration,
        }
    }

    /// Record a new layout and return the corrections to play, in row order.
    ///
    /// Nothing is returned while `dragging` or when `reduced_motion` is set,
    /// but the offsets are still recorded so the next observation compares
    /// against what is actually on screen.
    pub fn observe(
        &mut self,
        rows: &[RowGeometry],
        dragging: bool,
        reduced_motion: bool,
    ) -> Vec<PositionCorrection> {
        let next: HashMap<ItemId, f64> = rows.iter().map(|row| (row.id, row.top)).collect();
        let previous = std::mem::replace(&mut self.previous, next);
        if dragging || reduced_motion {
            return Vec::new();
        }

        rows.iter()
            .filter_map(|row| {
                let delta = previous.get(&row.id)? - row.top;
                (delta.abs() >= MIN_DELTA).then_some(PositionCorrection {
                    id: row.id,
                    from_offset: delta,
                    duration: self.duration,
                })
            })
            .collect()
    }

    /// Forget all recorded offsets.
    pub fn clear(&mut self) {
        self.previous.clear();
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
