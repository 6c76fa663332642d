// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rank arithmetic.
//!
//! Pure functions over ordered id sequences. The store uses them inside its
//! transactions and the view model uses them to project drag previews, so
//! both sides agree on what "move X to index N" means.
//!
//! A sequence is *dense* when its ranks are exactly `1..=N`.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// 1-based position of an item within its owner's list.
pub type Rank = u32;

/// Where an element was taken from and where it was put back, both as
/// zero-based indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub from: usize,
    pub to: usize,
}

impl Relocation {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Clamp a signed target index into `0..=len`.
///
/// Out-of-range requests land on the nearest end instead of failing.
pub fn clamp_index(target: i64, len: usize) -> usize {
    if target <= 0 {
        return 0;
    }
    usize::try_from(target).map_or(len, |t| t.min(len))
}

/// Move the element at `from` so that it ends up at `target`.
///
/// `target` is clamped against the length *after* the element is removed,
/// so `target >= len - 1` always means "last". Returns `None` when `from`
/// is out of bounds.
pub fn relocate_from<T>(order: &mut Vec<T>, from: usize, target: i64) -> Option<Relocation> {
    if from >= order.len() {
        return None;
    }
    let moving = order.remove(from);
    let to = clamp_index(target, order.len());
    order.insert(to, moving);
    Some(Relocation { from, to })
}

/// Move `item` to `target` within `order`. Returns `None` if it is absent.
pub fn relocate<T: PartialEq>(order: &mut Vec<T>, item: &T, target: i64) -> Option<Relocation> {
    let from = order.iter().position(|x| x == item)?;
    relocate_from(order, from, target)
}

/// Non-mutating form of [`relocate`], for read-only projections.
pub fn relocated<T: PartialEq + Clone>(order: &[T], item: &T, target: i64) -> Option<Vec<T>> {
    let mut projected = order.to_vec();
    relocate(&mut projected, item, target)?;
    Some(projected)
}

/// Dense rank for a zero-based index.
pub fn rank_at(index: usize) -> Rank {
    Rank::try_from(index + 1).unwrap_or(Rank::MAX)
}

/// Assign `1..=N` to `order`, in order.
pub fn dense_ranks<T: Copy>(order: &[T]) -> impl Iterator<Item = (T, Rank)> + '_ {
    order
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, rank_at(index)))
}

/// Ranks that must be written so that `order` becomes densely ranked.
///
/// `current` holds each id's stored rank; ids whose rank is already right
/// are left out, so a no-op move writes nothing.
pub fn rank_changes<T: Copy + Eq + Hash>(current: &[(T, Rank)], order: &[T]) -> Vec<(T, Rank)> {
    let stored: HashMap<T, Rank> = current.iter().copied().collect();
    dense_ranks(order)
        .filter(|(id, rank)| stored.get(id) != Some(rank))
        .collect()
}

/// Why a set of ranks is not `1..=N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankViolation {
    Duplicate(Rank),
    Gap { expected: Rank, found: Rank },
}

impl fmt::Display for RankViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankViolation::Duplicate(rank) => write!(f, "rank {rank} is used more than once"),
            RankViolation::Gap { expected, found } => {
                write!(f, "expected rank {expected}, found {found}")
            }
        }
    }
}

/// Check that `ranks`, in any order, are exactly `1..=N`.
pub fn check_dense(ranks: &[Rank]) -> Result<(), RankViolation> {
    let mut sorted = ranks.to_vec();
    sorted.sort_unstable();
    for (index, found) in sorted.iter().copied().enumerate() {
        let expected = rank_at(index);
        if found == expected {
            continue;
        }
        if index > 0 && sorted[index - 1] == found {
            return Err(RankViolation::Duplicate(found));
        }
        return Err(RankViolation::Gap { expected, found });
    }
    Ok(())
}

#[cfg(test)]
#[path = "rank_tests.rs"]
mod tests;
