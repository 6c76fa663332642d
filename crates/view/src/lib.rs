// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rung-view: client-side list state
//!
//! [`ReorderViewModel`] owns the drag state for one list view and turns a
//! finished gesture into at most one [`MoveIntent`]. [`Reconciler`] compares
//! row offsets between renders so a front end can animate rows into place
//! once the authoritative order arrives.

pub mod drag;
pub mod reconcile;

pub use drag::{DragError, DragState, MoveIntent, ReorderViewModel, RowGeometry};
pub use reconcile::{PositionCorrection, Reconciler};
