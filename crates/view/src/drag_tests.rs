// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;
use rung_core::Owner;
use yare::parameterized;

fn item(id: i64, title: &str, completed: bool) -> Item {
    let now = Utc::now();
    Item {
        id: ItemId::new(id),
        owner: Owner::new("alice").unwrap(),
        title: title.to_string(),
        completed,
        rank: u32::try_from(id).unwrap(),
        created_at: now,
        updated_at: now,
    }
}

/// a, b, c, d with ids 1..=4; c is completed.
fn model() -> ReorderViewModel {
    ReorderViewModel::new(vec![
        item(1, "a", false),
        item(2, "b", false),
        item(3, "c", true),
        item(4, "d", false),
    ])
}

/// Rows 10 units tall, stacked from 0.
fn rows(model: &ReorderViewModel) -> Vec<RowGeometry> {
    model
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| RowGeometry {
            id: item.id,
            top: index as f64 * 10.0,
            height: 10.0,
        })
        .collect()
}

fn titles(model: &ReorderViewModel) -> Vec<&str> {
    model
        .display_items()
        .into_iter()
        .map(|item| item.title.as_str())
        .collect()
}

fn id(raw: i64) -> ItemId {
    ItemId::new(raw)
}

#[test]
fn begin_drag_enters_dragging_at_source() {
    let mut model = model();
    model.begin_drag(id(2)).unwrap();
    assert_eq!(
        model.state(),
        DragState::Dragging {
            source_id: id(2),
            source_index: 1,
            preview_index: 1,
        }
    );
    assert_eq!(model.insertion_slot(), Some(1));
}

#[test]
fn begin_drag_refusals() {
    let mut model = model();
    assert_eq!(model.begin_drag(id(9)), Err(DragError::UnknownItem(id(9))));

    model.begin_drag(id(1)).unwrap();
    assert_eq!(model.begin_drag(id(2)), Err(DragError::AlreadyDragging));

    model.cancel();
    model.set_filter(ListFilter::Open);
    assert_eq!(model.begin_drag(id(1)), Err(DragError::FilterActive));
}

#[parameterized(
    above_everything = { 2.0, 0 },
    past_first_midpoint = { 16.0, 1 },
    past_own_row = { 18.0, 1 },
    past_third_midpoint = { 26.0, 2 },
    below_everything = { 100.0, 3 },
)]
fn pointer_counts_crossed_midpoints(pointer_y: f64, expected: usize) {
    let mut model = model();
    let rows = rows(&model);
    model.begin_drag(id(2)).unwrap();
    assert_eq!(model.pointer_moved(pointer_y, &rows), Some(expected));
    assert_eq!(model.insertion_slot(), Some(expected));
}

#[test]
fn pointer_moved_while_idle_is_ignored() {
    let mut model = model();
    let rows = rows(&model);
    assert_eq!(model.pointer_moved(30.0, &rows), None);
    assert_eq!(model.state(), DragState::Idle);
}

#[test]
fn preview_never_touches_authoritative_list() {
    let mut model = model();
    let before = model.items().to_vec();
    let rows = rows(&model);

    model.begin_drag(id(1)).unwrap();
    model.pointer_moved(100.0, &rows);
    similar_asserts::assert_eq!(titles(&model), vec!["b", "c", "d", "a"]);
    assert_eq!(model.items(), before.as_slice());

    assert!(model.cancel());
    assert_eq!(model.state(), DragState::Idle);
    assert_eq!(model.items(), before.as_slice());
    similar_asserts::assert_eq!(titles(&model), vec!["a", "b", "c", "d"]);
    assert!(!model.has_pending_move());
}

#[test]
fn commit_in_place_emits_nothing() {
    let mut model = model();
    let rows = rows(&model);
    model.begin_drag(id(3)).unwrap();
    model.pointer_moved(26.0, &rows);

    assert_eq!(model.commit(), None);
    assert_eq!(model.state(), DragState::Idle);
    assert!(!model.has_pending_move());
}

#[test]
fn commit_emits_one_intent_and_holds_preview() {
    let mut model = model();
    let rows = rows(&model);
    model.begin_drag(id(4)).unwrap();
    model.pointer_moved(0.0, &rows);

    let intent = model.commit().unwrap();
    assert_eq!(
        intent,
        MoveIntent {
            id: id(4),
            target_index: 0
        }
    );
    assert_eq!(model.commit(), None);
    assert_eq!(model.state(), DragState::Idle);

    // preview order stays until the store answers
    similar_asserts::assert_eq!(titles(&model), vec!["d", "a", "b", "c"]);
    assert!(!model.can_reorder());
    assert_eq!(model.begin_drag(id(1)), Err(DragError::AwaitingCommit));

    let confirmed = vec![
        item(4, "d", false),
        item(1, "a", false),
        item(2, "b", false),
        item(3, "c", true),
    ];
    model.apply_authoritative(confirmed);
    assert!(!model.has_pending_move());
    assert!(model.can_reorder());
    similar_asserts::assert_eq!(titles(&model), vec!["d", "a", "b", "c"]);
}

#[test]
fn discarded_move_shows_authoritative_order_again() {
    let mut model = model();
    let intent = model.move_down(id(1)).unwrap();
    assert!(intent.is_some());
    similar_asserts::assert_eq!(titles(&model), vec!["b", "a", "c", "d"]);

    assert!(model.discard_pending());
    similar_asserts::assert_eq!(titles(&model), vec!["a", "b", "c", "d"]);
    assert!(!model.discard_pending());
}

#[test]
fn filter_change_cancels_drag() {
    let mut model = model();
    let rows = rows(&model);
    model.begin_drag(id(1)).unwrap();
    model.pointer_moved(100.0, &rows);

    model.set_filter(ListFilter::Completed);
    assert_eq!(model.state(), DragState::Idle);
    assert_eq!(model.commit(), None);
    similar_asserts::assert_eq!(titles(&model), vec!["c"]);
}

#[test]
fn authoritative_update_follows_dragged_item() {
    let mut model = model();
    model.begin_drag(id(2)).unwrap();

    model.apply_authoritative(vec![item(2, "b", false), item(1, "a", false)]);
    assert_eq!(
        model.state(),
        DragState::Dragging {
            source_id: id(2),
            source_index: 0,
            preview_index: 1,
        }
    );

    model.apply_authoritative(vec![item(1, "a", false)]);
    assert_eq!(model.state(), DragState::Idle);
}

#[test]
fn arrow_moves() {
    let mut model = model();
    assert_eq!(model.move_up(id(1)), Ok(None));
    assert!(!model.can_move_up(id(1)));
    assert!(!model.can_move_down(id(4)));
    assert!(model.can_move_down(id(2)));

    assert_eq!(
        model.move_down(id(2)),
        Ok(Some(MoveIntent {
            id: id(2),
            target_index: 2
        }))
    );
    assert_eq!(model.move_up(id(4)), Err(DragError::AwaitingCommit));
    assert!(!model.can_move_up(id(4)));
}

#[test]
fn arrow_moves_need_unfiltered_view() {
    let mut model = model();
    model.set_filter(ListFilter::Open);
    assert_eq!(model.move_down(id(1)), Err(DragError::FilterActive));
    assert!(!model.can_move_down(id(1)));
    assert_eq!(model.move_up(id(9)), Err(DragError::FilterActive));
}

#[test]
fn display_items_respects_filter() {
    let mut model = model();
    model.set_filter(ListFilter::Open);
    similar_asserts::assert_eq!(titles(&model), vec!["a", "b", "d"]);
    model.set_filter(ListFilter::Completed);
    similar_asserts::assert_eq!(titles(&model), vec!["c"]);
}

#[test]
fn counts_and_empty_messages() {
    let mut model = model();
    assert_eq!(
        model.counts(),
        ListCounts {
            all: 4,
            open: 3,
            completed: 1
        }
    );
    assert_eq!(model.empty_message(), None);

    model.apply_authoritative(vec![item(1, "a", false)]);
    model.set_filter(ListFilter::Completed);
    assert_eq!(model.empty_message(), Some("No completed todos yet."));

    let mut empty = ReorderViewModel::default();
    assert_eq!(empty.empty_message(), Some("No todos yet."));
    empty.set_filter(ListFilter::Open);
    assert_eq!(empty.empty_message(), Some("No open todos yet."));
}

#[test]
fn move_intent_becomes_store_intent() {
    let intent: Intent = MoveIntent {
        id: id(5),
        target_index: 3,
    }
    .into();
    assert_eq!(
        intent,
        Intent::Move {
            id: id(5),
            target_index: 3
        }
    );
}

#[test]
fn drag_error_messages() {
    assert_eq!(
        DragError::FilterActive.to_string(),
        "reordering is only available in the unfiltered list"
    );
    assert_eq!(
        DragError::UnknownItem(id(7)).to_string(),
        "item 7 is not in the list"
    );
}

#[test]
fn move_intent_wire_format() {
    let intent = MoveIntent {
        id: id(5),
        target_index: -1,
    };
    let value = serde_json::to_value(intent).unwrap();
    assert_eq!(value, serde_json::json!({ "id": 5, "target_index": -1 }));

    let back: MoveIntent = serde_json::from_value(value).unwrap();
    assert_eq!(back, intent);
}
