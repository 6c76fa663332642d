// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rung_core::{Item, ListCounts, ListFilter, Notice};

const FILTERS: [ListFilter; 3] = [ListFilter::All, ListFilter::Open, ListFilter::Completed];

/// Format a single item line for list output.
///
/// The leading number is the item's rank, i.e. its 1-based position in the
/// full list.
pub fn format_item_line(item: &Item) -> String {
    format!(
        "{}. ({}) {}: {}",
        item.rank,
        item.status_label(),
        item.id,
        item.title
    )
}

/// Filter names with their counts; the active one is bracketed.
pub fn format_filter_bar(counts: ListCounts, active: ListFilter) -> String {
    FILTERS
        .iter()
        .map(|filter| {
            let label = format!("{} ({})", filter, counts.for_filter(*filter));
            if *filter == active {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Notice message, followed by what it is about.
pub fn format_notice(notice: &Notice, subject: &str) -> String {
    if subject.is_empty() {
        notice.message().to_string()
    } else {
        format!("{} ({})", notice.message(), subject)
    }
}

/// Short reference to an item used in notices.
pub fn item_subject(item: &Item) -> String {
    format!("{}: {}", item.id, item.title)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
