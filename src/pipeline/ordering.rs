//! Projection of host records into menu entries and their manual ordering.
//!
//! Entries carry the rank persisted in [`ViewState`]; ids without a rank sit at
//! [`MIN_ORDER`]. Sorting is stable, so entries sharing a rank keep the host's
//! data order. A reorder moves one entry and rewrites every rank as its new
//! position, producing the full mapping handed back to the host.

use std::collections::HashSet;

use crate::domain::{DocIndexError, MenuEntry, Record, Result, ViewState, MIN_ORDER};

use super::normalize::normalize;

/// Maps records to menu entries, reading ranks from `state`.
///
/// Duplicate ids keep their first occurrence. Ranks for ids that no longer
/// exist are simply never read.
#[must_use]
pub fn project(records: &[Record], state: &ViewState) -> Vec<MenuEntry> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id.as_str()) {
            tracing::debug!(id = %record.id, "skipping duplicate record id");
            continue;
        }

        entries.push(MenuEntry {
            id: record.id.clone(),
            title: record.title.clone(),
            normalized_title: normalize(&record.title),
            order: state.instance_order.get(&record.id).copied().unwrap_or(MIN_ORDER),
            created_at: record.created_at,
        });
    }

    entries
}

/// Sorts entries ascending by rank. Ties keep their relative order.
pub fn sort_by_order(entries: &mut [MenuEntry]) {
    entries.sort_by_key(|entry| entry.order);
}

/// Projects `records` and, when `manual_order` is set, sorts them by rank.
///
/// Without manual ordering the host's data order is the display order.
#[must_use]
pub fn order_entries(records: &[Record], state: &ViewState, manual_order: bool) -> Vec<MenuEntry> {
    let mut entries = project(records, state);
    if manual_order {
        sort_by_order(&mut entries);
    }
    entries
}

/// Moves the entry at `from` to `to`, shifting the entries in between by one.
///
/// # Errors
///
/// Returns [`DocIndexError::Reorder`] without touching `entries` when either
/// index is out of range.
pub fn move_entry(entries: &mut Vec<MenuEntry>, from: usize, to: usize) -> Result<()> {
    let len = entries.len();
    if from >= len || to >= len {
        return Err(DocIndexError::Reorder { from, to, len });
    }

    let entry = entries.remove(from);
    entries.insert(to, entry);
    Ok(())
}

/// Rewrites every entry's rank as its position and returns the full mapping.
pub fn assign_positions(entries: &mut [MenuEntry]) -> ViewState {
    let mut state = ViewState::default();
    for (position, entry) in (0_i64..).zip(entries.iter_mut()) {
        entry.order = position;
        state.instance_order.insert(entry.id.clone(), position);
    }
    state
}

/// Moves one entry and re-ranks the whole list.
///
/// # Errors
///
/// Propagates [`move_entry`] range errors; nothing is re-ranked in that case.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use docindex::pipeline::ordering::{order_entries, reorder};
/// use docindex::{Record, ViewState};
///
/// let now = Utc::now();
/// let records = vec![Record::new("a", "A", now), Record::new("b", "B", now), Record::new("c", "C", now)];
/// let mut entries = order_entries(&records, &ViewState::default(), true);
///
/// let state = reorder(&mut entries, 0, 2)?;
/// assert_eq!(state.order_of("b"), 0);
/// assert_eq!(state.order_of("c"), 1);
/// assert_eq!(state.order_of("a"), 2);
/// # Ok::<(), docindex::DocIndexError>(())
/// ```
pub fn reorder(entries: &mut Vec<MenuEntry>, from: usize, to: usize) -> Result<ViewState> {
    move_entry(entries, from, to)?;
    Ok(assign_positions(entries))
}
