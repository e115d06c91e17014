//! View Deriver
//!
//! Annotates, filters and orders the active collection for display.

use chrono::{DateTime, Utc};

use crate::config::SOON_WINDOW_DAYS;
use crate::models::{FilterMode, Item, SortMode, ViewRow};

const DAY_MS: i64 = 86_400_000;

/// Whole days from `now` until `expires_at`, rounded up
pub fn days_until(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let ms = (expires_at - now).num_milliseconds();
    let days = ms.div_euclid(DAY_MS);
    if ms.rem_euclid(DAY_MS) != 0 {
        days + 1
    } else {
        days
    }
}

/// Build the displayed rows. Pure: the stored order is never touched.
pub fn derive_rows(items: &[Item], now: DateTime<Utc>, filter: FilterMode, sort: SortMode) -> Vec<ViewRow> {
    let mut rows: Vec<ViewRow> = items
        .iter()
        .enumerate()
        .map(|(index, item)| ViewRow {
            item: item.clone(),
            index,
            diff_days: days_until(item.expires_at(), now),
        })
        .filter(|row| keep(filter, row.diff_days))
        .collect();

    // Stable sorts, ties keep insertion order. Text keys are lowercased once per row.
    match sort {
        SortMode::None => {}
        SortMode::Name => rows.sort_by_cached_key(|row| row.item.name.to_lowercase()),
        SortMode::Date => rows.sort_by_key(|row| row.item.date),
        SortMode::Department => rows.sort_by_cached_key(|row| row.item.department.to_lowercase()),
    }
    rows
}

fn keep(filter: FilterMode, diff_days: i64) -> bool {
    match filter {
        FilterMode::All => true,
        FilterMode::Soon => (0..=SOON_WINDOW_DAYS).contains(&diff_days),
        FilterMode::Expired => diff_days < 0,
        FilterMode::Safe => diff_days > SOON_WINDOW_DAYS,
    }
}
