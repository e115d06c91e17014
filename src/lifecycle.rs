//! Lifecycle Engine
//!
//! Moves expired items from the active collection into the archive.

use chrono::{DateTime, Utc};

use crate::config::{ARCHIVE_KEY, ITEMS_KEY};
use crate::models::{ArchivedItem, Item};
use crate::storage::{self, KeyValueStore};

/// Result of one lifecycle pass
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Items not yet expired, insertion order kept
    pub active: Vec<Item>,
    /// Previous archive followed by the items expired in this pass
    pub archive: Vec<ArchivedItem>,
    /// How many items this pass archived
    pub archived_now: usize,
}

/// Partition `items` at `now`: anything whose expiry is strictly before `now`
/// is appended to `archive` in encounter order.
pub fn tick(items: Vec<Item>, mut archive: Vec<ArchivedItem>, now: DateTime<Utc>) -> TickOutcome {
    let before = archive.len();
    let mut active = Vec::with_capacity(items.len());
    for item in items {
        if item.is_expired(now) {
            archive.push(item);
        } else {
            active.push(item);
        }
    }
    let archived_now = archive.len() - before;
    TickOutcome { active, archive, archived_now }
}

/// Load both collections, run a pass, and write both back.
///
/// Both keys are always rewritten, even when nothing expired.
pub fn run(store: &impl KeyValueStore, now: DateTime<Utc>) -> crate::error::AppResult<TickOutcome> {
    let items: Vec<Item> = storage::load(store, ITEMS_KEY)?;
    let archive: Vec<ArchivedItem> = storage::load(store, ARCHIVE_KEY)?;

    let outcome = tick(items, archive, now);
    storage::save(store, ARCHIVE_KEY, &outcome.archive)?;
    storage::save(store, ITEMS_KEY, &outcome.active)?;

    if outcome.archived_now > 0 {
        log::info!("archived {} expired item(s)", outcome.archived_now);
    }
    Ok(outcome)
}
