//! Refresh Cycle
//!
//! Store → lifecycle pass → derived rows → notifications → store.

use chrono::{DateTime, Utc};

use super::item::{save_items, suggestions};
use crate::error::AppResult;
use crate::lifecycle;
use crate::models::{FilterMode, SortMode, ViewRow};
use crate::notify::{self, Notifier};
use crate::storage::KeyValueStore;
use crate::view;

/// Everything the UI shows after one refresh
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub rows: Vec<ViewRow>,
    /// Size of the archive after this pass
    pub archived: usize,
    pub suggestions: Vec<String>,
}

/// Run one full cycle at `now`.
///
/// A load failure returns before anything is written back.
pub fn refresh(
    store: &impl KeyValueStore,
    now: DateTime<Utc>,
    filter: FilterMode,
    sort: SortMode,
    notifier: &impl Notifier,
) -> AppResult<Snapshot> {
    let outcome = lifecycle::run(store, now)?;
    let mut items = outcome.active;

    let mut rows = view::derive_rows(&items, now, filter, sort);
    let marked = notify::notify_and_mark(&mut items, &rows, notifier);
    if marked > 0 {
        save_items(store, &items)?;
        for row in &mut rows {
            row.item.notified = items[row.index].notified;
        }
    }

    log::debug!(
        "refresh: {} active, {} shown, {} archived, {} notified",
        items.len(),
        rows.len(),
        outcome.archive.len(),
        marked
    );

    Ok(Snapshot {
        rows,
        archived: outcome.archive.len(),
        suggestions: suggestions(&items),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list_items;
    use crate::config::{ARCHIVE_KEY, ITEMS_KEY};
    use crate::error::AppError;
    use crate::models::Item;
    use crate::storage::{self, MemoryStore};
    use chrono::{Duration, TimeZone};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, name: &str, days: i64) {
            self.sent.borrow_mut().push(notify::message(name, days));
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn item_in(name: &str, days: i64) -> Item {
        Item::new("Dairy", name, now().date_naive() + Duration::days(days))
    }

    #[test]
    fn test_full_cycle() {
        let store = MemoryStore::new();
        storage::save(&store, ITEMS_KEY, &[item_in("Yogurt", -2), item_in("Milk", 1), item_in("Rice", 60), item_in("Milk", 20)])
            .unwrap();
        let notifier = RecordingNotifier::default();

        let snapshot = refresh(&store, now(), FilterMode::All, SortMode::Date, &notifier).unwrap();

        assert_eq!(snapshot.archived, 1);
        assert_eq!(
            snapshot.rows.iter().map(|r| (r.item.name.as_str(), r.diff_days)).collect::<Vec<_>>(),
            vec![("Milk", 1), ("Milk", 20), ("Rice", 60)]
        );
        assert!(snapshot.rows[0].item.notified);
        assert_eq!(snapshot.suggestions, vec!["Milk", "Rice"]);
        assert_eq!(*notifier.sent.borrow(), vec!["Milk expires in 1 day!".to_string()]);

        let stored = list_items(&store).unwrap();
        assert_eq!(stored.iter().map(|i| i.notified).collect::<Vec<_>>(), vec![true, false, false]);
        let archive: Vec<Item> = storage::load(&store, ARCHIVE_KEY).unwrap();
        assert_eq!(archive, vec![item_in("Yogurt", -2)]);
    }

    #[test]
    fn test_repeat_cycle_does_not_renotify() {
        let store = MemoryStore::new();
        storage::save(&store, ITEMS_KEY, &[item_in("Milk", 4)]).unwrap();
        let notifier = RecordingNotifier::default();

        refresh(&store, now(), FilterMode::All, SortMode::None, &notifier).unwrap();
        refresh(&store, now() + Duration::hours(6), FilterMode::Soon, SortMode::Name, &notifier).unwrap();
        assert_eq!(notifier.sent.borrow().len(), 1);
    }

    #[test]
    fn test_corrupt_store_is_not_overwritten() {
        let store = MemoryStore::new();
        store.set(ITEMS_KEY, "{broken").unwrap();
        let notifier = RecordingNotifier::default();

        let result = refresh(&store, now(), FilterMode::All, SortMode::None, &notifier);
        assert!(matches!(result, Err(AppError::Corrupt { .. })));
        assert_eq!(store.raw(ITEMS_KEY).as_deref(), Some("{broken"));
        assert!(store.raw(ARCHIVE_KEY).is_none());
    }
}
