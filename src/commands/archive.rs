//! Archive Commands

use crate::config::ARCHIVE_KEY;
use crate::error::AppResult;
use crate::storage::KeyValueStore;

/// Drop the whole archive
pub fn clear_archive(store: &impl KeyValueStore) -> AppResult<()> {
    store.remove(ARCHIVE_KEY)?;
    log::info!("archive cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArchivedItem, Item};
    use crate::storage::{self, MemoryStore};
    use chrono::NaiveDate;

    #[test]
    fn test_clear_archive() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        storage::save(&store, ARCHIVE_KEY, &[Item::new("Dairy", "Milk", date)]).unwrap();
        let archived: Vec<ArchivedItem> = storage::load(&store, ARCHIVE_KEY).unwrap();
        assert_eq!(archived.len(), 1);

        clear_archive(&store).unwrap();
        assert!(store.raw(ARCHIVE_KEY).is_none());
        let archived: Vec<ArchivedItem> = storage::load(&store, ARCHIVE_KEY).unwrap();
        assert!(archived.is_empty());
    }
}
