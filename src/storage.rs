//! Persistence Adapter
//!
//! Whole-collection JSON persistence over a key-value string store.
//! The browser backend is `localStorage`; tests use an in-memory map.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Key-value string storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// `window.localStorage`
#[derive(Clone)]
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> AppResult<Self> {
        let window = web_sys::window().ok_or(AppError::StorageUnavailable)?;
        let storage = window
            .local_storage()
            .map_err(AppError::storage)?
            .ok_or(AppError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.storage.get_item(key).map_err(AppError::storage)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage.set_item(key, value).map_err(AppError::storage)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.storage.remove_item(key).map_err(AppError::storage)
    }
}

/// Load a collection; an absent key is an empty collection
pub fn load<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> AppResult<Vec<T>> {
    match store.get(key)? {
        None => Ok(Vec::new()),
        Some(text) => serde_json::from_str(&text).map_err(|source| AppError::Corrupt {
            key: key.to_string(),
            source,
        }),
    }
}

/// Overwrite a collection wholesale
pub fn save<T: Serialize>(store: &impl KeyValueStore, key: &str, values: &[T]) -> AppResult<()> {
    let text = serde_json::to_string(values).map_err(AppError::Serialize)?;
    store.set(key, &text)
}

#[cfg(test)]
pub use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ITEMS_KEY;
    use crate::models::Item;
    use chrono::NaiveDate;

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = MemoryStore::new();
        let items: Vec<Item> = load(&store, ITEMS_KEY).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2026, 10, 30).unwrap();
        let items = vec![Item::new("Dairy", "Milk", date), Item::new("Bakery", "Bread", date)];
        save(&store, ITEMS_KEY, &items).unwrap();

        let loaded: Vec<Item> = load(&store, ITEMS_KEY).unwrap();
        assert_eq!(loaded, items);
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2026, 10, 30).unwrap();
        save(&store, ITEMS_KEY, &[Item::new("Dairy", "Milk", date)]).unwrap();
        save::<Item>(&store, ITEMS_KEY, &[]).unwrap();
        assert_eq!(store.raw(ITEMS_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_corrupt_json() {
        let store = MemoryStore::new();
        store.set(ITEMS_KEY, "[{\"name\":").unwrap();
        let result: AppResult<Vec<Item>> = load(&store, ITEMS_KEY);
        match result {
            Err(AppError::Corrupt { key, .. }) => assert_eq!(key, ITEMS_KEY),
            other => panic!("expected Corrupt, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_invalid_date() {
        let store = MemoryStore::new();
        store
            .set(ITEMS_KEY, r#"[{"department":"Dairy","name":"Milk","date":"not-a-date","notified":false}]"#)
            .unwrap();
        let result: AppResult<Vec<Item>> = load(&store, ITEMS_KEY);
        assert!(matches!(result, Err(AppError::Corrupt { .. })));
    }
}
