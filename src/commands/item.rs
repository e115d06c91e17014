//! Item Commands
//!
//! Add, delete and rename items in the active collection.

use crate::config::ITEMS_KEY;
use crate::error::{AppError, AppResult};
use crate::models::Item;
use crate::storage::{self, KeyValueStore};

pub fn list_items(store: &impl KeyValueStore) -> AppResult<Vec<Item>> {
    storage::load(store, ITEMS_KEY)
}

pub fn save_items(store: &impl KeyValueStore, items: &[Item]) -> AppResult<()> {
    storage::save(store, ITEMS_KEY, items)
}

/// Append a new item at the end of the active collection
pub fn create_item(store: &impl KeyValueStore, item: Item) -> AppResult<()> {
    let mut items = list_items(store)?;
    log::info!("adding '{}' ({}) expiring {}", item.name, item.department, item.date);
    items.push(item);
    save_items(store, &items)
}

/// Remove the item at `index`; returns it, or `None` if the index is stale
pub fn delete_item(store: &impl KeyValueStore, index: usize) -> AppResult<Option<Item>> {
    let mut items = list_items(store)?;
    if index >= items.len() {
        log::warn!("delete: no item at position {}", index);
        return Ok(None);
    }
    let removed = items.remove(index);
    save_items(store, &items)?;
    log::info!("deleted '{}'", removed.name);
    Ok(Some(removed))
}

/// Replace the name of the item at `index` (used by the barcode scanner)
pub fn rename_item(store: &impl KeyValueStore, index: usize, name: &str) -> AppResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidInput("item name is required".to_string()));
    }
    let mut items = list_items(store)?;
    let item = items
        .get_mut(index)
        .ok_or_else(|| AppError::InvalidInput(format!("no item at position {}", index)))?;
    log::info!("renaming '{}' to '{}'", item.name, name);
    item.name = name.to_string();
    save_items(store, &items)
}

/// Distinct names in first-seen order, for the name autocomplete
pub fn suggestions(items: &[Item]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for item in items {
        if !names.contains(&item.name) {
            names.push(item.name.clone());
        }
    }
    names
}
