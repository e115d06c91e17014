//! Theme Commands

use crate::config::THEME_KEY;
use crate::error::{AppError, AppResult};
use crate::models::Theme;
use crate::storage::KeyValueStore;

pub fn load_theme(store: &impl KeyValueStore) -> AppResult<Theme> {
    Ok(store.get(THEME_KEY)?.map(|s| Theme::from_str(&s)).unwrap_or_default())
}

pub fn save_theme(store: &impl KeyValueStore, theme: Theme) -> AppResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

/// Toggle the `dark` class on `<body>`
pub fn apply_theme(theme: Theme) -> AppResult<()> {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .ok_or_else(|| AppError::Browser("no document body".to_string()))?;
    body.class_list()
        .toggle_with_force("dark", theme == Theme::Dark)
        .map_err(AppError::browser)?;
    Ok(())
}
