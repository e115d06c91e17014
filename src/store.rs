//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::Snapshot;
use crate::error::AppError;
use crate::models::{FilterMode, SortMode, Theme, ViewRow};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows of the current view, already filtered and sorted
    pub rows: Vec<ViewRow>,
    /// Name autocomplete options
    pub suggestions: Vec<String>,
    /// Number of archived items
    pub archived: usize,
    pub filter: FilterMode,
    pub sort: SortMode,
    pub theme: Theme,
    /// Active collection index currently being rescanned
    pub scanning: Option<usize>,
    /// Last error shown in the banner
    pub error: Option<String>,
    /// Last confirmation shown in the banner
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Publish the result of a refresh cycle
pub fn store_apply_snapshot(store: &AppStore, snapshot: Snapshot) {
    store.rows().set(snapshot.rows);
    store.suggestions().set(snapshot.suggestions);
    store.archived().set(snapshot.archived);
}

/// Log an error and show it in the banner
pub fn store_set_error(store: &AppStore, err: &AppError) {
    log::error!("{}", err);
    store.notice().set(None);
    store.error().set(Some(err.to_string()));
}

/// Show a confirmation in the banner
pub fn store_set_notice(store: &AppStore, notice: impl Into<String>) {
    store.error().set(None);
    store.notice().set(Some(notice.into()));
}

/// Dismiss the banner
pub fn store_clear_banner(store: &AppStore) {
    store.error().set(None);
    store.notice().set(None);
}
