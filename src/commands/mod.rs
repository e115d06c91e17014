//! Storage Commands
//!
//! Operations on the persisted collections, organized by domain.
//! Each command takes the key-value store it works on.

mod item;
mod archive;
mod files;
mod theme;
mod refresh;

use crate::error::AppResult;
use crate::storage::LocalStore;

// Re-export all public items
pub use item::*;
pub use archive::*;
pub use files::*;
pub use theme::*;
pub use refresh::*;

/// Run a command against `window.localStorage`
pub fn with_local<T>(f: impl FnOnce(&LocalStore) -> AppResult<T>) -> AppResult<T> {
    let store = LocalStore::open()?;
    f(&store)
}
