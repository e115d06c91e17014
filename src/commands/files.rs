//! File Commands
//!
//! JSON export/import of the active collection.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

use gloo_timers::callback::Timeout;

use crate::config::{EXPORT_FILE_NAME, EXPORT_URL_REVOKE_DELAY_MS, ITEMS_KEY};
use crate::error::{AppError, AppResult};
use crate::models::Item;
use crate::storage::{self, KeyValueStore};

/// Pretty-printed JSON array of the active items
pub fn export_json(store: &impl KeyValueStore) -> AppResult<String> {
    let items: Vec<Item> = storage::load(store, ITEMS_KEY)?;
    serde_json::to_string_pretty(&items).map_err(AppError::Serialize)
}

/// Parse an exported file; every entry must be a complete item with a valid date
pub fn parse_import(text: &str) -> AppResult<Vec<Item>> {
    serde_json::from_str(text).map_err(AppError::Import)
}

/// Replace the active collection with the contents of `text`.
///
/// Nothing is written unless the whole file parses.
pub fn import_json(store: &impl KeyValueStore, text: &str) -> AppResult<usize> {
    let items = parse_import(text)?;
    storage::save(store, ITEMS_KEY, &items)?;
    log::info!("imported {} item(s)", items.len());
    Ok(items.len())
}

/// Offer the active collection as a file download
pub fn download_export(store: &impl KeyValueStore) -> AppResult<()> {
    let json = export_json(store)?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(AppError::browser)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(AppError::browser)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Browser("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(AppError::browser)?
        .dyn_into()
        .map_err(|_| AppError::Browser("anchor element expected".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILE_NAME);
    anchor.click();

    // The download reads the blob after click() returns
    Timeout::new(EXPORT_URL_REVOKE_DELAY_MS, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("could not revoke export url: {:?}", e);
        }
    })
    .forget();
    log::info!("exported {}", EXPORT_FILE_NAME);
    Ok(())
}

/// Read a user-selected file as text
pub async fn read_text(file: &File) -> AppResult<String> {
    let text = JsFuture::from(file.text()).await.map_err(AppError::browser)?;
    text.as_string()
        .ok_or_else(|| AppError::Browser(format!("could not read '{}' as text", file.name())))
}
