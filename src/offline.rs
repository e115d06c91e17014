//! Offline Cache Registration
//!
//! Registers the cache-first service worker shipped next to `index.html`.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::config::SERVICE_WORKER_PATH;

pub async fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        log::info!("service workers unsupported, running without offline cache");
        return;
    }

    let registration = navigator.service_worker().register(SERVICE_WORKER_PATH);
    match JsFuture::from(registration).await {
        Ok(_) => log::info!("service worker registered"),
        Err(e) => log::warn!("service worker registration failed: {:?}", e),
    }
}
