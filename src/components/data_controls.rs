//! Data Controls Component
//!
//! Export, import and archive clearing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_set_error, store_set_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn DataControls() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let export = move |_| {
        if let Err(e) = commands::with_local(|local| commands::download_export(local)) {
            store_set_error(&store, &e);
        }
    };

    let import = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow re-importing the same file
        input.set_value("");

        spawn_local(async move {
            let result = match commands::read_text(&file).await {
                Ok(text) => commands::with_local(|local| commands::import_json(local, &text)),
                Err(e) => Err(e),
            };
            match result {
                Ok(count) => {
                    store_set_notice(&store, format!("Imported {} item(s)", count));
                    ctx.reload();
                }
                Err(e) => store_set_error(&store, &e),
            }
        });
    };

    let clear_archive = move |_| match commands::with_local(|local| commands::clear_archive(local)) {
        Ok(()) => {
            store.archived().set(0);
            store_set_notice(&store, "Archive cleared");
        }
        Err(e) => store_set_error(&store, &e),
    };

    view! {
        <div class="data-controls">
            <button id="exportBtn" on:click=export>"Export"</button>
            <label class="import-btn">
                "Import"
                <input id="importFile" type="file" accept="application/json,.json" on:change=import />
            </label>
            <button id="clearArchive" on:click=clear_archive>
                {move || format!("Clear archive ({})", store.archived().get())}
            </button>
        </div>
    }
}
