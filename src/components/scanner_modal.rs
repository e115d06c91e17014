//! Scanner Modal Component
//!
//! Camera overlay that replaces an item's name with a scanned barcode.

use leptos::prelude::*;

use crate::commands;
use crate::context::use_app_context;
use crate::scanner::Scanner;
use crate::store::{store_set_error, use_app_store, AppStateStoreFields};

#[component]
pub fn ScannerModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let scanner = StoredValue::new_local(Scanner::default());
    let (detected, set_detected) = signal::<Option<String>>(None);

    let close = move || {
        scanner.update_value(|s| s.stop());
        set_detected.set(None);
        store.scanning().set(None);
    };

    // Start a session when a row asks for one
    Effect::new(move |_| {
        if store.scanning().get().is_none() {
            return;
        }
        let result = scanner.try_update_value(|s| {
            s.start(move |code| {
                // Stopping happens in the effect below, outside the detection callback
                if detected.get_untracked().is_none() {
                    set_detected.set(Some(code));
                }
            })
        });
        if let Some(Err(e)) = result {
            store_set_error(&store, &e);
            close();
        }
    });

    // First detected code wins
    Effect::new(move |_| {
        let Some(code) = detected.get() else {
            return;
        };
        let Some(index) = store.scanning().get_untracked() else {
            return;
        };
        match commands::with_local(|local| commands::rename_item(local, index, &code)) {
            Ok(()) => ctx.reload(),
            Err(e) => store_set_error(&store, &e),
        }
        close();
    });

    on_cleanup(move || {
        scanner.try_update_value(|s| s.stop());
    });

    view! {
        <div class="scanner-modal" style:display=move || if store.scanning().get().is_some() { "block" } else { "none" }>
            <div id="scanner"></div>
            <button class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
        </div>
    }
}
