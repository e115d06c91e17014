//! Shelf Life App
//!
//! Root component: owns the store and runs the refresh cycle.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{Banner, DataControls, ExpiryChart, ItemList, NewItemForm, ScannerModal, ThemeToggle, ViewControls};
use crate::context::AppContext;
use crate::models::Theme;
use crate::notify::{self, BrowserNotifier};
use crate::offline;
use crate::store::{store_apply_snapshot, store_set_error, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let theme = match commands::with_local(|local| commands::load_theme(local)) {
        Ok(theme) => theme,
        Err(e) => {
            log::warn!("theme not loaded: {}", e);
            Theme::default()
        }
    };
    if let Err(e) = commands::apply_theme(theme) {
        log::warn!("theme not applied: {}", e);
    }

    let store = Store::new(AppState::new(theme));
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    spawn_local(offline::register_service_worker());
    spawn_local(notify::request_permission());

    // Refresh cycle: runs on start, on every data change, and on filter/sort changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let filter = store.filter().get();
        let sort = store.sort().get();
        log::debug!("refresh #{} filter={} sort={}", trigger, filter.as_str(), sort.as_str());

        let result = commands::with_local(|local| commands::refresh(local, Utc::now(), filter, sort, &BrowserNotifier));
        match result {
            Ok(snapshot) => store_apply_snapshot(&store, snapshot),
            Err(e) => store_set_error(&store, &e),
        }
    });

    view! {
        <main class="app-layout">
            <header class="app-header">
                <h1>"Shelf Life"</h1>
                <ThemeToggle />
            </header>

            <Banner />

            <NewItemForm />

            <section class="toolbar">
                <ViewControls />
                <DataControls />
            </section>

            <ItemList />

            <ExpiryChart />

            <ScannerModal />
        </main>
    }
}
