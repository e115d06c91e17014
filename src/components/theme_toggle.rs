//! Theme Toggle Component

use leptos::prelude::*;

use crate::commands;
use crate::models::Theme;
use crate::store::{store_set_error, use_app_store, AppStateStoreFields};

/// Switches between light and dark and remembers the choice
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let toggle = move |_| {
        let theme = store.theme().get().toggled();
        store.theme().set(theme);
        let result = commands::apply_theme(theme).and_then(|()| commands::with_local(|local| commands::save_theme(local, theme)));
        if let Err(e) = result {
            store_set_error(&store, &e);
        }
    };

    view! {
        <button id="toggleDarkMode" class="theme-toggle" on:click=toggle>
            {move || if store.theme().get() == Theme::Dark { "☀️ Light" } else { "🌙 Dark" }}
        </button>
    }
}
