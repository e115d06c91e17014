//! Banner Component
//!
//! Shows the latest error or confirmation until dismissed.

use leptos::prelude::*;

use crate::store::{store_clear_banner, use_app_store, AppStateStoreFields};

#[component]
pub fn Banner() -> impl IntoView {
    let store = use_app_store();

    let message = move || {
        store
            .error()
            .get()
            .map(|e| ("banner error", e))
            .or_else(|| store.notice().get().map(|n| ("banner notice", n)))
    };

    view! {
        {move || message().map(|(class, text)| view! {
            <div class=class role="alert">
                <span>{text}</span>
                <button class="banner-close" on:click=move |_| store_clear_banner(&store)>"×"</button>
            </div>
        })}
    }
}
