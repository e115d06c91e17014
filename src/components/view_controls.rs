//! View Controls Component
//!
//! Filter and sort selectors. Changing either rebuilds the view.

use leptos::prelude::*;

use crate::models::{FilterMode, SortMode};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ViewControls() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="view-controls">
            <label>
                "Filter "
                <select
                    id="filterBy"
                    prop:value=move || store.filter().get().as_str()
                    on:change=move |ev| store.filter().set(FilterMode::from_str(&event_target_value(&ev)))
                >
                    {FilterMode::ALL.iter().map(|mode| view! {
                        <option value=mode.as_str()>{mode.label()}</option>
                    }).collect_view()}
                </select>
            </label>
            <label>
                "Sort "
                <select
                    id="sortBy"
                    prop:value=move || store.sort().get().as_str()
                    on:change=move |ev| store.sort().set(SortMode::from_str(&event_target_value(&ev)))
                >
                    {SortMode::ALL.iter().map(|mode| view! {
                        <option value=mode.as_str()>{mode.label()}</option>
                    }).collect_view()}
                </select>
            </label>
        </div>
    }
}
