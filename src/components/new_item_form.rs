//! New Item Form Component
//!
//! Department, name and expiration date for a new item.

use chrono::{Duration, Utc};
use leptos::prelude::*;

use crate::commands;
use crate::config::DEPARTMENTS;
use crate::context::use_app_context;
use crate::models::Item;
use crate::store::{store_clear_banner, store_set_error, use_app_store, AppStateStoreFields};

/// Tomorrow in `YYYY-MM-DD`, the default expiration date
fn tomorrow() -> String {
    (Utc::now() + Duration::days(1)).format("%Y-%m-%d").to_string()
}

/// Earliest date the picker accepts
fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Form for adding items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (department, set_department) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (date, set_date) = signal(tomorrow());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = Item::from_form(&department.get(), &name.get(), &date.get())
            .and_then(|item| commands::with_local(|local| commands::create_item(local, item)));
        match result {
            Ok(()) => {
                set_department.set(String::new());
                set_name.set(String::new());
                set_date.set(tomorrow());
                store_clear_banner(&store);
                ctx.reload();
            }
            Err(e) => store_set_error(&store, &e),
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <select
                name="department"
                prop:value=move || department.get()
                on:change=move |ev| set_department.set(event_target_value(&ev))
            >
                <option value="">"Department"</option>
                {DEPARTMENTS.iter().map(|(value, label)| view! {
                    <option value=*value>{*label}</option>
                }).collect_view()}
            </select>
            <input
                type="text"
                name="itemName"
                list="suggestions"
                placeholder="Item name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <datalist id="suggestions">
                <For
                    each=move || store.suggestions().get()
                    key=|n| n.clone()
                    children=move |n| view! { <option value=n /> }
                />
            </datalist>
            <input
                type="date"
                name="expirationDate"
                min=today
                prop:value=move || date.get()
                on:input=move |ev| set_date.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
