//! Item List Component
//!
//! The derived rows with rescan and delete actions.

use leptos::prelude::*;

use crate::commands;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::ViewRow;
use crate::store::{store_set_error, use_app_store, AppStateStoreFields};

/// Expiry cell: the date, plus a warning badge inside the soon window
fn expiry_label(row: &ViewRow) -> (String, Option<String>) {
    let date = row.item.date.format("%Y-%m-%d").to_string();
    let badge = row.is_soon().then(|| format!("⚠️{}d", row.diff_days));
    (date, badge)
}

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let delete = move |index: usize| {
        match commands::with_local(|local| commands::delete_item(local, index)) {
            Ok(_) => ctx.reload(),
            Err(e) => store_set_error(&store, &e),
        }
    };

    view! {
        <div class="item-list">
            <Show
                when=move || !store.rows().get().is_empty()
                fallback=|| view! { <p class="empty">"No items to show"</p> }
            >
                <div class="header">
                    <div>"Dept"</div>
                    <div>"Item"</div>
                    <div>"Expiry"</div>
                    <div>"Scan"</div>
                    <div>"Delete"</div>
                </div>
            </Show>
            <For
                each=move || store.rows().get()
                key=|row| (row.index, row.item.clone(), row.diff_days)
                children=move |row| {
                    let index = row.index;
                    let (date, badge) = expiry_label(&row);
                    view! {
                        <div class="item">
                            <div>{row.item.department.clone()}</div>
                            <div>{row.item.name.clone()}</div>
                            <div>
                                {date}
                                {badge.map(|b| view! { " " <span class="alert">{b}</span> })}
                            </div>
                            <div>
                                <button
                                    class="scan-btn"
                                    title="Scan barcode as name"
                                    on:click=move |_| store.scanning().set(Some(index))
                                >
                                    "📷"
                                </button>
                            </div>
                            <div>
                                <DeleteConfirmButton on_confirm=Callback::new(move |_| delete(index)) />
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use chrono::NaiveDate;

    fn row(diff_days: i64) -> ViewRow {
        ViewRow {
            item: Item::new("Dairy", "Milk", NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()),
            index: 0,
            diff_days,
        }
    }

    #[test]
    fn test_expiry_label_badge_only_when_soon() {
        assert_eq!(expiry_label(&row(3)), ("2026-10-22".to_string(), Some("⚠️3d".to_string())));
        assert_eq!(expiry_label(&row(0)).1, Some("⚠️0d".to_string()));
        assert_eq!(expiry_label(&row(8)).1, None);
        assert_eq!(expiry_label(&row(-1)).1, None);
    }
}
