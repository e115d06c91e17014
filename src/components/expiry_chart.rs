//! Expiry Chart Component
//!
//! Redraws the upcoming-expiry bar chart whenever the rows change.

use chrono::Utc;
use leptos::html::Canvas;
use leptos::prelude::*;

use crate::chart::{project, ChartHandle};
use crate::config::CHART_CANVAS_ID;
use crate::store::{store_set_error, use_app_store, AppStateStoreFields};

#[component]
pub fn ExpiryChart() -> impl IntoView {
    let store = use_app_store();
    let canvas_ref = NodeRef::<Canvas>::new();
    let handle = StoredValue::new_local(ChartHandle::default());

    Effect::new(move |_| {
        let rows = store.rows().get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let projection = project(&rows, Utc::now());
        let result = handle.try_update_value(|chart| chart.draw(&canvas, &projection));
        if let Some(Err(e)) = result {
            store_set_error(&store, &e);
        }
    });

    on_cleanup(move || {
        handle.try_update_value(|chart| chart.destroy());
    });

    view! {
        <div class="chart-container">
            <canvas id=CHART_CANVAS_ID node_ref=canvas_ref></canvas>
        </div>
    }
}
