//! Expiry Chart
//!
//! Buckets upcoming expiries per day and draws them with the Chart.js global.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::config::CHART_DAYS_AHEAD;
use crate::error::{AppError, AppResult};
use crate::models::ViewRow;
use crate::view::days_until;

/// Bar color category by distance from today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Today or earlier
    A,
    /// 1 to 4 days out
    B,
    /// 5 to 7 days out
    C,
    /// 8 or more days out
    D,
}

impl Band {
    pub fn for_days(diff: i64) -> Self {
        if diff >= 8 {
            Band::D
        } else if diff >= 5 {
            Band::C
        } else if diff >= 1 {
            Band::B
        } else {
            Band::A
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Band::A => "#ccc",
            Band::B => "red",
            Band::C => "orange",
            Band::D => "pink",
        }
    }
}

/// Per-day expiry counts for today and the following days
#[derive(Debug, Clone, PartialEq)]
pub struct ChartProjection {
    pub labels: Vec<NaiveDate>,
    pub values: Vec<u32>,
    pub colors: Vec<Band>,
}

/// Count `rows` into one bucket per day from today (UTC) through `CHART_DAYS_AHEAD` days later.
pub fn project(rows: &[ViewRow], now: DateTime<Utc>) -> ChartProjection {
    let today = now.date_naive();
    let labels: Vec<NaiveDate> = (0..=CHART_DAYS_AHEAD).map(|i| today + Duration::days(i)).collect();
    let mut values = vec![0u32; labels.len()];

    for row in rows.iter().filter(|r| (0..=CHART_DAYS_AHEAD).contains(&r.diff_days)) {
        let offset = (row.item.date - today).num_days();
        if let Some(slot) = usize::try_from(offset).ok().and_then(|i| values.get_mut(i)) {
            *slot += 1;
        }
    }

    let colors = labels
        .iter()
        .map(|label| Band::for_days(days_until(label.and_time(NaiveTime::MIN).and_utc(), now)))
        .collect();

    ChartProjection { labels, values, colors }
}

#[derive(Serialize)]
struct ChartConfig<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    data: serde_json::Value,
    options: serde_json::Value,
}

impl ChartProjection {
    fn config(&self) -> ChartConfig<'static> {
        let labels: Vec<String> = self.labels.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
        let colors: Vec<&str> = self.colors.iter().map(Band::color).collect();
        ChartConfig {
            kind: "bar",
            data: serde_json::json!({
                "labels": labels,
                "datasets": [{
                    "label": "Expiring Items",
                    "data": self.values,
                    "backgroundColor": colors,
                }]
            }),
            options: serde_json::json!({
                "responsive": true,
                "scales": {
                    "y": { "beginAtZero": true, "ticks": { "stepSize": 1 } },
                    "x": { "title": { "display": true, "text": "Expiry Date" } }
                },
                "plugins": { "legend": { "display": false } }
            }),
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &ChartJs);
}

/// Owns the live chart; each draw replaces the previous one
#[derive(Default)]
pub struct ChartHandle {
    chart: Option<ChartJs>,
}

impl ChartHandle {
    pub fn draw(&mut self, canvas: &HtmlCanvasElement, projection: &ChartProjection) -> AppResult<()> {
        self.destroy();
        let config = projection
            .config()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| AppError::Browser(e.to_string()))?;
        let chart = ChartJs::new(canvas, &config).map_err(AppError::browser)?;
        self.chart = Some(chart);
        Ok(())
    }

    pub fn destroy(&mut self) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterMode, Item, SortMode};
    use crate::view::derive_rows;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn rows_for(days: &[i64]) -> Vec<ViewRow> {
        let today = now().date_naive();
        let items: Vec<Item> = days
            .iter()
            .map(|d| Item::new("Dairy", format!("Item {}", d), today + Duration::days(*d)))
            .collect();
        derive_rows(&items, now(), FilterMode::All, SortMode::None)
    }

    #[test]
    fn test_single_item_two_days_out() {
        let projection = project(&rows_for(&[2]), now());
        assert_eq!(projection.labels.len(), 11);
        assert_eq!(projection.values.len(), 11);
        assert_eq!(projection.labels[0], now().date_naive());
        assert_eq!(projection.labels[2], now().date_naive() + Duration::days(2));
        assert_eq!(projection.values[2], 1);
        assert_eq!(projection.values.iter().sum::<u32>(), 1);
    }

    #[test]
    fn test_counts_and_out_of_window_rows() {
        let projection = project(&rows_for(&[0, 3, 3, 10, 11, -1, 40]), now());
        assert_eq!(projection.values[0], 1);
        assert_eq!(projection.values[3], 2);
        assert_eq!(projection.values[10], 1);
        assert_eq!(projection.values.iter().sum::<u32>(), 4);
    }

    #[test]
    fn test_empty_rows_zero_filled() {
        let projection = project(&[], now());
        assert_eq!(projection.values, vec![0; 11]);
    }

    #[test]
    fn test_band_per_bucket() {
        let projection = project(&[], now());
        use Band::*;
        assert_eq!(projection.colors, vec![A, B, B, B, B, C, C, C, D, D, D]);
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(Band::for_days(-3).color(), "#ccc");
        assert_eq!(Band::for_days(1).color(), "red");
        assert_eq!(Band::for_days(5).color(), "orange");
        assert_eq!(Band::for_days(8).color(), "pink");
    }

    #[test]
    fn test_config_shape() {
        let config = project(&rows_for(&[1]), now()).config();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"][0], "2026-10-19");
        assert_eq!(value["data"]["datasets"][0]["data"][1], 1);
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"][0], "#ccc");
        assert_eq!(value["options"]["plugins"]["legend"]["display"], false);
    }
}
