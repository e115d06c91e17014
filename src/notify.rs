//! Expiry Notifications
//!
//! Fires one platform notification per item the first time it shows up
//! within the warning window of a derived view.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationPermission};

use crate::models::{Item, ViewRow};

/// Receives "expires soon" events
pub trait Notifier {
    fn notify(&self, name: &str, days: i64);
}

/// Browser `Notification` API; silent unless permission was granted
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, name: &str, days: i64) {
        if !supported() || Notification::permission() != NotificationPermission::Granted {
            log::debug!("notification for '{}' skipped: permission not granted", name);
            return;
        }
        if let Err(e) = Notification::new(&message(name, days)) {
            log::warn!("notification for '{}' failed: {:?}", name, e);
        }
    }
}

/// Notification text, e.g. "Milk expires in 3 days!"
pub fn message(name: &str, days: i64) -> String {
    let unit = if days == 1 { "day" } else { "days" };
    format!("{} expires in {} {}!", name, days, unit)
}

/// Notify every soon-expiring, not yet notified row and mark its source item.
///
/// Returns how many items were marked; the caller persists `items` when non-zero.
pub fn notify_and_mark(items: &mut [Item], rows: &[ViewRow], notifier: &impl Notifier) -> usize {
    let mut marked = 0;
    for row in rows.iter().filter(|row| row.is_soon()) {
        let Some(item) = items.get_mut(row.index) else {
            continue;
        };
        if item.notified {
            continue;
        }
        notifier.notify(&item.name, row.diff_days);
        item.notified = true;
        marked += 1;
    }
    marked
}

/// Ask for notification permission once; the answer is read on each notify
pub async fn request_permission() {
    if !supported() {
        log::info!("notifications unsupported");
        return;
    }
    if Notification::permission() != NotificationPermission::Default {
        return;
    }
    match Notification::request_permission() {
        Ok(promise) => {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("notification permission request failed: {:?}", e);
            }
        }
        Err(e) => log::warn!("notification permission request failed: {:?}", e),
    }
}

/// The `Notification` global exists
fn supported() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("Notification")).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterMode, SortMode};
    use crate::view::derive_rows;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: RefCell<Vec<(String, i64)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, name: &str, days: i64) {
            self.sent.borrow_mut().push((name.to_string(), days));
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap()
    }

    fn item_in(name: &str, days: i64) -> Item {
        Item::new("Dairy", name, now().date_naive() + Duration::days(days))
    }

    #[test]
    fn test_message_plural() {
        assert_eq!(message("Milk", 1), "Milk expires in 1 day!");
        assert_eq!(message("Milk", 3), "Milk expires in 3 days!");
        assert_eq!(message("Milk", 0), "Milk expires in 0 days!");
    }

    #[test]
    fn test_notifies_soon_items_once() {
        let mut items = vec![item_in("Milk", 3), item_in("Rice", 30)];
        let notifier = RecordingNotifier::default();

        let rows = derive_rows(&items, now(), FilterMode::All, SortMode::None);
        assert_eq!(notify_and_mark(&mut items, &rows, &notifier), 1);
        assert!(items[0].notified);
        assert!(!items[1].notified);

        // Still in the window on the next cycle: no repeat
        let rows = derive_rows(&items, now(), FilterMode::All, SortMode::None);
        assert_eq!(notify_and_mark(&mut items, &rows, &notifier), 0);
        assert!(items[0].notified);

        assert_eq!(*notifier.sent.borrow(), vec![("Milk".to_string(), 3)]);
    }

    #[test]
    fn test_notifies_when_item_enters_window() {
        let mut items = vec![item_in("Cheese", 9)];
        let notifier = RecordingNotifier::default();

        let rows = derive_rows(&items, now(), FilterMode::All, SortMode::None);
        assert_eq!(notify_and_mark(&mut items, &rows, &notifier), 0);

        let later = now() + Duration::days(2);
        let rows = derive_rows(&items, later, FilterMode::All, SortMode::None);
        assert_eq!(notify_and_mark(&mut items, &rows, &notifier), 1);

        let even_later = now() + Duration::days(4);
        let rows = derive_rows(&items, even_later, FilterMode::All, SortMode::None);
        assert_eq!(notify_and_mark(&mut items, &rows, &notifier), 0);

        assert_eq!(*notifier.sent.borrow(), vec![("Cheese".to_string(), 7)]);
    }

    #[test]
    fn test_marks_source_item_through_sorted_rows() {
        let mut items = vec![item_in("Yogurt", 2), item_in("Butter", 40), item_in("Apples", 5)];
        let notifier = RecordingNotifier::default();

        let rows = derive_rows(&items, now(), FilterMode::All, SortMode::Name);
        assert_eq!(notify_and_mark(&mut items, &rows, &notifier), 2);
        assert!(items[0].notified);
        assert!(!items[1].notified);
        assert!(items[2].notified);
        assert_eq!(
            *notifier.sent.borrow(),
            vec![("Apples".to_string(), 5), ("Yogurt".to_string(), 2)]
        );
    }

    #[test]
    fn test_filtered_out_rows_are_not_notified() {
        let mut items = vec![item_in("Milk", 3)];
        let notifier = RecordingNotifier::default();

        let rows = derive_rows(&items, now(), FilterMode::Safe, SortMode::None);
        assert_eq!(notify_and_mark(&mut items, &rows, &notifier), 0);
        assert!(!items[0].notified);
        assert!(notifier.sent.borrow().is_empty());
    }
}
