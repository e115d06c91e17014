//! UI Components
//!
//! Reusable Leptos components.

mod banner;
mod data_controls;
mod delete_confirm_button;
mod expiry_chart;
mod item_list;
mod new_item_form;
mod scanner_modal;
mod theme_toggle;
mod view_controls;

pub use banner::Banner;
pub use data_controls::DataControls;
pub use delete_confirm_button::DeleteConfirmButton;
pub use expiry_chart::ExpiryChart;
pub use item_list::ItemList;
pub use new_item_form::NewItemForm;
pub use scanner_modal::ScannerModal;
pub use theme_toggle::ThemeToggle;
pub use view_controls::ViewControls;
