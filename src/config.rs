//! Application Configuration
//!
//! Compile-time settings shared across modules.

/// localStorage key for the active collection
pub const ITEMS_KEY: &str = "items";
/// localStorage key for the archive
pub const ARCHIVE_KEY: &str = "archive";
/// localStorage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Items expiring within this many days count as "soon" and get notified
pub const SOON_WINDOW_DAYS: i64 = 7;
/// Chart covers today plus this many days
pub const CHART_DAYS_AHEAD: i64 = 10;

/// File name offered when exporting the active collection
pub const EXPORT_FILE_NAME: &str = "items.json";

/// How long the export blob URL stays valid after the download starts
pub const EXPORT_URL_REVOKE_DELAY_MS: u32 = 1_000;

/// Offline cache worker, relative to the page
pub const SERVICE_WORKER_PATH: &str = "service-worker.js";

/// Element the barcode scanner streams the camera into
pub const SCANNER_TARGET: &str = "#scanner";
/// Barcode reader used by the scanner
pub const SCANNER_READER: &str = "ean_reader";

/// Canvas id of the expiry chart
pub const CHART_CANVAS_ID: &str = "chart";

/// Department options for the item form (value, label)
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("Produce", "Produce"),
    ("Dairy", "Dairy"),
    ("Bakery", "Bakery"),
    ("Meat", "Meat & Seafood"),
    ("Deli", "Deli"),
    ("Frozen", "Frozen"),
    ("Pantry", "Pantry"),
    ("Pharmacy", "Pharmacy"),
];

/// Log level used by the console logger
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
