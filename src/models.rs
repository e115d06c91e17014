//! Frontend Models
//!
//! Persisted records and the view/selection types derived from them.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A perishable item in the active collection.
///
/// Serialized as `{ "department", "name", "date": "YYYY-MM-DD", "notified" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub department: String,
    pub name: String,
    /// Expiration date (no time component)
    pub date: NaiveDate,
    /// Set once the "expires soon" notification has fired
    #[serde(default)]
    pub notified: bool,
}

/// An expired item, frozen as it was when archived
pub type ArchivedItem = Item;

impl Item {
    pub fn new(department: impl Into<String>, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            department: department.into(),
            name: name.into(),
            date,
            notified: false,
        }
    }

    /// Build an item from raw form values.
    ///
    /// All three fields are required; the name is trimmed and the date must be `YYYY-MM-DD`.
    pub fn from_form(department: &str, name: &str, date: &str) -> AppResult<Self> {
        let name = name.trim();
        if department.is_empty() {
            return Err(AppError::InvalidInput("department is required".to_string()));
        }
        if name.is_empty() {
            return Err(AppError::InvalidInput("item name is required".to_string()));
        }
        if date.is_empty() {
            return Err(AppError::InvalidInput("expiration date is required".to_string()));
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| AppError::InvalidInput(format!("expiration date '{}': {}", date, e)))?;
        Ok(Self::new(department, name, date))
    }

    /// The instant the item expires: its date at 00:00 UTC
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.date.and_time(NaiveTime::MIN).and_utc()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at() < now
    }
}

/// Which rows the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    /// 0 to 7 days left
    Soon,
    /// Already past expiry (only before the lifecycle pass runs)
    Expired,
    /// More than 7 days left
    Safe,
}

impl FilterMode {
    pub const ALL: [FilterMode; 4] = [FilterMode::All, FilterMode::Soon, FilterMode::Expired, FilterMode::Safe];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Soon => "soon",
            FilterMode::Expired => "expired",
            FilterMode::Safe => "safe",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "soon" => FilterMode::Soon,
            "expired" => FilterMode::Expired,
            "safe" => FilterMode::Safe,
            _ => FilterMode::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All items",
            FilterMode::Soon => "Expiring soon",
            FilterMode::Expired => "Expired",
            FilterMode::Safe => "Safe",
        }
    }
}

/// Display ordering of the list; never changes the stored order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Insertion order
    #[default]
    None,
    Name,
    Date,
    Department,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [SortMode::None, SortMode::Name, SortMode::Date, SortMode::Department];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Name => "name",
            SortMode::Date => "date",
            SortMode::Department => "department",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "name" => SortMode::Name,
            "date" => SortMode::Date,
            "department" => SortMode::Department,
            _ => SortMode::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::None => "Added",
            SortMode::Name => "Name",
            SortMode::Date => "Expiry date",
            SortMode::Department => "Department",
        }
    }
}

/// Color scheme, persisted under the `theme` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// One displayed row: an item annotated with its days until expiry.
///
/// Recomputed on every refresh, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRow {
    pub item: Item,
    /// Position of the source item in the active collection
    pub index: usize,
    /// Whole days until expiry, rounded up; negative once expired
    pub diff_days: i64,
}

impl ViewRow {
    /// Within the 0..=7 day warning window
    pub fn is_soon(&self) -> bool {
        (0..=crate::config::SOON_WINDOW_DAYS).contains(&self.diff_days)
    }
}
