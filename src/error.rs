//! Application Errors
//!
//! One error type for storage, import and browser API failures.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced to the user through the error banner
#[derive(Error, Debug)]
pub enum AppError {
    /// `window.localStorage` is missing or blocked (private mode, sandboxed frame)
    #[error("Local storage is not available")]
    StorageUnavailable,

    /// The storage backend threw (quota exceeded, security error)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A stored collection could not be parsed
    #[error("Stored data under '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// An imported file is not a JSON array of items
    #[error("Import failed: {0}")]
    Import(#[source] serde_json::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Form input rejected before anything is stored
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any other browser API failure
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type for application operations
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Wrap a thrown JS value from a browser API call
    pub fn browser(value: JsValue) -> Self {
        AppError::Browser(js_message(&value))
    }

    /// Wrap a thrown JS value from the storage backend
    pub fn storage(value: JsValue) -> Self {
        AppError::Storage(js_message(&value))
    }
}

/// Best-effort readable text for a thrown JS value
fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_message_names_key() {
        let source = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err = AppError::Corrupt { key: "items".to_string(), source };
        assert!(err.to_string().starts_with("Stored data under 'items' is corrupt"));
    }

    #[test]
    fn test_invalid_input_message() {
        let err = AppError::InvalidInput("name is required".to_string());
        assert_eq!(err.to_string(), "Invalid input: name is required");
    }
}
