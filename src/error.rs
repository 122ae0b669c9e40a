use thiserror::Error;

/// Shape errors raised by the JSON operations in [`crate::ops`].
///
/// The core functions in [`crate::algo`] are total and never fail.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("expected '{field}' to be an object, got {found}")]
    NotAnObject {
        field: &'static str,
        found: &'static str,
    },

    #[error("campaign param '{key}' must be a string")]
    NonStringValue { key: String },

    #[error("invalid sanitize options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
