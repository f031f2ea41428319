//! Error types for slot-engine operations.

use chrono::Weekday;
use thiserror::Error;

/// A lookup the caller expected to succeed came back empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    /// The business has no operating hours configured for this weekday.
    #[error("no operating hours configured for {weekday}")]
    OperatingHoursMissing { weekday: Weekday },

    #[error("service '{id}' is not offered by this business")]
    Service { id: String },
}

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Not found: {0}")]
    NotFound(#[from] NotFound),

    /// A business-level setting that makes slot computation impossible
    /// (zero step, zero service span, reversed hours, duplicate entries).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A malformed value at the boundary (HHMM strings, datetimes).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SlotError {
    /// True for the errors an HTTP layer reports as 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SlotError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
