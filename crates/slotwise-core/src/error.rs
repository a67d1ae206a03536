//! Core error types for slotwise-core.
//!
//! Malformed wall-clock strings surface as [`TimeFormatError`] and are
//! never silently patched: bad preference or task data is an upstream
//! data-entry bug that the caller should see immediately. Missing
//! preferences and "no free slot today" are defined outcomes, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for slotwise-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Wall-clock string parsing errors
    #[error("Time format error: {0}")]
    TimeFormat(#[from] TimeFormatError),

    /// Domain validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// A wall-clock string failed to parse as "HH:MM".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeFormatError {
    /// Not two numeric fields separated by a colon
    #[error("expected \"HH:MM\", got \"{0}\"")]
    Malformed(String),

    /// Hour field outside 0-23
    #[error("hour out of range in \"{0}\"")]
    HourOutOfRange(String),

    /// Minute field outside 0-59
    #[error("minute out of range in \"{0}\"")]
    MinuteOutOfRange(String),
}

/// Validation errors for scheduling data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Slot end does not come after its start
    #[error("invalid time range: end ({end}) must be after start ({start})")]
    InvalidTimeRange { start: String, end: String },

    /// Day-of-week outside 0-6 (Sunday = 0)
    #[error("day {0} out of range (expected 0-6)")]
    DayOutOfRange(u8),

    /// Task duration must be positive
    #[error("task duration must be greater than zero")]
    ZeroDuration,

    /// Unknown task id
    #[error("task not found: {0}")]
    TaskNotFound(String),

    /// No live suggestion for the task
    #[error("no suggestion for task: {0}")]
    SuggestionNotFound(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read or parse the store file
    #[error("failed to load store at {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write the store file
    #[error("failed to save store at {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
