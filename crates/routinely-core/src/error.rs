//! Core error types for routinely-core.
//!
//! This module defines the error hierarchy using thiserror for better
//! error handling and reporting across the library.

use thiserror::Error;

/// Core error type for routinely-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Key-value storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read a key
    #[error("Failed to read key '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a key
    #[error("Failed to write key '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to remove a key
    #[error("Failed to remove key '{key}': {source}")]
    RemoveFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Stored payload could not be serialized or deserialized
    #[error("Corrupt payload for key '{key}': {message}")]
    CorruptPayload { key: String, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Validation errors.
///
/// Wired into the mutation path: `add` and `update` reject malformed
/// input instead of persisting it.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Title is empty after trimming or longer than the allowed maximum
    #[error("Routine title must be 1-{max} characters, got {len}")]
    TitleLength { len: usize, max: usize },

    /// Scheduled time string is not "HH:MM" or the any-time sentinel
    #[error("Invalid scheduled time '{0}': expected \"HH:MM\" or \"any time\"")]
    TimeFormat(String),

    /// Frequency string is outside the closed set
    #[error("Unknown frequency '{0}': expected daily, weekdays, weekends, weekly or custom")]
    Frequency(String),

    /// Success rate outside 0-100
    #[error("Monthly success rate must be within 0-100, got {0}")]
    SuccessRateRange(f64),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
