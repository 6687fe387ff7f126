//! Error types for the surcharge engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the few error conditions the engine can run into: malformed events,
//! malformed clock times in a rate plan, and configuration loading failures.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the surcharge engine.
///
/// # Example
///
/// ```
/// use surcharge_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeOfDay {
///     value: "24:00".to_string(),
///     message: "hour must be between 00 and 23".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid time of day '24:00': hour must be between 00 and 23"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An event does not end strictly after it starts.
    #[error("Invalid event {start} -> {end}: {message}")]
    InvalidEvent {
        /// The start of the rejected event.
        start: NaiveDateTime,
        /// The end of the rejected event.
        end: NaiveDateTime,
        /// A description of what made the event invalid.
        message: String,
    },

    /// A clock time could not be parsed as `HH:MM` within 00:00-23:59.
    #[error("Invalid time of day '{value}': {message}")]
    InvalidTimeOfDay {
        /// The raw value that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
