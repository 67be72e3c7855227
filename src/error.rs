//! Error types for the Sandwich-Leave Deduction Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a deduction or
//! loading the leave policy.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Sandwich-Leave Deduction Engine.
///
/// Validation variants describe caller mistakes and are never retried.
/// Configuration variants are raised while loading policy files.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     start: NaiveDate::from_ymd_opt(2025, 9, 29).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 9, 26).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: end date 2025-09-26 is before start date 2025-09-29"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The end date of a leave range precedes its start date.
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The half-day flag was set on a range spanning more than one day.
    #[error("Half-day leave must start and end on the same day (got {start} to {end})")]
    InvalidHalfDay {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The leave range is longer than the policy allows.
    #[error("Leave range {start} to {end} spans {days} days, more than the allowed {max}")]
    RangeTooLong {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
        /// Calendar days in the requested range.
        days: u32,
        /// The configured maximum.
        max: u32,
    },

    /// A half-day request matched a sandwich pattern that is only defined for full days.
    #[error("Sandwich pattern {pattern} is not defined for half-day leave")]
    UnsupportedHalfDayPattern {
        /// The reason code of the pattern that matched.
        pattern: String,
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

    /// A policy value was loaded but is outside its allowed range.
    #[error("Invalid policy field '{field}': {message}")]
    InvalidPolicy {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by the shape of the leave request itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidRange { .. }
                | EngineError::InvalidHalfDay { .. }
                | EngineError::RangeTooLong { .. }
                | EngineError::UnsupportedHalfDayPattern { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
