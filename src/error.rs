//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating input,
//! computing salary adjustments, or moving increments through approval.

use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Salary Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::InvalidRequestShape {
///     message: "percentage method requires a percentage".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid adjustment request: percentage method requires a percentage"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// An adjustment form populated the wrong combination of fields for its method.
    #[error("Invalid adjustment request: {message}")]
    InvalidRequestShape {
        /// A description of the mismatch.
        message: String,
    },

    /// A compensation component was negative.
    #[error("Invalid compensation component '{component}': {value} is negative")]
    InvalidCompensation {
        /// The component name (e.g., "housing").
        component: String,
        /// The offending value.
        value: Decimal,
    },

    /// An adjustment value was outside the range the calculator accepts.
    #[error("Invalid adjustment: {message}")]
    InvalidAdjustment {
        /// A description of what made the adjustment invalid.
        message: String,
    },

    /// A salary increment could not move to the requested status.
    #[error("Salary increment {id} cannot be {action} while {from}")]
    InvalidTransition {
        /// The increment ID.
        id: Uuid,
        /// The status the increment is currently in.
        from: String,
        /// The attempted action, in past tense (e.g., "approved").
        action: String,
    },

    /// Attendance records were inconsistent with the requested month.
    #[error("Invalid attendance: {message}")]
    InvalidAttendance {
        /// A description of the inconsistency.
        message: String,
    },
}

impl EngineError {
    /// An `InvalidAdjustment` for arithmetic that left the decimal range.
    pub(crate) fn overflow(what: &str) -> Self {
        EngineError::InvalidAdjustment {
            message: format!("{what} overflows decimal range"),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
