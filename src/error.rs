//! Error types for the Attendance Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance computation.
//!
//! A missing shift assignment for a single employee-day is deliberately NOT
//! an error: the classifier skips the day and produces no record.

use thiserror::Error;

/// The main error type for the Attendance Computation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shifts.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/shifts.yaml");
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

    /// A required input to a recomputation or aggregation run was missing
    /// or malformed. The operation is not started.
    #[error("Invalid request field '{field}': {message}")]
    Validation {
        /// The request field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Reference data (shifts, holidays, policies, employee configs) could
    /// not be fetched for a batch. Aborts the current batch only.
    #[error("Reference data error for tenant '{tenant_id}': {message}")]
    ReferenceData {
        /// The tenant whose reference data failed to load.
        tenant_id: String,
        /// A description of the fetch failure.
        message: String,
    },

    /// The attendance store rejected a query, delete, or insert.
    #[error("Store error: {message}")]
    Store {
        /// A description of the store failure.
        message: String,
    },

    /// A time-of-day or duration string was not valid `HH:MM:SS`.
    #[error("Invalid time value '{value}'")]
    InvalidTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A policy reference on an employee pointed at no known policy.
    #[error("Policy not found: {policy_id}")]
    PolicyNotFound {
        /// The policy id that was not found.
        policy_id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
