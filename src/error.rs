//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during salary calculation.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::UnknownSalaryType {
///     value: "weekly".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown salary type: weekly");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The instructor record carried a salary type the dispatcher does not
    /// recognize. This is the only error a calculation itself can produce;
    /// every calculator function is total over its inputs.
    #[error("Unknown salary type: {value}")]
    UnknownSalaryType {
        /// The unrecognized salary type value.
        value: String,
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
