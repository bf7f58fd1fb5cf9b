//! Error types for the commute expense engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while turning trip text into a
//! reimbursement ledger and rendering statements from it.

use thiserror::Error;

use crate::extraction::Dialect;

/// The main error type for the expense engine.
///
/// The parsing pipeline only ever fails with [`EngineError::EmptyInput`] or
/// [`EngineError::NoEntriesRecognized`]; a single malformed line is skipped,
/// never reported.
///
/// # Example
///
/// ```
/// use pino_expense::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/reimbursement.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/reimbursement.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input text was blank or contained only whitespace.
    #[error("Input text is empty")]
    EmptyInput,

    /// The input was non-empty but no trip entry could be extracted from it.
    #[error("No trip entries recognized in {dialect} input")]
    NoEntriesRecognized {
        /// The dialect the input was read as.
        dialect: Dialect,
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

    /// A configuration value was outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A statement was requested for an employee absent from the report.
    #[error("Employee not found: {name}")]
    EmployeeNotFound {
        /// The requested employee name.
        name: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// A renderer failed to produce a statement.
    #[error("Failed to render {format} statement: {message}")]
    RenderError {
        /// The output format that failed.
        format: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
