//! Error types for the workload statistics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine and its configuration layer can report.

use thiserror::Error;

/// The main error type for the workload statistics engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use fonici_stats::error::EngineError;
///
/// let error = EngineError::EmptyInput {
///     message: "no engineers in period".to_string(),
/// };
/// assert_eq!(error.to_string(), "Empty input: no engineers in period");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A shift count entry was malformed (negative count, blank or duplicate name).
    #[error("Invalid input for engineer '{engineer}': {message}")]
    InvalidInput {
        /// The engineer name the problem was found on.
        engineer: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// An operation that needs at least one engineer received none.
    #[error("Empty input: {message}")]
    EmptyInput {
        /// A description of the operation that could not run.
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
