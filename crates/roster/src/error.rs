//! Error types for the roster crate.
//!
//! Everything that can go wrong while turning an external roster document
//! into a validated `CandidateStore` ends up in one of these variants.

use thiserror::Error;

/// Errors that can occur while loading or validating a roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Roster file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the roster
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The roster document is not valid JSON for the candidate shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The roster document decoded but could not be interpreted
    #[error("Parse error in {origin}: {reason}")]
    ParseError { origin: String, reason: String },

    /// Two candidates share the same identifier
    #[error("Duplicate candidate id: {id}")]
    DuplicateId { id: String },

    /// A candidate field had an out-of-range value
    #[error("Invalid value for {field} on candidate {id}: {value}")]
    InvalidValue {
        id: String,
        field: String,
        value: String,
    },

    /// Roster validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RosterError>;
