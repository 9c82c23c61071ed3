//! Error types for the portal crate.

use roster::RosterError;
use thiserror::Error;

/// Errors surfaced by the controller and its collaborators.
///
/// Filtering and shortlist operations never produce these; they come from
/// loading, persistence, authentication and input that names unknown
/// candidates.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The session's user type may not open this screen
    #[error("{user_type} users cannot access the HR dashboard")]
    NotAuthorized { user_type: String },

    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),

    #[error("Email has no recipients")]
    EmptyRecipients,

    #[error("Invalid configuration value for {key}: {value}")]
    Config { key: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PortalError>;
