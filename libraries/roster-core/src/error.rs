//! Core error types for Roster

use thiserror::Error;

use crate::types::UserId;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
///
/// The variants follow the failure classes a caller of the users API has to
/// tell apart: a uniqueness conflict, any other error status, no response at
/// all, and everything else.
#[derive(Error, Debug)]
pub enum RosterError {
    /// The server rejected the request as a duplicate (HTTP 400)
    #[error("Conflict: {detail}")]
    Conflict {
        /// Server-supplied detail text
        detail: String,
    },

    /// The server answered with a non-success status
    #[error("Server error ({status}): {detail}")]
    Server {
        /// Numeric HTTP status
        status: u16,
        /// Server-supplied detail text (may be empty)
        detail: String,
    },

    /// No response was received (connection refused, timeout, DNS)
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl RosterError {
    /// Create a conflict error
    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict {
            detail: detail.into(),
        }
    }

    /// Create a server error
    pub fn server(status: u16, detail: impl Into<String>) -> Self {
        Self::Server {
            status,
            detail: detail.into(),
        }
    }

    /// Create an unreachable error
    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable(msg.into())
    }

    /// Create an uncategorized error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_and_detail() {
        let err = RosterError::server(503, "maintenance");
        assert_eq!(err.to_string(), "Server error (503): maintenance");
    }

    #[test]
    fn test_not_found_display() {
        let err = RosterError::UserNotFound(UserId::new(42));
        assert_eq!(err.to_string(), "User not found: 42");
    }
}
