//! Error types for the Roster client.

use roster_core::{RosterError, UserId};
use thiserror::Error;

/// Errors that can occur when interacting with a Roster backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server rejected the request as a duplicate (HTTP 400)
    #[error("Conflict: {detail}")]
    Conflict { detail: String },

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// User does not exist
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline, unreachable or too slow to answer
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// Classify a transport error from `send()`.
    ///
    /// Only a request that could not be built is a local failure. Anything
    /// else means no response arrived: refused, reset, closed early or timed out.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ClientError::Request(err)
        } else {
            ClientError::ServerUnreachable(err.to_string())
        }
    }
}

impl From<ClientError> for RosterError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Conflict { detail } => RosterError::Conflict { detail },
            ClientError::ServerError { status, message } => RosterError::Server {
                status,
                detail: message,
            },
            ClientError::NotFound(id) => RosterError::UserNotFound(id),
            ClientError::ServerUnreachable(msg) => RosterError::Unreachable(msg),
            ClientError::Request(e) if !e.is_builder() => RosterError::Unreachable(e.to_string()),
            ClientError::InvalidUrl(msg) => RosterError::InvalidInput(msg),
            other => RosterError::Other(other.to_string()),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
