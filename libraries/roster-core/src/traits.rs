//! Core traits for Roster

use crate::error::Result;
use crate::types::{NewUser, User, UserId};
use async_trait::async_trait;

/// Access to the users resource of the backend
///
/// The view-state components only talk to the network through this trait, so
/// they can be driven by the HTTP client in production and by an in-memory
/// fake in tests.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Create a user (`POST /users/`)
    ///
    /// # Errors
    /// `RosterError::Conflict` when the email is already registered,
    /// `RosterError::Unreachable` when no response arrives in time,
    /// `RosterError::Server` for any other error status.
    async fn create_user(&self, user: &NewUser) -> Result<User>;

    /// Fetch every user in server order (`GET /users/`)
    ///
    /// # Errors
    /// Same classification as `create_user`.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Fetch a single user (`GET /users/{id}`)
    ///
    /// # Errors
    /// `RosterError::UserNotFound` if the server has no such user.
    async fn get_user(&self, id: UserId) -> Result<User>;

    /// Base URL of the backend, used in connectivity messages
    fn base_url(&self) -> &str;
}
