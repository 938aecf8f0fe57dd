//! Change token passed from the coordinator to the list

use serde::{Deserialize, Serialize};

use super::User;

/// The most recently created user, stamped with the coordinator's version
///
/// Versions start at 1 and grow by one per successful creation, so a consumer
/// can tell a new creation from a repeated delivery of the same one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    /// Coordinator version at which this record was published
    pub version: u64,

    /// The record returned by the server
    pub user: User,
}
