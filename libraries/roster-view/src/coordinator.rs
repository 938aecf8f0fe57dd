//! Coordinator
//!
//! Holds the single value shared between the creation form and the list: the
//! most recently created user. Every publication bumps a version so the list
//! can apply each creation exactly once.

use roster_core::{CreatedUser, User};
use tracing::debug;

/// Owner of the "last created" slot
#[derive(Debug, Default)]
pub struct Coordinator {
    latest: Option<CreatedUser>,
    version: u64,
}

impl Coordinator {
    /// Create a coordinator with an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a freshly created user, replacing whatever was there
    pub fn on_user_created(&mut self, user: User) -> &CreatedUser {
        self.version += 1;
        debug!(version = self.version, user_id = %user.id, "Publishing created user");

        self.latest.insert(CreatedUser {
            version: self.version,
            user,
        })
    }

    /// Most recently created user, if any
    pub fn latest(&self) -> Option<&CreatedUser> {
        self.latest.as_ref()
    }

    /// Number of creations published so far
    pub fn version(&self) -> u64 {
        self.version
    }
}
