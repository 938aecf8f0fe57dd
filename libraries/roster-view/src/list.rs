//! List View
//!
//! Displays every user. The collection is replaced wholesale by a fetch and
//! otherwise only grows at the front, when a creation made elsewhere is
//! handed down by the coordinator.

use roster_core::{CreatedUser, User, UserApi};
use std::fmt;
use tracing::{debug, info, warn};

const TITLE: &str = "User list";
const LOADING: &str = "Loading users...";
const FETCH_ERROR: &str = "Failed to load users";
const EMPTY_STATE: &str = "No users found. Add the first user!";

/// Phase of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Ready,
    /// The last fetch failed; the previous collection is still shown
    Error,
}

/// The user list
#[derive(Debug)]
pub struct ListView {
    users: Vec<User>,
    phase: ListPhase,
    error: Option<String>,
    mounted: bool,
    applied_version: u64,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    /// Create a list that has not loaded anything yet
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            phase: ListPhase::Loading,
            error: None,
            mounted: false,
            applied_version: 0,
        }
    }

    /// Users in display order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Current phase
    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    /// Visible error text, if the last fetch failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// First display: load once. Later calls do nothing.
    pub async fn mount(&mut self, api: &dyn UserApi) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.load_all(api).await;
    }

    /// Fetch the full collection (initial load or manual refresh)
    pub async fn load_all(&mut self, api: &dyn UserApi) {
        self.begin_load();
        let result = api.list_users().await;
        self.finish_load(result);
    }

    /// Enter `Loading`
    pub fn begin_load(&mut self) {
        debug!("Loading users");
        self.phase = ListPhase::Loading;
    }

    /// Apply a fetch result.
    ///
    /// Success replaces the collection and clears the error. Failure keeps the
    /// last loaded collection and shows a fixed error message.
    pub fn finish_load(&mut self, result: roster_core::Result<Vec<User>>) {
        match result {
            Ok(users) => {
                info!(users = users.len(), "Users loaded");
                self.users = users;
                self.error = None;
                self.phase = ListPhase::Ready;
            }
            Err(e) => {
                warn!(error = %e, kept = self.users.len(), "Failed to load users");
                self.error = Some(FETCH_ERROR.to_string());
                self.phase = ListPhase::Error;
            }
        }
    }

    /// Prepend a user created elsewhere, without fetching.
    ///
    /// Each coordinator version is applied at most once, and a user whose id
    /// is already listed is never inserted again. Returns whether the list
    /// changed.
    pub fn apply_created(&mut self, created: &CreatedUser) -> bool {
        if created.version <= self.applied_version {
            debug!(version = created.version, "Creation already applied");
            return false;
        }
        self.applied_version = created.version;

        if self.users.iter().any(|user| user.id == created.user.id) {
            debug!(user_id = %created.user.id, "Created user already listed");
            return false;
        }

        self.users.insert(0, created.user.clone());
        true
    }

    /// Render the list as text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, user: &User) -> fmt::Result {
    writeln!(f, "  #{} {}", user.id, user.name)?;
    writeln!(f, "     {}", user.email)?;
    if let Some(bio) = user.display_bio() {
        writeln!(f, "     {}", bio)?;
    }
    Ok(())
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_loading() {
            writeln!(f, "{}", TITLE)?;
            return writeln!(f, "{}", LOADING);
        }

        writeln!(f, "{}  [Refresh]", TITLE)?;

        if let Some(error) = &self.error {
            writeln!(f, "{}", error)?;
        }

        if self.users.is_empty() {
            return writeln!(f, "{}", EMPTY_STATE);
        }

        writeln!(f, "Total users: {}", self.users.len())?;
        for user in &self.users {
            write_card(f, user)?;
        }

        Ok(())
    }
}
