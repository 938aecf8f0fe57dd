//! Session
//!
//! One screen's worth of state: the creation form, the user list and the
//! coordinator that carries each creation from the former to the latter.

use crate::coordinator::Coordinator;
use crate::form::{CreationForm, SubmitOutcome};
use crate::list::ListView;
use roster_core::UserApi;
use std::fmt;
use tracing::debug;

/// Form, list and coordinator wired together
#[derive(Debug, Default)]
pub struct Session {
    coordinator: Coordinator,
    form: CreationForm,
    list: ListView,
}

impl Session {
    /// Create a session; nothing is loaded until [`mount`](Self::mount)
    pub fn new() -> Self {
        Self::default()
    }

    /// The creation form
    pub fn form(&self) -> &CreationForm {
        &self.form
    }

    /// The creation form, for editing fields
    pub fn form_mut(&mut self) -> &mut CreationForm {
        &mut self.form
    }

    /// The user list
    pub fn list(&self) -> &ListView {
        &self.list
    }

    /// The coordinator
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    /// First display: loads the list once
    pub async fn mount(&mut self, api: &dyn UserApi) {
        self.list.mount(api).await;
    }

    /// Submit the form.
    ///
    /// On success the created user is published through the coordinator and
    /// handed to the list, which shows it first.
    pub async fn submit(&mut self, api: &dyn UserApi) -> Option<SubmitOutcome> {
        let outcome = self.form.submit(api).await.cloned();

        if let Some(user) = outcome.as_ref().and_then(SubmitOutcome::created) {
            self.coordinator.on_user_created(user.clone());
            self.deliver_latest();
        }

        outcome
    }

    /// Hand the coordinator's latest value down to the list
    fn deliver_latest(&mut self) {
        if let Some(latest) = self.coordinator.latest() {
            let changed = self.list.apply_created(latest);
            debug!(version = latest.version, changed, "Delivered created user to list");
        }
    }

    /// Manual refresh of the list
    pub async fn refresh(&mut self, api: &dyn UserApi) {
        self.list.load_all(api).await;
    }

    /// Render the whole screen as text
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.form)?;
        writeln!(f)?;
        write!(f, "{}", self.list)
    }
}
