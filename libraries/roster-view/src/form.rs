//! Creation Form
//!
//! Collects name, email and bio, submits them through [`UserApi`] and records
//! one outcome per attempt.
//!
//! State machine:
//!
//! ```text
//! Idle --begin_submit--> Submitting --finish_submit--> Idle (outcome recorded)
//! ```
//!
//! While `Submitting`, field edits and further submissions are ignored.

use roster_core::{NewUser, RequiredField, RosterError, User, UserApi};
use std::fmt;
use tracing::{debug, info, warn};

const TITLE: &str = "Add a new user";

/// Phase of the form's submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input
    Idle,
    /// A creation request is in flight; inputs are disabled
    Submitting,
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server created the user
    Created(User),

    /// A required field was blank; nothing was sent
    MissingField(RequiredField),

    /// The email is already registered (HTTP 400)
    DuplicateEmail {
        /// Server-supplied detail
        detail: String,
    },

    /// The server answered with another error status
    ServerError {
        /// HTTP status
        status: u16,
        /// Server-supplied detail
        detail: String,
    },

    /// No response arrived (connection failure or timeout)
    Unreachable {
        /// Backend the request was sent to
        base_url: String,
    },

    /// Anything else
    Failed(String),
}

impl SubmitOutcome {
    /// Classify the result of a creation call
    pub fn from_result(result: roster_core::Result<User>, base_url: &str) -> Self {
        match result {
            Ok(user) => Self::Created(user),
            Err(RosterError::Conflict { detail }) => Self::DuplicateEmail { detail },
            Err(RosterError::Server { status, detail }) => Self::ServerError { status, detail },
            Err(RosterError::Unreachable(_)) => Self::Unreachable {
                base_url: base_url.to_string(),
            },
            Err(other) => Self::Failed(other.to_string()),
        }
    }

    /// Whether the attempt created a user
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Created(_))
    }

    /// The created user, on success
    pub fn created(&self) -> Option<&User> {
        match self {
            Self::Created(user) => Some(user),
            _ => None,
        }
    }

    /// Text shown next to the form
    pub fn message(&self) -> String {
        match self {
            Self::Created(_) => "User added successfully!".to_string(),
            Self::MissingField(field) => format!("Error: {} is required", field),
            Self::DuplicateEmail { .. } => {
                "Error: a user with this email already exists".to_string()
            }
            Self::ServerError { status, detail } => format!("Server error: {} - {}", status, detail),
            Self::Unreachable { base_url } => format!(
                "Error: cannot reach the server. Check that the backend is running at {}",
                base_url
            ),
            Self::Failed(description) => format!("Error: {}", description),
        }
    }
}

/// The new-user form
#[derive(Debug)]
pub struct CreationForm {
    values: NewUser,
    phase: FormPhase,
    outcome: Option<SubmitOutcome>,
}

impl Default for CreationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreationForm {
    /// Create an empty, idle form
    pub fn new() -> Self {
        Self {
            values: NewUser::default(),
            phase: FormPhase::Idle,
            outcome: None,
        }
    }

    /// Current field values
    pub fn values(&self) -> &NewUser {
        &self.values
    }

    /// Current phase
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Whether a request is in flight
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Outcome of the last attempt, if any
    pub fn outcome(&self) -> Option<&SubmitOutcome> {
        self.outcome.as_ref()
    }

    /// Render the form as text
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Message for the last attempt, if any
    pub fn message(&self) -> Option<String> {
        self.outcome.as_ref().map(SubmitOutcome::message)
    }

    /// Set the name field. Returns false if inputs are disabled.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        self.edit(|values| values.name = name.into())
    }

    /// Set the email field. Returns false if inputs are disabled.
    pub fn set_email(&mut self, email: impl Into<String>) -> bool {
        self.edit(|values| values.email = email.into())
    }

    /// Set the bio field. Returns false if inputs are disabled.
    pub fn set_bio(&mut self, bio: impl Into<String>) -> bool {
        self.edit(|values| values.bio = bio.into())
    }

    fn edit(&mut self, apply: impl FnOnce(&mut NewUser)) -> bool {
        if self.is_submitting() {
            debug!("Ignoring edit while submitting");
            return false;
        }
        apply(&mut self.values);
        true
    }

    /// Start a submission.
    ///
    /// Returns the request body to send, or `None` when nothing should be sent:
    /// either a submission is already in flight, or a required field is blank
    /// (recorded as `SubmitOutcome::MissingField`).
    pub fn begin_submit(&mut self) -> Option<NewUser> {
        if self.is_submitting() {
            debug!("Submit ignored, request already in flight");
            return None;
        }

        self.outcome = None;

        if let Some(field) = self.values.missing_field() {
            debug!(field = %field, "Submit blocked by blank required field");
            self.outcome = Some(SubmitOutcome::MissingField(field));
            return None;
        }

        self.phase = FormPhase::Submitting;
        Some(self.values.clone())
    }

    /// Record the result of the creation call and return to `Idle`.
    ///
    /// On success the fields are cleared; on failure they are kept as entered.
    pub fn finish_submit(
        &mut self,
        result: roster_core::Result<User>,
        base_url: &str,
    ) -> &SubmitOutcome {
        let outcome = SubmitOutcome::from_result(result, base_url);

        match &outcome {
            SubmitOutcome::Created(user) => {
                info!(user_id = %user.id, "User added");
                self.values = NewUser::default();
            }
            failure => warn!(message = %failure.message(), "User creation failed"),
        }

        self.phase = FormPhase::Idle;
        self.outcome.insert(outcome)
    }

    /// Validate, send and record one submission.
    ///
    /// The phase is back to `Idle` once this returns, and also if the returned
    /// future is dropped before completion. Returns `None` only if a
    /// submission started with [`begin_submit`](Self::begin_submit) is still
    /// open.
    pub async fn submit(&mut self, api: &dyn UserApi) -> Option<&SubmitOutcome> {
        let request = match self.begin_submit() {
            Some(request) => request,
            None => return self.outcome.as_ref(),
        };

        {
            let mut guard = SubmitGuard { form: &mut *self };
            let result = api.create_user(&request).await;
            guard.form().finish_submit(result, api.base_url());
        }

        self.outcome.as_ref()
    }
}

/// Resets the form to `Idle` however the submit scope is left.
struct SubmitGuard<'a> {
    form: &'a mut CreationForm,
}

impl SubmitGuard<'_> {
    fn form(&mut self) -> &mut CreationForm {
        self.form
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.form.phase = FormPhase::Idle;
    }
}

impl fmt::Display for CreationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let disabled = if self.is_submitting() { " (disabled)" } else { "" };

        writeln!(f, "{}", TITLE)?;
        writeln!(f, "  Name *:  {}{}", self.values.name, disabled)?;
        writeln!(f, "  Email *: {}{}", self.values.email, disabled)?;
        writeln!(f, "  Bio:     {}{}", self.values.bio, disabled)?;

        if self.is_submitting() {
            writeln!(f, "  [Adding...]")?;
        } else {
            writeln!(f, "  [Add user]")?;
        }

        if let Some(message) = self.message() {
            writeln!(f, "{}", message)?;
        }

        Ok(())
    }
}
