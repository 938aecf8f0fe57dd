//! User domain types

use serde::{Deserialize, Serialize};
use std::fmt;

use super::UserId;

/// A user record as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier, immutable once created
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across users
    pub email: String,

    /// Free-form biography
    pub bio: Option<String>,
}

impl User {
    /// Build a record (mostly useful for tests and fakes)
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        bio: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            bio,
        }
    }

    /// The bio, if there is something to show
    pub fn display_bio(&self) -> Option<&str> {
        self.bio.as_deref().filter(|bio| !bio.is_empty())
    }
}

/// Request body for `POST /users/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name (required)
    pub name: String,

    /// Email address (required)
    pub email: String,

    /// Biography, sent as an empty string when left blank
    pub bio: String,
}

/// A form field the client refuses to submit blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    /// The name field
    Name,
    /// The email field
    Email,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
        }
    }
}

impl NewUser {
    /// Create a request from the three form values
    pub fn new(name: impl Into<String>, email: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            bio: bio.into(),
        }
    }

    /// First required field that is blank, in form order
    pub fn missing_field(&self) -> Option<RequiredField> {
        if self.name.trim().is_empty() {
            Some(RequiredField::Name)
        } else if self.email.trim().is_empty() {
            Some(RequiredField::Email)
        } else {
            None
        }
    }

    /// Whether every field is empty
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.bio.is_empty()
    }
}
