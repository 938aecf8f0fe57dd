//! Roster Core
//!
//! Platform-agnostic domain types, traits, and error handling for Roster.
//!
//! This crate provides the building blocks shared by the HTTP client and the
//! view-state library.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `UserId`, `NewUser`
//! - **Core Traits**: `UserApi`, the seam between view state and the network
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{NewUser, User, UserId};
//!
//! let request = NewUser::new("Ann", "ann@x.com", "");
//! assert!(request.missing_field().is_none());
//!
//! let user = User::new(UserId::new(1), "Ann", "ann@x.com", None);
//! assert!(user.display_bio().is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Result, RosterError};
pub use traits::UserApi;
pub use types::{CreatedUser, NewUser, RequiredField, User, UserId};
