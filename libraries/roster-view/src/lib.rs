//! Roster - View State
//!
//! Platform-agnostic state for the user-management screen.
//!
//! This crate provides:
//! - Creation form (field editing, required-field check, submit state machine)
//! - User list (initial load, manual refresh, prepending newly created users)
//! - Coordinator (versioned "last created" slot shared by the two)
//! - Session (wires the three together the way a screen would)
//! - Plain-text rendering of every component
//!
//! # Architecture
//!
//! `roster-view` knows nothing about HTTP:
//! - No dependency on reqwest
//! - No dependency on a terminal or GUI toolkit
//!
//! The network is reached through [`roster_core::UserApi`], so the same state
//! machines run against the real client or an in-memory fake.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::UserApi;
//! use roster_view::Session;
//!
//! async fn run(api: &dyn UserApi) {
//!     let mut session = Session::new();
//!     session.mount(api).await;
//!
//!     session.form_mut().set_name("Ann");
//!     session.form_mut().set_email("ann@x.com");
//!     session.submit(api).await;
//!
//!     println!("{}", session.render());
//! }
//! ```

pub mod coordinator;
pub mod form;
pub mod list;
pub mod session;

pub use coordinator::Coordinator;
pub use form::{CreationForm, FormPhase, SubmitOutcome};
pub use list::{ListPhase, ListView};
pub use session::Session;
