//! Roster Client
//!
//! HTTP client library for the Roster users API.
//!
//! # Features
//!
//! - **Create**: `POST /users/` with a bounded wait (5 seconds by default)
//! - **List**: `GET /users/` in server order
//! - **Lookup**: `GET /users/{id}`
//! - **Health**: `GET /` status message
//!
//! Failures are classified so callers can tell a duplicate email, another
//! error status and an unreachable server apart.
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, RosterClient};
//! use roster_core::NewUser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RosterClient::new(ClientConfig::new("http://localhost:8000"))?;
//!
//!     let status = client.ping().await?;
//!     println!("{}", status.message);
//!
//!     let created = client
//!         .users()
//!         .create_user(&NewUser::new("Ann", "ann@x.com", ""))
//!         .await?;
//!     println!("Created user #{}", created.id);
//!
//!     let users = client.users().list_users().await?;
//!     println!("Found {} users", users.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;
mod users;

// Re-export main types
pub use client::RosterClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, HealthResponse, DEFAULT_BASE_URL};

// Re-export sub-clients for direct use if needed
pub use users::UsersClient;
