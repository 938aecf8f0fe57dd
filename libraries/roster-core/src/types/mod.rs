//! Domain types

mod created;
mod ids;
mod user;

pub use created::CreatedUser;
pub use ids::UserId;
pub use user::{NewUser, RequiredField, User};
