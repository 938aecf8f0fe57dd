//! Roster terminal front end
//!
//! Configuration loading and the interactive command language used by the
//! `roster` binary.

pub mod config;
pub mod input;

pub use config::{ConfigError, Settings};
pub use input::{Command, InputError};
