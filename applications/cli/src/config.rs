//! Client configuration

use roster_client::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_log")]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_create_timeout_ms")]
    pub create_timeout_ms: u64,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogSettings {
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Settings {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `roster.toml` in the working
    /// directory is used when present. `ROSTER_` variables override both
    /// (`ROSTER_API__BASE_URL`, `ROSTER_LOG__FILTER`, ...).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Settings = settings.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "API base URL is required (set ROSTER_API__BASE_URL)".to_string(),
            ));
        }

        for (name, value) in [
            ("create_timeout_ms", self.api.create_timeout_ms),
            ("request_timeout_ms", self.api.request_timeout_ms),
            ("connect_timeout_ms", self.api.connect_timeout_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!(
                    "api.{} must be greater than zero",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Replace the base URL (command-line override)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Settings for the HTTP client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            create_timeout: Duration::from_millis(self.api.create_timeout_ms),
            request_timeout: Duration::from_millis(self.api.request_timeout_ms),
            connect_timeout: Duration::from_millis(self.api.connect_timeout_ms),
        }
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        create_timeout_ms: default_create_timeout_ms(),
        request_timeout_ms: default_request_timeout_ms(),
        connect_timeout_ms: default_connect_timeout_ms(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_create_timeout_ms() -> u64 {
    5000
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_connect_timeout_ms() -> u64 {
    10_000
}

fn default_log() -> LogSettings {
    LogSettings {
        filter: default_log_filter(),
    }
}

fn default_log_filter() -> String {
    "roster=info,roster_cli=info,roster_client=info,roster_view=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: default_api(),
            log: default_log(),
        }
    }
}
