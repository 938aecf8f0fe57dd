//! Types for Roster API requests and responses.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration for connecting to a Roster backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    pub base_url: String,
    /// How long a creation request may take before it counts as unreachable
    pub create_timeout: Duration,
    /// Overall timeout for every other request
    pub request_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the given URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override the creation timeout.
    pub fn with_create_timeout(mut self, timeout: Duration) -> Self {
        self.create_timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            create_timeout: Duration::from_millis(5000),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

// =============================================================================
// Health Types
// =============================================================================

/// Response from the root health endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Error body returned by the backend.
///
/// `detail` is usually a string, but validation failures carry a structured
/// list, so it is kept as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ApiErrorBody {
    /// Extract the detail text from a response body.
    ///
    /// Falls back to the raw body when it is not JSON or has no `detail`.
    pub fn detail_from(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(ApiErrorBody {
                detail: Some(serde_json::Value::String(text)),
            }) => text,
            Ok(ApiErrorBody {
                detail: Some(value),
            }) => value.to_string(),
            _ => body.trim().to_string(),
        }
    }
}
