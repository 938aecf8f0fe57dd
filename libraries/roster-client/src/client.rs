//! Main Roster client.

use crate::error::{ClientError, Result};
use crate::types::{ApiErrorBody, ClientConfig, HealthResponse};
use crate::users::UsersClient;
use async_trait::async_trait;
use reqwest::Client;
use roster_core::{NewUser, RosterError, User, UserApi, UserId};
use std::time::Duration;
use tracing::{debug, info};

/// Main client for interacting with a Roster backend.
///
/// Cloning is cheap; clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, RosterClient};
///
/// let client = RosterClient::new(ClientConfig::new("http://localhost:8000"))?;
/// let users = client.users().list_users().await?;
/// println!("Found {} users", users.len());
/// ```
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: Client,
    url: String,
    create_timeout: Duration,
}

impl RosterClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let url = normalize_url(&config.base_url)?;

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{} (CLI)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            url,
            create_timeout: config.create_timeout,
        })
    }

    /// Get the backend URL (without trailing slash).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Access the `/users/` resource.
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient::new(&self.http, &self.url, self.create_timeout)
    }

    /// Check that the backend is up.
    pub async fn ping(&self) -> Result<HealthResponse> {
        let url = format!("{}/", self.url);
        debug!(url = %url, "Pinging backend");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let health: HealthResponse = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse health response: {}", e))
            })?;

            info!(message = %health.message, "Backend is up");
            Ok(health)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: ApiErrorBody::detail_from(&body),
            })
        }
    }
}

fn normalize_url(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let url = raw.trim().trim_end_matches('/').to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;

    Ok(url)
}

#[async_trait]
impl UserApi for RosterClient {
    async fn create_user(&self, user: &NewUser) -> roster_core::Result<User> {
        self.users()
            .create_user(user)
            .await
            .map_err(RosterError::from)
    }

    async fn list_users(&self) -> roster_core::Result<Vec<User>> {
        self.users().list_users().await.map_err(RosterError::from)
    }

    async fn get_user(&self, id: UserId) -> roster_core::Result<User> {
        self.users().get_user(id).await.map_err(RosterError::from)
    }

    fn base_url(&self) -> &str {
        &self.url
    }
}
