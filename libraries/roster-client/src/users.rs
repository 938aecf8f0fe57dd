//! Users resource operations.

use crate::error::{ClientError, Result};
use crate::types::ApiErrorBody;
use reqwest::{Client, Response, StatusCode};
use roster_core::{NewUser, User, UserId};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the `/users/` resource.
pub struct UsersClient<'a> {
    http: &'a Client,
    base_url: &'a str,
    create_timeout: Duration,
}

impl<'a> UsersClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str, create_timeout: Duration) -> Self {
        Self {
            http,
            base_url,
            create_timeout,
        }
    }

    /// Create a user.
    ///
    /// The whole exchange is bounded by the configured creation timeout; when
    /// it expires the call fails with `ServerUnreachable`.
    pub async fn create_user(&self, request: &NewUser) -> Result<User> {
        let url = format!("{}/users/", self.base_url);
        debug!(url = %url, email = %request.email, "Creating user");

        let response = self
            .http
            .post(&url)
            .timeout(self.create_timeout)
            .json(request)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let user: User = response.json().await.map_err(|e| {
                if e.is_timeout() {
                    ClientError::ServerUnreachable(e.to_string())
                } else {
                    ClientError::ParseError(format!("Failed to parse created user: {}", e))
                }
            })?;

            info!(user_id = %user.id, email = %user.email, "User created");
            Ok(user)
        } else if status == StatusCode::BAD_REQUEST {
            let detail = detail_text(response).await;
            warn!(email = %request.email, detail = %detail, "User creation rejected");
            Err(ClientError::Conflict { detail })
        } else {
            Err(server_error(status, response).await)
        }
    }

    /// Fetch every user, in server order.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let url = format!("{}/users/", self.base_url);
        debug!(url = %url, "Fetching users");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let users: Vec<User> = response.json().await.map_err(|e| {
                ClientError::ParseError(format!("Failed to parse user list: {}", e))
            })?;

            debug!(users = users.len(), "Fetched users");
            Ok(users)
        } else {
            Err(server_error(status, response).await)
        }
    }

    /// Fetch a single user by ID.
    pub async fn get_user(&self, id: UserId) -> Result<User> {
        let url = format!("{}/users/{}", self.base_url, id);
        debug!(url = %url, user_id = %id, "Fetching user");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ClientError::ParseError(format!("Failed to parse user: {}", e)))
        } else if status == StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(id))
        } else {
            Err(server_error(status, response).await)
        }
    }
}

async fn detail_text(response: Response) -> String {
    let body = response.text().await.unwrap_or_default();
    ApiErrorBody::detail_from(&body)
}

async fn server_error(status: StatusCode, response: Response) -> ClientError {
    let message = detail_text(response).await;
    warn!(status = %status, error = %message, "Server returned an error");
    ClientError::ServerError {
        status: status.as_u16(),
        message,
    }
}
