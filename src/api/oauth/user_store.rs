//! HTTP client for the external user credential store

use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the user store
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("user store responded with status {0}")]
    UnexpectedStatus(http::StatusCode),
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    valid: bool,
}

/// User credential store client. Safe for concurrent use; the underlying
/// `reqwest::Client` is shared across requests.
#[derive(Clone)]
pub struct UserStoreClient {
    client: Client,
    base_url: String,
}

impl UserStoreClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Checks a username/password pair against the store.
    ///
    /// The password travels only in the request body and is never logged.
    pub async fn validate_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, UserStoreError> {
        debug!("validating credentials for user: {}", username);

        let url = format!("{}/validate", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&ValidateRequest { username, password })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UserStoreError::UnexpectedStatus(status));
        }

        let body: ValidateResponse = response.json().await?;
        debug!("credential check for '{}' returned valid={}", username, body.valid);
        Ok(body.valid)
    }
}
