//! HTTP client for the external security token service

use crate::api::oauth::models::{Principal, TokenResponse};
use crate::api::oauth::scope::ScopeReference;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while requesting a token from the STS
#[derive(Debug, Error)]
pub enum StsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("STS denied issuance with status {0}")]
    Denied(http::StatusCode),
}

#[derive(Debug, Serialize)]
struct IssueRequest<'a> {
    audience: &'a str,
    subject: &'a str,
    authentication_method: &'a str,
    token_type: &'a str,
}

/// Security token service client. The gateway never mints tokens itself;
/// every issuance goes through this client.
#[derive(Clone)]
pub struct StsClient {
    client: Client,
    base_url: String,
}

impl StsClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Asks the STS to mint a token for the audience/principal pair.
    /// Any non-success status is treated as a denial.
    pub async fn try_issue_token(
        &self,
        applies_to: &ScopeReference,
        principal: &Principal,
        token_type: &str,
    ) -> Result<TokenResponse, StsError> {
        debug!(
            "requesting token for subject '{}' with audience {}",
            principal.subject, applies_to
        );

        let url = format!("{}/issue", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&IssueRequest {
                audience: applies_to.uri().as_str(),
                subject: &principal.subject,
                authentication_method: &principal.authentication_method,
                token_type,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StsError::Denied(status));
        }

        Ok(response.json::<TokenResponse>().await?)
    }
}
