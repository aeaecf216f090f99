//! Token endpoint request/response structures

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OAuth 2.0 Token Request (resource-owner password credentials grant)
///
/// Missing fields deserialize to empty values and are rejected by the
/// normal validation path rather than by the body extractor.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TokenRequest {
    /// OAuth 2.0 grant type - only "password" is supported
    #[serde(default)]
    pub grant_type: String,
    /// Audience URI the token is requested for
    #[serde(default)]
    pub scope: String,
    /// Resource owner user name (password grant only)
    #[serde(default)]
    pub username: Option<String>,
    /// Resource owner password (password grant only)
    #[serde(default)]
    pub password: Option<String>,
}

/// Implicit-flow token request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeRequest {
    /// Client identifier (accepted but not validated against a registry)
    #[serde(default)]
    pub client_id: String,
    /// Audience URI the token is requested for
    #[serde(default)]
    pub scope: String,
    /// Redirect target; the token travels back in its fragment
    #[serde(default)]
    pub redirect_uri: String,
}

/// Token minted by the STS. The gateway relays it without transformation,
/// either as a JSON body or embedded in a redirect fragment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// The access token string
    pub access_token: String,
    /// Token type the STS minted
    pub token_type: String,
    /// Token expiration in seconds
    pub expires_in: u64,
}

/// Body shape of rejected grant requests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GrantErrorBody {
    /// Fixed rejection message
    pub message: String,
}

/// An authenticated identity handed to the STS: a subject plus the label
/// of the method that authenticated it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Principal {
    pub subject: String,
    pub authentication_method: String,
}

impl Principal {
    pub fn new(subject: impl Into<String>, authentication_method: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            authentication_method: authentication_method.into(),
        }
    }

    /// Principal produced by a successful password-grant credential check
    pub fn oauth2(subject: impl Into<String>) -> Self {
        Self::new(subject, "OAuth2")
    }

    /// Principal resolved at the transport boundary from Basic credentials
    pub fn basic(subject: impl Into<String>) -> Self {
        Self::new(subject, "Basic")
    }
}
