//! Grant flow failure taxonomy and its mapping onto HTTP responses

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Marker attached to 401 responses so that a fronting interactive-login
/// layer does not turn them into a login redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuppressAuthRedirect;

/// Terminal failures of the grant endpoint. Every variant maps to exactly
/// one status code and one fixed body message; nothing here is retriable.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GrantError {
    /// The requested scope is not a well-formed audience identifier
    #[error("malformed scope name.")]
    MalformedScope,
    /// The grant type is not one the endpoint supports
    #[error("invalid grant type.")]
    UnrecognizedGrantType,
    /// The password grant was attempted without a user name
    #[error("missing user name.")]
    MissingUsername,
    /// The resource owner's credentials did not validate
    #[error("unauthorized.")]
    AuthenticationFailed,
    /// The STS refused to mint a token for the request
    #[error("invalid request.")]
    TokenIssuanceDenied,
}

impl GrantError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GrantError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            GrantError::MalformedScope
            | GrantError::UnrecognizedGrantType
            | GrantError::MissingUsername
            | GrantError::TokenIssuanceDenied => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GrantError {
    fn into_response(self) -> Response {
        let body = json!({
            "message": self.to_string(),
        });
        let mut response = (self.status_code(), Json(body)).into_response();
        if matches!(self, GrantError::AuthenticationFailed) {
            response.extensions_mut().insert(SuppressAuthRedirect);
        }
        response
    }
}
