//! Transport-boundary authentication for the implicit flow
//!
//! The implicit-flow handler trusts that its caller is already
//! authenticated. That happens here: Basic credentials are checked against
//! the user store and the resolved [`Principal`] is handed to the handler
//! as an explicit argument, never through ambient state.

use crate::api::oauth::models::Principal;
use crate::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use http::{HeaderValue, StatusCode};
use log::error;
use serde_json::json;

/// The caller identity resolved at the transport boundary
pub struct AuthenticatedUser(pub Principal);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        let encoded = match header.strip_prefix("Basic ") {
            Some(encoded) => encoded,
            None => return Err(challenge()),
        };

        let decoded = BASE64
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(challenge)?;
        let (username, password) = decoded.split_once(':').ok_or_else(challenge)?;

        match state.user_store.validate_user(username, password).await {
            Ok(true) => Ok(AuthenticatedUser(Principal::basic(username))),
            Ok(false) => {
                error!("authentication failed for user: {}", username);
                Err(challenge())
            }
            Err(e) => {
                error!("user store error while authenticating '{}': {}", username, e);
                Err(challenge())
            }
        }
    }
}

fn challenge() -> Response {
    let mut response = (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": "unauthorized." })),
    )
        .into_response();
    response.headers_mut().insert(
        WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"token\""),
    );
    response
}
