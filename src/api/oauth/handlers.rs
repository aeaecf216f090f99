//! OAuth 2.0 token endpoint handlers

use crate::api::oauth::authn::AuthenticatedUser;
use crate::api::oauth::errors::GrantError;
use crate::api::oauth::models::{
    AuthorizeRequest, GrantErrorBody, Principal, TokenRequest, TokenResponse,
};
use crate::api::oauth::scope::ScopeReference;
use crate::openapi::OAUTH_TAG;
use crate::state::AppState;
use axum::extract::{Form, FromRequest, Query, Request, State};
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, info};
use serde_json::json;

/// The only grant type the endpoint supports. Dispatch is an exact,
/// case-sensitive match; "Password" is not "password".
const PASSWORD_GRANT: &str = "password";

/// Implicit-flow token request (RFC 6749 Section 4.2)
///
/// The caller is authenticated at the transport boundary and the token is
/// returned in the redirect fragment, so it never shows up in server logs
/// the way a query string would.
#[utoipa::path(
    get,
    path = "/token",
    params(
        ("client_id" = String, Query, description = "Client identifier (accepted but not validated)"),
        ("scope" = String, Query, description = "Audience URI the token is requested for"),
        ("redirect_uri" = String, Query, description = "Redirect target; the token travels back in its fragment"),
    ),
    responses(
        (status = 302, description = "Redirect to redirect_uri with the token in the fragment"),
        (status = 400, description = "Malformed scope or issuance denied", body = GrantErrorBody),
        (status = 401, description = "Caller is not authenticated", body = GrantErrorBody),
    ),
    tag = OAUTH_TAG
)]
pub(crate) async fn authorize(
    State(state): State<AppState>,
    AuthenticatedUser(principal): AuthenticatedUser,
    Query(request): Query<AuthorizeRequest>,
) -> Response {
    let token_type = &state.config.oauth.default_token_type;

    // TODO: check client_id and redirect_uri against a client registry
    let applies_to = match ScopeReference::parse(&request.scope) {
        Ok(scope) => scope,
        Err(e) => return e.into_response(),
    };

    match state
        .sts
        .try_issue_token(&applies_to, &principal, token_type)
        .await
    {
        Ok(token) => redirect_with_fragment(&request.redirect_uri, &token),
        Err(e) => {
            error!("token issuance failed for scope {}: {}", applies_to, e);
            GrantError::TokenIssuanceDenied.into_response()
        }
    }
}

/// Builds the 302 whose fragment carries the token fields in the order
/// clients parse them: access_token, token_type, expires_in.
fn redirect_with_fragment(redirect_uri: &str, token: &TokenResponse) -> Response {
    let location = format!(
        "{}#access_token={}&token_type={}&expires_in={}",
        redirect_uri, token.access_token, token.token_type, token.expires_in
    );

    match HeaderValue::from_str(&location) {
        Ok(value) => {
            let mut response = StatusCode::FOUND.into_response();
            response.headers_mut().insert(LOCATION, value);
            response
        }
        Err(_) => {
            error!("redirect_uri does not form a valid Location header");
            GrantError::TokenIssuanceDenied.into_response()
        }
    }
}

/// Token request dispatch (RFC 6749 Section 4.3)
#[utoipa::path(
    post,
    path = "/token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 400, description = "Malformed scope, unsupported grant type, missing user name, or issuance denied", body = GrantErrorBody),
        (status = 401, description = "Resource owner credentials rejected", body = GrantErrorBody),
    ),
    tag = OAUTH_TAG
)]
pub(crate) async fn token(
    State(state): State<AppState>,
    TokenRequestExtractor(request): TokenRequestExtractor,
) -> Response {
    info!("token endpoint called");

    let token_type = state.config.oauth.default_token_type.clone();

    let applies_to = match ScopeReference::parse(&request.scope) {
        Ok(scope) => scope,
        Err(e) => return e.into_response(),
    };

    if request.grant_type == PASSWORD_GRANT {
        return issue_password_grant_token(
            &state,
            request.username.as_deref().unwrap_or_default(),
            request.password.as_deref().unwrap_or_default(),
            applies_to,
            &token_type,
        )
        .await;
    }

    error!("invalid grant type: {}", request.grant_type);
    GrantError::UnrecognizedGrantType.into_response()
}

/// Resource-owner password-credentials grant
async fn issue_password_grant_token(
    state: &AppState,
    user_name: &str,
    password: &str,
    applies_to: ScopeReference,
    token_type: &str,
) -> Response {
    if user_name.trim().is_empty() {
        error!("missing user name for scope: {}", applies_to);
        return GrantError::MissingUsername.into_response();
    }

    // An empty password is deliberately not rejected here; emptiness rules
    // belong to the credential store.
    let valid = match state.user_store.validate_user(user_name, password).await {
        Ok(valid) => valid,
        Err(e) => {
            error!("user store unavailable while authenticating '{}': {}", user_name, e);
            false
        }
    };

    if !valid {
        error!("authentication failed for user: {}", user_name);
        return GrantError::AuthenticationFailed.into_response();
    }

    let principal = Principal::oauth2(user_name);

    match state
        .sts
        .try_issue_token(&applies_to, &principal, token_type)
        .await
    {
        Ok(token) => (StatusCode::OK, Json(token)).into_response(),
        Err(e) => {
            error!("token issuance failed for user '{}': {}", user_name, e);
            GrantError::TokenIssuanceDenied.into_response()
        }
    }
}

/// Extractor that accepts the token request as JSON or form-encoded body
pub(crate) struct TokenRequestExtractor(pub TokenRequest);

impl<S> FromRequest<S> for TokenRequestExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .unwrap_or("");

        if content_type.starts_with("application/json") {
            match Json::<TokenRequest>::from_request(req, state).await {
                Ok(Json(request)) => Ok(TokenRequestExtractor(request)),
                Err(_) => Err(unreadable_body()),
            }
        } else {
            match Form::<TokenRequest>::from_request(req, state).await {
                Ok(Form(request)) => Ok(TokenRequestExtractor(request)),
                Err(_) => Err(unreadable_body()),
            }
        }
    }
}

fn unreadable_body() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "invalid request." })),
    )
        .into_response()
}
