//! OAuth 2.0 token endpoint
//!
//! Accepts token requests under two grant models and delegates the actual
//! token minting to an external security token service (STS):
//! - Implicit flow (RFC 6749 Section 4.2): `GET /token`, token returned in
//!   the redirect fragment
//! - Resource Owner Password Credentials (RFC 6749 Section 4.3):
//!   `POST /token` with `grant_type=password`
//!
//! ## Architecture
//! - Requested scopes are parsed into the audience the token applies to
//! - Resource-owner credentials are validated against an external user store
//! - All collaborators are plain HTTP services injected through [`AppState`];
//!   handlers never reach into ambient or thread-local state

pub mod authn;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scope;
pub mod sts_client;
pub mod user_store;

use crate::state::AppState;
use axum::routing::get;
use axum::Router;

/// Creates the token endpoint routes
pub fn router() -> Router<AppState> {
    Router::new().route("/token", get(handlers::authorize).post(handlers::token))
}
