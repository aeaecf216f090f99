//! Scope parsing and audience resolution

use crate::api::oauth::errors::GrantError;
use log::{error, info};
use std::fmt;
use url::Url;

/// A validated scope parameter, resolved to the audience the requested
/// token applies to. Only absolute URIs are accepted; everything else is
/// rejected before any collaborator is contacted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeReference {
    uri: Url,
}

impl ScopeReference {
    /// Parses an untrusted scope parameter into an audience reference.
    pub fn parse(raw: &str) -> Result<Self, GrantError> {
        match Url::parse(raw) {
            Ok(uri) => {
                info!("token endpoint called for scope: {}", raw);
                Ok(Self { uri })
            }
            Err(_) => {
                error!("malformed scope: {}", raw);
                Err(GrantError::MalformedScope)
            }
        }
    }

    /// The audience URI this scope resolves to
    pub fn uri(&self) -> &Url {
        &self.uri
    }
}

impl fmt::Display for ScopeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.uri.fmt(f)
    }
}
