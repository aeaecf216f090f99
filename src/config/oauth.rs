//! Token endpoint configuration

use confique::Config;

/// Token endpoint configuration
#[derive(Debug, Config, Clone)]
pub struct OAuthConfig {
    /// Token type requested from the STS for HTTP token requests
    /// (default: "urn:ietf:params:oauth:token-type:jwt")
    #[config(
        env = "GATEWAY_OAUTH_DEFAULT_TOKEN_TYPE",
        default = "urn:ietf:params:oauth:token-type:jwt"
    )]
    pub default_token_type: String,
}
