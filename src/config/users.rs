//! User credential store configuration

use confique::Config;

/// Configuration for the user credential store used to validate
/// resource-owner credentials
#[derive(Debug, Config, Clone)]
pub struct UserStoreConfig {
    /// Base URL of the user store (default: http://localhost:7790)
    #[config(env = "GATEWAY_USERS_URL", default = "http://localhost:7790")]
    pub url: String,

    /// Timeout for user store requests in seconds (default: 5)
    #[config(env = "GATEWAY_USERS_REQUEST_TIMEOUT", default = 5)]
    pub request_timeout: u64,
}
