//! Security token service configuration

use confique::Config;

/// Configuration for the security token service the gateway delegates
/// token minting to
#[derive(Debug, Config, Clone)]
pub struct StsConfig {
    /// Base URL of the STS (default: http://localhost:7789)
    #[config(env = "GATEWAY_STS_URL", default = "http://localhost:7789")]
    pub url: String,

    /// Timeout for STS requests in seconds (default: 5)
    #[config(env = "GATEWAY_STS_REQUEST_TIMEOUT", default = 5)]
    pub request_timeout: u64,
}
