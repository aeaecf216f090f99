use confique::Config;

pub mod oauth;
pub mod sts;
pub mod users;

pub use oauth::OAuthConfig;
pub use sts::StsConfig;
pub use users::UserStoreConfig;

/// Main configuration structure for the gateway
#[derive(Debug, Config, Clone)]
pub struct GatewayConfig {
    /// The port the gateway will listen to (default: 7788)
    #[config(env = "GATEWAY_PORT", default = 7788)]
    pub port: u16,

    /// Token endpoint configuration
    #[config(nested)]
    pub oauth: OAuthConfig,

    /// User credential store configuration
    #[config(nested)]
    pub users: UserStoreConfig,

    /// Security token service configuration
    #[config(nested)]
    pub sts: StsConfig,
}

impl GatewayConfig {
    /// Creates a new configuration instance from environment variables
    pub fn from_env() -> Result<Self, confique::Error> {
        Self::builder().env().load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment access is process-wide, so defaults and overrides are
    // exercised in a single test.
    #[test]
    fn test_config_from_env() {
        for (name, _value) in std::env::vars() {
            if name.starts_with("GATEWAY_") {
                std::env::remove_var(name);
            }
        }

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.port, 7788);
        assert_eq!(
            config.oauth.default_token_type,
            "urn:ietf:params:oauth:token-type:jwt"
        );
        assert_eq!(config.users.url, "http://localhost:7790");
        assert_eq!(config.users.request_timeout, 5);
        assert_eq!(config.sts.url, "http://localhost:7789");
        assert_eq!(config.sts.request_timeout, 5);

        std::env::set_var("GATEWAY_OAUTH_DEFAULT_TOKEN_TYPE", "Bearer");
        std::env::set_var("GATEWAY_STS_URL", "http://sts.internal:9000");

        let config = GatewayConfig::from_env().unwrap();
        assert_eq!(config.oauth.default_token_type, "Bearer");
        assert_eq!(config.sts.url, "http://sts.internal:9000");

        std::env::remove_var("GATEWAY_OAUTH_DEFAULT_TOKEN_TYPE");
        std::env::remove_var("GATEWAY_STS_URL");
    }
}
