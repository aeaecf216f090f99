use crate::api::oauth::sts_client::StsClient;
use crate::api::oauth::user_store::UserStoreClient;
use crate::config::GatewayConfig;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Shared, read-only application state. Handlers hold no mutable state of
/// their own, so cloning this per request is cheap and safe.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub user_store: UserStoreClient,
    pub sts: StsClient,
}

impl AppState {
    fn create_http_client(timeout: u64) -> Client {
        Client::builder()
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(2))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .expect("Failed to create HTTP client")
    }

    pub fn new(config: GatewayConfig) -> Self {
        let user_store = UserStoreClient::new(
            AppState::create_http_client(config.users.request_timeout),
            config.users.url.clone(),
        );
        let sts = StsClient::new(
            AppState::create_http_client(config.sts.request_timeout),
            config.sts.url.clone(),
        );

        Self {
            config: Arc::new(config),
            user_store,
            sts,
        }
    }
}
