use crate::config::{GatewayConfig, OAuthConfig, StsConfig, UserStoreConfig};
use crate::create_app;
use crate::state::AppState;
use axum::body::Body;
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

/// Test fixture that wires the router against wiremock stand-ins for the
/// two external collaborators (user store and STS) and drives it with
/// in-process requests.
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Configuration the app was built with
    pub config: GatewayConfig,
    /// Mock server standing in for the user credential store
    pub user_store_mock: MockServer,
    /// Mock server standing in for the STS
    pub sts_mock: MockServer,
}

impl TestFixture {
    pub async fn new() -> Self {
        // Initialize test logger
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();

        let user_store_mock = MockServer::start().await;
        let sts_mock = MockServer::start().await;

        let config = GatewayConfig {
            port: 0,
            oauth: OAuthConfig {
                default_token_type: "urn:ietf:params:oauth:token-type:jwt".to_string(),
            },
            users: UserStoreConfig {
                url: user_store_mock.uri(),
                request_timeout: 5,
            },
            sts: StsConfig {
                url: sts_mock.uri(),
                request_timeout: 5,
            },
        };

        let state = AppState::new(config.clone());
        let app = create_app(state);

        Self {
            app,
            config,
            user_store_mock,
            sts_mock,
        }
    }

    /// Mounts a user-store answer for any credential check
    pub async fn given_user_validation(&self, valid: bool) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/validate"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "valid": valid })),
            )
            .mount(&self.user_store_mock)
            .await;
    }

    /// Mounts an STS answer that mints the given token for any issue call
    pub async fn given_issued_token(&self, token: &Value) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/issue"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token.clone()))
            .mount(&self.sts_mock)
            .await;
    }

    /// Mounts an STS denial for any issue call
    pub async fn given_issuance_denied(&self) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path("/issue"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&self.sts_mock)
            .await;
    }

    /// Builds a Basic Authorization header value for the given credentials
    pub fn basic_auth(username: &str, password: &str) -> String {
        format!(
            "Basic {}",
            BASE64.encode(format!("{}:{}", username, password))
        )
    }

    /// Sends a JSON POST request to the app
    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        self.send(request).await
    }

    /// Sends a form-encoded POST request to the app
    pub async fn post_form(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        self.send(request).await
    }

    /// Sends a GET request, optionally with an Authorization header
    pub async fn get(&self, path: &str, authorization: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(Method::GET).uri(path);
        if let Some(authorization) = authorization {
            builder = builder.header(header::AUTHORIZATION, authorization);
        }
        let request = builder
            .body(Body::empty())
            .expect("failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        let (parts, body) = response.into_parts();
        let body = body
            .collect()
            .await
            .expect("failed to read response body")
            .to_bytes()
            .to_vec();
        TestResponse { parts, body }
    }
}

/// A fully-read response, keeping the parts (status, headers, extensions)
/// alongside the collected body.
pub struct TestResponse {
    pub parts: http::response::Parts,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn status(&self) -> StatusCode {
        self.parts.status
    }

    /// Parses the body as JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    /// The fixed rejection message of an error body
    pub fn message(&self) -> String {
        self.json()["message"]
            .as_str()
            .unwrap_or_default()
            .to_string()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }
}
