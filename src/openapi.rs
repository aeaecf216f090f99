use utoipa::OpenApi;

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const OAUTH_TAG: &str = "OAuth 2.0";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::health_check,
        crate::api::oauth::handlers::authorize,
        crate::api::oauth::handlers::token,
    ),
    components(schemas(
        crate::api::oauth::models::TokenRequest,
        crate::api::oauth::models::TokenResponse,
        crate::api::oauth::models::GrantErrorBody,
    )),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = OAUTH_TAG, description = "OAuth 2.0 token endpoint"),
    ),
    info(
        title = "STS Gateway API",
        description = "OAuth2 token endpoint delegating token minting to a security token service",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;
