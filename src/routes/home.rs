use std::collections::BTreeMap;

use crate::models::dto::WelcomeResponse;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(home_handler))]
/// Defines the OpenAPI spec for the welcome endpoint
pub struct HomeApi;

/// Used to group general endpoints together in the OpenAPI documentation
pub const GENERAL_API_GROUP: &str = "GENERAL";

/// Welcome payload confirming the API is up. Never calls the price provider.
#[utoipa::path(
    get,
    path = "/",
    tag = GENERAL_API_GROUP,
    responses(
        (status = OK, description = "API is running", body = WelcomeResponse)
    )
)]
pub async fn home_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Crypto API 🚀".to_string(),
        status: "API is running".to_string(),
        docs: "/docs".to_string(),
        endpoints: BTreeMap::from([("crypto".to_string(), "/api/crypto/{coin}".to_string())]),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::routes::tests::spawn_app;
    use crate::Config;
    use axum::http::StatusCode;
    use serde_json::{json, Value};
    use wiremock::{matchers::any, Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_home_does_not_call_upstream() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        let app = spawn_app(Config {
            coingecko_base_url: server.uri(),
            ..Default::default()
        })
        .await;

        let response = reqwest::get(format!("{app}/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body,
            json!({
                "message": "Welcome to the Crypto API 🚀",
                "status": "API is running",
                "docs": "/docs",
                "endpoints": { "crypto": "/api/crypto/{coin}" },
                "version": env!("CARGO_PKG_VERSION"),
            })
        );
    }

    #[tokio::test]
    async fn test_home_with_unreachable_upstream() {
        let app = spawn_app(Config {
            coingecko_base_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        })
        .await;

        let response = reqwest::get(format!("{app}/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
