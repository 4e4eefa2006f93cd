mod crypto;
mod home;
mod swagger;
use home::home_handler;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{external::External, AppState, Config};

use axum::{routing::get, Router};
use std::sync::Arc;

/// Builds the application router around `config`.
pub fn make_app(config: Config) -> Result<Router, reqwest::Error> {
    info!(
        "Using price provider at {} ({}s timeout, currency {})",
        config.coingecko_base_url, config.timeout_seconds, config.default_currency
    );
    let ext = External::new(&config)?;
    let state = Arc::new(AppState { config, ext });

    // Any origin, method and header; origins are mirrored so credentials can be allowed.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let ret = Router::new()
        .route("/", get(home_handler))
        .nest("/api/crypto", crypto::crypto_routes())
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(ret)
}
