use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::info;
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{CryptoPriceResponse, ErrorResponse},
        Error,
    },
    AppState,
};

/// Defines the OpenAPI spec for crypto endpoints
#[derive(OpenApi)]
#[openapi(paths(get_crypto_price_handler))]
pub struct CryptoApi;

/// Used to group crypto endpoints together in the OpenAPI documentation
pub const CRYPTO_API_GROUP: &str = "CRYPTO";

/// Builds a router for all the crypto routes
pub fn crypto_routes() -> Router<Arc<AppState>> {
    Router::new().route("/:coin", get(get_crypto_price_handler))
}

/// Get current price, market cap and 24h change of a coin
#[utoipa::path(
    get,
    path = "/api/crypto/{coin}",
    tag = CRYPTO_API_GROUP,
    params(
        ("coin" = String, Path, description = "CoinGecko coin identifier, e.g. bitcoin")
    ),
    responses(
        (status = 200, description = "Price of coin retrieved successfully", body = CryptoPriceResponse),
        (status = 404, description = "Coin not found", body = ErrorResponse),
        (status = 502, description = "Price provider returned an error or a malformed response", body = ErrorResponse),
        (status = 503, description = "Price provider unreachable or timed out", body = ErrorResponse),
    )
)]
pub async fn get_crypto_price_handler(
    State(state): State<Arc<AppState>>,
    Path(coin): Path<String>,
) -> Result<Json<CryptoPriceResponse>, Error> {
    let price = state.ext.get_simple_price(&coin).await?;
    info!(
        "{} = {} {}",
        price.coin, price.price, state.config.default_currency
    );
    Ok(Json(price.into()))
}
