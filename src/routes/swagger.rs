use crate::models::dto;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Crypto API",
    description = "Real time cryptocurrency prices, market capitalization and 24h change, served from the public CoinGecko API",
))]
struct Api;

/// Constructs the route on the API that renders the swagger UI and returns the OpenAPI schema.
/// Merges in OpenAPI definitions from the [dto] package and the route modules
pub fn build_documentation() -> SwaggerUi {
    let mut api_docs = Api::openapi();
    api_docs.merge(dto::OpenApiSchemas::openapi());
    api_docs.merge(super::home::HomeApi::openapi());
    api_docs.merge(super::crypto::CryptoApi::openapi());

    SwaggerUi::new("/docs").url("/openapi.json", api_docs)
}
