pub mod crypto;
pub mod error;
pub mod home;
pub use crypto::*;
pub use error::ErrorResponse;
pub use home::*;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(CryptoPriceResponse, WelcomeResponse, ErrorResponse)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
