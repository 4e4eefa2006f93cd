use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable machine readable error kind
    #[schema(example = "coin_not_found")]
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_owned(),
            message: message.to_owned(),
        }
    }
}
