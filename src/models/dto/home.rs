use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub status: String,
    #[schema(example = "/docs")]
    pub docs: String,
    pub endpoints: BTreeMap<String, String>,
    pub version: String,
}
