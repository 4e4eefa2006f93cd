use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use tracing::{error, info, warn};

use super::dto::ErrorResponse;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<ErrorResponse>,
}

impl Error {
    pub fn new(code: StatusCode, kind: &str, message: &str) -> Self {
        Self {
            code,
            body: Json(ErrorResponse::new(kind, message)),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

/// Failures of a single call to the price provider
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("coin '{0}' not found")]
    CoinNotFound(String),
    #[error("price provider did not answer within {0} seconds")]
    Timeout(u64),
    #[error("price provider is unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("price provider responded with status {0}")]
    Status(StatusCode),
    #[error("price provider returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl UpstreamError {
    /// Machine readable kind, used as the `error` field of the response body
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::CoinNotFound(_) => "coin_not_found",
            UpstreamError::Timeout(_) => "upstream_timeout",
            UpstreamError::Unreachable(_) => "upstream_unreachable",
            UpstreamError::Status(_) => "upstream_status",
            UpstreamError::MalformedResponse(_) => "upstream_malformed_response",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            UpstreamError::CoinNotFound(_) => StatusCode::NOT_FOUND,
            UpstreamError::Timeout(_) | UpstreamError::Unreachable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            UpstreamError::Status(_) | UpstreamError::MalformedResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl From<UpstreamError> for Error {
    fn from(error: UpstreamError) -> Self {
        match &error {
            UpstreamError::CoinNotFound(_) => info!("{error}"),
            UpstreamError::Timeout(_) | UpstreamError::Status(_) => warn!("{error}"),
            UpstreamError::Unreachable(_) | UpstreamError::MalformedResponse(_) => {
                error!("{error}")
            }
        }
        Self::new(error.status_code(), error.kind(), &error.to_string())
    }
}
