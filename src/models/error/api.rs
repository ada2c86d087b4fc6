use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::services::MarketplaceServiceError;

/// Errors surfaced to inbound callers, each mapped to an HTTP status and a
/// JSON string body.
#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("Authorization failed.")]
    Unauthorized,

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    /// The upstream could not be reached at all. The message carries the
    /// attempted URL.
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// The upstream answered with something the relay cannot republish
    /// (non-JSON body, marketer record without a `url` field).
    #[error("{0}")]
    BadUpstream(String),

    /// The upstream answered with a non-success status; the inbound response
    /// mirrors it with a fixed per-endpoint message.
    #[error("{message}")]
    UpstreamStatus { status: u16, message: String },
}

impl From<MarketplaceServiceError> for ApiError {
    fn from(err: MarketplaceServiceError) -> Self {
        match err {
            MarketplaceServiceError::Connection { .. } => {
                ApiError::UpstreamUnavailable(err.to_string())
            }
            MarketplaceServiceError::MalformedBody { .. } => ApiError::BadUpstream(err.to_string()),
            MarketplaceServiceError::InvalidUrl(_) | MarketplaceServiceError::Client(_) => {
                ApiError::InternalError(err.to_string())
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UpstreamUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadUpstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::UpstreamStatus { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_string())
    }
}
