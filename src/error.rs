use crate::db::StoreError;
use crate::models::RecordError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Detail returned when a failure escapes the typed error mapping.
pub const UNHANDLED_ERROR_DETAIL: &str = "Internal server error occurred";

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

/// # API Errors
///
/// Closed set of failure kinds a handler can report, each with a fixed
/// status code and `detail` message.
///
/// | Variant | Status | `detail` |
/// |---|---|---|
/// | `Validation` | 422 | parser message |
/// | `PayloadTooLarge` | 413 | `Request body exceeds <limit> bytes` |
/// | `WriteFailed` | 500 | `Failed to create status check` |
/// | `Internal` | 500 | `Internal server error: <message>` |
/// | `StoreUnavailable` | 500 | `Internal server error: <store error>` |
/// | `NotFound` | 404 | `Not Found` |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Failed to create status check")]
    WriteFailed,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Not Found")]
    NotFound,
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::WriteFailed | ApiError::Internal(_) | ApiError::StoreUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}
