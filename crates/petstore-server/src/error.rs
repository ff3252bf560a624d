// Rust guideline compliant 2026-10-17

//! Mapping of application errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use petstore_app::{AppError, ErrorCode, ErrorEnvelope};

/// Error returned by HTTP handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<petstore_core::Error> for ApiError {
    fn from(error: petstore_core::Error) -> Self {
        Self(AppError::Core(error))
    }
}

/// Returns the HTTP status for an error code.
pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStatus => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::InvalidId
        | ErrorCode::MissingField
        | ErrorCode::ValidationError
        | ErrorCode::InvalidStatusValue
        | ErrorCode::InvalidApiKey
        | ErrorCode::MissingFile
        | ErrorCode::UnsupportedImage => StatusCode::BAD_REQUEST,
        ErrorCode::IoError
        | ErrorCode::JsonError
        | ErrorCode::StoreNotInitialized
        | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code());
        if self.0.is_internal() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, status = status.as_u16(), "Request rejected");
        }
        (status, Json(ErrorEnvelope::from_error(&self.0))).into_response()
    }
}
