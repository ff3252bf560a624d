// Rust guideline compliant 2026-10-17

//! Error handling for Petstore application services.

use petstore_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested Pet was not found.
    NotFound,
    /// A path identifier is not a positive integer.
    InvalidId,
    /// A required body field is absent.
    MissingField,
    /// Input validation failed.
    ValidationError,
    /// The status of a Pet being written is not a known value.
    InvalidStatus,
    /// A status filter is not a known value.
    InvalidStatusValue,
    /// The `api_key` header is missing or wrong.
    InvalidApiKey,
    /// An upload request carried no file.
    MissingFile,
    /// An uploaded file is not an accepted image type.
    UnsupportedImage,
    /// The request body is larger than `max_upload_bytes`.
    PayloadTooLarge,
    /// IO failure while reading or writing store data.
    IoError,
    /// The store directory has not been initialized.
    StoreNotInitialized,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Server configuration is invalid.
    ConfigError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store directory is missing or not initialized.
    #[error("Petstore not initialized at {path}. Run 'petstore init' first.")]
    StoreNotInitialized {
        /// Path where `.petstore` was expected.
        path: PathBuf,
    },

    /// A required body field is absent.
    #[error("{message}")]
    MissingField {
        /// Wire name of the field.
        field: &'static str,
        /// Caller-facing help text.
        message: String,
    },

    /// A body field is present but has the wrong shape.
    #[error("{message}")]
    InvalidField {
        /// Wire name of the field.
        field: &'static str,
        /// Caller-facing help text.
        message: String,
    },

    /// Status of a Pet being written is not a known value.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Status filter is not a known value.
    #[error("Invalid status value: {0}")]
    InvalidStatusFilter(String),

    /// The `api_key` header is missing or wrong.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Upload request carried no file part.
    #[error("Please upload a file.")]
    MissingFile,

    /// Uploaded file has an unsupported content type.
    #[error("Invalid Image File please sent image in one of the following formats (gif, jpg, jpeg, png, webp, svg), got {0}")]
    UnsupportedImage(String),

    /// Request body exceeded the configured size limit.
    #[error("Request body exceeds the limit of {limit} bytes")]
    PayloadTooLarge {
        /// Configured `max_upload_bytes`.
        limit: usize,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::StoreNotInitialized { .. } => ErrorCode::StoreNotInitialized,
            AppError::MissingField { .. } => ErrorCode::MissingField,
            AppError::InvalidField { .. } => ErrorCode::ValidationError,
            AppError::InvalidStatus(_) => ErrorCode::InvalidStatus,
            AppError::InvalidStatusFilter(_) => ErrorCode::InvalidStatusValue,
            AppError::InvalidApiKey => ErrorCode::InvalidApiKey,
            AppError::MissingFile => ErrorCode::MissingFile,
            AppError::UnsupportedImage(_) => ErrorCode::UnsupportedImage,
            AppError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidId(_) => ErrorCode::InvalidId,
                CoreError::InvalidPet(_) => ErrorCode::ValidationError,
                CoreError::InvalidFileName(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::StoreNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::MissingField { field, .. } | AppError::InvalidField { field, .. } => {
                Some(serde_json::json!({ "field": field }))
            }
            AppError::InvalidStatus(value) | AppError::InvalidStatusFilter(value) => {
                Some(serde_json::json!({
                    "value": value,
                    "allowed": petstore_core::Status::ALL
                        .iter()
                        .map(|s| s.as_str())
                        .collect::<Vec<_>>(),
                }))
            }
            AppError::PayloadTooLarge { limit } => Some(serde_json::json!({ "limit": limit })),
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({ "id": id })),
            _ => None,
        }
    }

    /// Returns true for failures caused by the server rather than the caller.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::IoError
                | ErrorCode::JsonError
                | ErrorCode::StoreNotInitialized
                | ErrorCode::ConfigError
        )
    }
}
