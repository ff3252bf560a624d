// Rust guideline compliant 2026-10-17

//! Response envelopes for API outputs.

use crate::error::{AppError, ErrorCode};
use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by delete and upload operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP-style status code of the outcome.
    pub code: u16,
    /// Outcome kind, or the content type for uploads.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable message.
    pub message: String,
}

impl ApiResponse {
    /// Creates a successful acknowledgement.
    #[must_use]
    pub fn ok(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: 200,
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Standard error envelope for API responses.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}
