//! Response DTOs.
//!
//! Every response, success or failure, is wrapped in the same envelope:
//! `{ "status", "message", "data" | "error" }`.

use serde::{Deserialize, Serialize};

/// Envelope status label for successful responses.
pub const STATUS_SUCCESS: &str = "success";
/// Envelope status label for failed responses.
pub const STATUS_ERROR: &str = "error";

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `"success"`.
    pub status: String,
    /// Human-readable summary.
    pub message: String,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
            data,
        }
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `"error"`.
    pub status: String,
    /// Human-readable message.
    pub message: String,
    /// Optional elaboration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl ErrorBody {
    /// Creates an error body.
    pub fn new(message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            message: message.into(),
            error: detail.map(|detail| ErrorDetail { detail }),
        }
    }
}

/// The `error` member of an error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Record store status.
    pub store: String,
}
