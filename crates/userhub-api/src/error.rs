//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use userhub_core::error::{AppError, ErrorKind};

use crate::dto::response::ErrorBody;

/// Message shown for every server-side failure.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// An `AppError` on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal | ErrorKind::Database | ErrorKind::Configuration => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let AppError {
            kind,
            message,
            detail,
            ..
        } = self.0;

        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            if message != INTERNAL_MESSAGE {
                tracing::error!(kind = %kind, error = %message, "Internal server error");
            }
            ErrorBody::new(INTERNAL_MESSAGE, detail)
        } else {
            ErrorBody::new(message, detail)
        };

        (status, Json(body)).into_response()
    }
}
