//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use mindspace_types::error::ClassifyError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Classification failed.
    Classify(ClassifyError),
}

impl From<ClassifyError> for AppError {
    fn from(e: ClassifyError) -> Self {
        AppError::Classify(e)
    }
}

impl AppError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Classify(ClassifyError::NotReady) => {
                (StatusCode::SERVICE_UNAVAILABLE, "NOT_READY")
            }
            AppError::Classify(ClassifyError::NoMatch) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "NO_MATCH")
            }
            AppError::Classify(ClassifyError::Embedding(_)) => {
                (StatusCode::BAD_GATEWAY, "EMBEDDING_FAILED")
            }
            AppError::Classify(ClassifyError::DimensionMismatch { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DIMENSION_MISMATCH")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let AppError::Classify(e) = &self;
        let message = e.to_string();

        if status.is_server_error() {
            tracing::error!(code, error = %message, "Request failed");
        } else {
            tracing::debug!(code, error = %message, "Request rejected");
        }

        (status, Json(ApiResponse::error(code, message))).into_response()
    }
}
