/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly, and
 * the conversions that fold axum's extractor rejections into it.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::error::types::BackendError;

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: status.as_u16(),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self.message());
        }
        (status, Json(ErrorBody::new(status, self.message()))).into_response()
    }
}

/// Malformed, mistyped or non-JSON bodies
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        BackendError::invalid_input(rejection.body_text())
    }
}

/// Path segments that do not parse (e.g. a non-UUID id)
impl From<PathRejection> for BackendError {
    fn from(rejection: PathRejection) -> Self {
        BackendError::invalid_input(rejection.body_text())
    }
}
