/**
 * Backend Error Types
 *
 * This module defines the error taxonomy surfaced by the write paths and the
 * HTTP handlers. Every variant maps to exactly one HTTP status code.
 *
 * # Error Categories
 *
 * - `NotFound` - referenced parent comment, space or target entity absent
 * - `InvalidInput` - missing field, malformed emoji, depth limit reached
 * - `ConstraintConflict` - duplicate reaction or subscription
 * - `Unauthorized` - missing, invalid or expired credential
 * - `Internal` - unclassified store failure
 *
 * Traversal (thread assembly, hierarchy filtering) never raises these on its
 * own; only store failures propagate out of it, as `Internal`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use kspace::backend::error::BackendError;
///
/// let err = BackendError::not_found("Parent comment not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A referenced entity does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The request is malformed or violates a domain rule
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A uniqueness constraint rejected the write
    #[error("Conflict: {message}")]
    ConstraintConflict { message: String },

    /// The caller is not authenticated
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Unclassified failure; the message is safe to show to clients
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConstraintConflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotFound` - 404 Not Found
    /// - `InvalidInput` - 400 Bad Request
    /// - `ConstraintConflict` - 409 Conflict
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Self::ConstraintConflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message shown to clients
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { message }
            | Self::InvalidInput { message }
            | Self::ConstraintConflict { message }
            | Self::Unauthorized { message }
            | Self::Internal { message } => message.clone(),
        }
    }
}

/// Payload validation failures are the caller's fault
impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        Self::invalid_input(err.to_string())
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConstraintViolation(detail) => {
                tracing::debug!("Constraint violation: {}", detail);
                Self::conflict("Resource already exists")
            }
            StoreError::MissingReference(detail) => {
                tracing::debug!("Missing reference: {}", detail);
                Self::not_found("Referenced resource not found")
            }
            other => {
                tracing::error!("Store failure: {}", other);
                Self::internal("Internal server error")
            }
        }
    }
}
