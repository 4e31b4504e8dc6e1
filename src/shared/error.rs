//! Shared Error Types
//!
//! This module defines error types raised while turning request payloads into
//! domain values. They are independent of the HTTP layer so the same checks can
//! run in handlers, in tests, and in any future client.
//!
//! # Error Categories
//!
//! - `ValidationError` - A field is present but its value is not acceptable
//! - `MissingField` - A required field is absent or blank
//!
//! # Usage
//!
//! ```rust
//! use kspace::shared::error::SharedError;
//!
//! let error = SharedError::validation("emoji", "Allowed emojis: 🔥, 🎉, 🤘");
//! ```
use thiserror::Error;

/// Payload validation failures shared by every layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A required field was not supplied
    #[error("Missing required field '{field}'")]
    MissingField {
        /// The field that was expected
        field: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new missing-field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("emoji", "Invalid emoji");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "emoji");
                assert_eq!(message, "Invalid emoji");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_missing_field_display() {
        let error = SharedError::missing("text");
        let display = format!("{}", error);
        assert!(display.contains("Missing required field"));
        assert!(display.contains("text"));
    }
}
