//! Custom assertion macros and utilities
//!
//! Provides assertion macros for checking HTTP responses with descriptive
//! failure messages.

/// Assert the status of a `(StatusCode, Value)` response pair
///
/// Prints the body on failure, which usually carries the error message.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        let (status, body) = &$response;
        assert_eq!(*status, $status, "unexpected status, body: {}", body);
    };
}

/// Assert that an error response carries the given message
#[macro_export]
macro_rules! assert_error_message {
    ($response:expr, $status:expr, $message:expr) => {
        let (status, body) = &$response;
        assert_eq!(*status, $status, "unexpected status, body: {}", body);
        assert_eq!(body["error"], $message);
        assert_eq!(body["status"], $status.as_u16());
    };
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
