//! Session error types

use thiserror::Error;

/// Errors a remote session can produce
///
/// Nothing here is retried or recovered locally - every variant
/// propagates to the invoking harness as a failed test.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to connect to hub: {0}")]
    ConnectionFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    #[error("WebDriver command failed: {0}")]
    Protocol(String),
}

impl From<SessionError> for String {
    fn from(err: SessionError) -> String {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_cause() {
        let err = SessionError::ConnectionFailed("connection refused".to_string());
        assert_eq!(err.to_string(), "Failed to connect to hub: connection refused");

        let err = SessionError::ElementNotFound("name='q'".to_string());
        assert_eq!(err.to_string(), "Element not found: name='q'");

        let err = SessionError::AssertionFailed("title mismatch".to_string());
        assert_eq!(err.to_string(), "Assertion failed: title mismatch");
    }

    #[test]
    fn test_into_string() {
        let message: String = SessionError::NavigationFailed("timeout".to_string()).into();
        assert_eq!(message, "Navigation failed: timeout");
    }
}
