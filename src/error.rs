//! The tagged dispatch error and failure classification.
//!
//! Handlers fail in one of two ways: deliberately, by raising an [`ApiError`]
//! with a chosen status code and message, or accidentally, with any other
//! error type. [`classify`] collapses the second kind into a generic
//! `500 Internal Server Error` so the original cause never reaches the
//! response body.

use serde::Serialize;
use std::fmt;
use tracing::warn;

/// A dispatch failure carrying an HTTP status code and a message.
///
/// Raised by handler code for domain errors (validation failure, forbidden,
/// not found) and synthesized by the dispatcher for empty or silent chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// HTTP status code written to the response
    pub status: u16,
    /// Message serialized as `{"message": ...}` by the default error handler
    pub message: String,
}

impl ApiError {
    /// Create an error with an arbitrary status code and message.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    /// The error synthesized for an empty or silently-completed chain.
    pub fn not_found() -> Self {
        ApiError::new(404, "Not Found")
    }

    /// The error every unclassified failure is normalized to.
    pub fn internal() -> Self {
        ApiError::new(500, "Internal Server Error")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Classify a handler failure.
///
/// An [`ApiError`] passes through untouched; anything else is logged and
/// normalized to [`ApiError::internal`], discarding the original message from
/// the response.
pub fn classify(err: anyhow::Error) -> ApiError {
    match err.downcast::<ApiError>() {
        Ok(api) => api,
        Err(other) => {
            warn!(error = %other, "unclassified handler failure");
            ApiError::internal()
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_explicit_error_passes_through() {
        let err = anyhow::Error::from(ApiError::new(403, "Forbidden"));
        let api = classify(err);
        assert_eq!(api, ApiError::new(403, "Forbidden"));
    }

    #[test]
    fn test_unclassified_error_is_normalized() {
        let api = classify(anyhow::anyhow!("connection reset by peer"));
        assert_eq!(api.status, 500);
        assert_eq!(api.message, "Internal Server Error");
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiError::not_found().to_string(), "404 Not Found");
    }
}
