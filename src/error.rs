//! Error types for the user service client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Normalized failure shape surfaced for every rejected API call.
///
/// Matches the user service's error body verbatim. Failures that never
/// produce a structured body (transport errors, unparseable responses)
/// are collapsed into the fixed [`ApiError::network`] value, so callers
/// always see this one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub title: String,
    pub code: String,
    pub message: String,
}

impl ApiError {
    /// The fixed error used for transport-level failures.
    pub fn network() -> Self {
        Self {
            title: "Network Error".to_string(),
            code: "NETWORK_ERROR".to_string(),
            message: "Please check your internet connection and try again".to_string(),
        }
    }

    /// Whether this is the fixed transport-failure error.
    #[must_use]
    pub fn is_network(&self) -> bool {
        self.code == "NETWORK_ERROR"
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.title, self.code, self.message)
    }
}

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration (base URL / API key) is missing or empty.
    /// Fatal for any API operation; surfaced before any network attempt.
    #[error("configuration error: {0}")]
    Config(String),

    /// The API rejected the request, or the transport failed.
    #[error("{0}")]
    Api(ApiError),

    /// An operation that requires a session found no stored access token.
    #[error("not authenticated: no access token in storage")]
    NotAuthenticated,

    /// Secure storage write failed. Carries the underlying cause's message.
    #[error("token write failed: {0}")]
    StorageWrite(String),

    /// Secure storage read failed. "Not found" is not a read failure.
    #[error("token read failed: {0}")]
    StorageRead(String),

    /// Secure storage clear failed.
    #[error("token clear failed: {0}")]
    StorageClear(String),
}

impl Error {
    /// The normalized API error, if this is an API failure.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_shape() {
        let err = ApiError::network();
        assert_eq!(err.code, "NETWORK_ERROR");
        assert_eq!(err.title, "Network Error");
        assert!(err.is_network());
    }

    #[test]
    fn test_api_error_deserializes_server_body() {
        let body = r#"{"title":"Unauthorized","code":"AUTH_401","message":"Invalid credentials"}"#;
        let err: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(err.code, "AUTH_401");
        assert!(!err.is_network());
    }

    #[test]
    fn test_error_display() {
        let err = Error::Api(ApiError::network());
        assert!(err.to_string().contains("NETWORK_ERROR"));
        let err = Error::NotAuthenticated;
        assert!(err.to_string().contains("not authenticated"));
    }

    #[test]
    fn test_as_api() {
        let err = Error::Api(ApiError::network());
        assert!(err.as_api().is_some());
        assert!(Error::NotAuthenticated.as_api().is_none());
    }
}
