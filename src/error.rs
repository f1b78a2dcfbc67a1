//! Error types for the contacts bridge.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by a contact provider while opening its store or running a query.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The contact store could not be opened
    #[error("Contact store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store accepted the query but failed to execute it
    #[error("Contact query failed: {0}")]
    QueryFailed(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to read local contact data
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Errors delivered through a pending contact request.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The provider failed; the request is dropped without retry
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The blocking worker running the fetch panicked or was shut down
    #[error("Contact worker failed: {0}")]
    Worker(String),

    /// No tokio runtime was available to schedule work on
    #[error("No async runtime available: {0}")]
    NoRuntime(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ProviderError
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Convenience type alias for Results with BridgeError
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::StoreUnavailable("access denied".to_string());
        assert_eq!(err.to_string(), "Contact store unavailable: access denied");

        let err = ConfigError::MissingVar("DEX_API_KEY".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: DEX_API_KEY"
        );

        let err = BridgeError::Worker("task panicked".to_string());
        assert_eq!(err.to_string(), "Contact worker failed: task panicked");
    }

    #[test]
    fn test_provider_error_is_transparent_in_bridge_error() {
        let err: BridgeError = ProviderError::QueryFailed("index offline".to_string()).into();
        assert_eq!(err.to_string(), "Contact query failed: index offline");
        assert!(matches!(
            err,
            BridgeError::Provider(ProviderError::QueryFailed(_))
        ));
    }

    #[test]
    fn test_api_error_variants() {
        let err = ProviderError::ApiError {
            status: 500,
            message: "Internal".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("Internal"));
    }
}
