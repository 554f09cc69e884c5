//! Error Handling Module
//!
//! This module provides the error type for the library:
//! - The core error enum (`RestError`) with coarse categories (`ErrorCategory`)
//! - Constructors and accessors used by the execution layer
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use restkit::error::{ErrorCategory, RestError};
//!
//! let error = RestError::api_error(404, "Not found");
//! assert_eq!(error.status_code(), Some(404));
//! assert_eq!(error.category(), ErrorCategory::Client);
//! ```

mod conversions;

use thiserror::Error;

/// Errors produced by the client.
///
/// Every HTTP failure carries a human-readable reason; errors derived from a
/// response additionally expose the observed status code via
/// [`RestError::status_code`].
#[derive(Error, Debug)]
pub enum RestError {
    /// Transport-level failure (connection, DNS, timeout, TLS).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Response body was not valid JSON.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API returned an error status with no more specific classification.
    #[error("API error {code}: {message}")]
    ApiError {
        /// HTTP status code
        code: u16,
        /// Error message
        message: String,
        /// Additional error details
        details: Option<serde_json::Value>,
    },

    /// Authentication/authorization failure (401/403).
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Resource not found (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (429).
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// Request rejected by the server or malformed locally (400/413/415).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Coarse error category for presentation and branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport-level problems
    Network,
    /// Body parsing/decoding problems
    Parsing,
    /// Authentication/authorization problems
    Auth,
    /// Other 4xx client errors
    Client,
    /// 5xx server errors
    Server,
    /// Local configuration problems
    Configuration,
}

impl RestError {
    /// Create a generic API error.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Create a generic API error with structured details.
    pub fn api_error_with_details(
        code: u16,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    /// The HTTP status code observed for this error, when one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            Self::NotFound(_) => Some(404),
            Self::RateLimitError(_) => Some(429),
            _ => None,
        }
    }

    /// Whether a later identical request could plausibly succeed.
    ///
    /// The client itself never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) | Self::RateLimitError(_) => true,
            Self::ApiError { code, .. } => *code >= 500,
            _ => false,
        }
    }

    /// Coarse category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) => ErrorCategory::Network,
            Self::JsonError(_) | Self::ParseError(_) => ErrorCategory::Parsing,
            Self::AuthenticationError(_) => ErrorCategory::Auth,
            Self::NotFound(_) | Self::RateLimitError(_) | Self::InvalidInput(_) => {
                ErrorCategory::Client
            }
            Self::ApiError { code, .. } => {
                if *code >= 500 {
                    ErrorCategory::Server
                } else {
                    ErrorCategory::Client
                }
            }
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
        }
    }
}
