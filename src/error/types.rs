//! Error types
//!
//! Classifies every failure the client can surface, from configuration
//! loading through browser automation to the token exchange.

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// Browser automation errors
    #[error("Browser automation failed at {step}: {message}")]
    Browser {
        /// The automation step that failed
        step: String,
        /// Error message from the WebDriver session
        message: String,
    },

    /// Timeout errors
    #[error("Operation timed out after {duration_secs} seconds: {operation}")]
    Timeout {
        /// The operation that timed out
        operation: String,
        /// Duration in seconds before timing out
        duration_secs: u64,
    },

    /// Authorization redirect errors
    #[error("Authorization failed: {reason}")]
    Authorization {
        /// The reason why the redirect was rejected
        reason: String,
    },

    /// Token exchange errors
    #[error("Token exchange failed: {reason}")]
    TokenExchange {
        /// The reason why the exchange failed
        reason: String,
    },

    /// Cache operation errors
    #[error("Cache error during {operation}: {details}")]
    Cache {
        /// The cache operation that failed
        operation: String,
        /// Detailed error description
        details: String,
    },

    /// Expected field absent from an API response body
    #[error("Response has no usable '{field}' field")]
    MissingField {
        /// The JSON field that was looked up
        field: String,
    },

    /// Validation errors
    #[error("Validation failed for {field}: {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// Error message describing the validation failure
        message: String,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a browser automation error
    pub fn browser<S: Into<String>>(step: S, message: S) -> Self {
        Self::Browser {
            step: step.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    pub fn timeout<S: Into<String>>(operation: S, duration_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration_secs,
        }
    }

    /// Create an authorization error
    pub fn authorization<S: Into<String>>(reason: S) -> Self {
        Self::Authorization {
            reason: reason.into(),
        }
    }

    /// Create a token exchange error
    pub fn token_exchange<S: Into<String>>(reason: S) -> Self {
        Self::TokenExchange {
            reason: reason.into(),
        }
    }

    /// Create a cache error
    pub fn cache<S: Into<String>>(operation: S, details: S) -> Self {
        Self::Cache {
            operation: operation.into(),
            details: details.into(),
        }
    }

    /// Create a missing response field error
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this is a transient error
    ///
    /// Nothing in the client retries; this only feeds log output.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Timeout { .. } => true,
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http(..) => "http",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Url(..) => "url",
            Error::Io(..) => "io",
            Error::Config { .. } => "config",
            Error::Browser { .. } => "browser",
            Error::Timeout { .. } => "timeout",
            Error::Authorization { .. } => "authorization",
            Error::TokenExchange { .. } => "token_exchange",
            Error::Cache { .. } => "cache",
            Error::MissingField { .. } => "response",
            Error::Validation { .. } => "validation",
        }
    }
}
