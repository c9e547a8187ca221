//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid collection URL format")]
    InvalidCollectionUrl,

    #[error("Invalid identity exchange URL format")]
    InvalidExchangeUrl,

    #[error("Remote URLs must use HTTPS in production")]
    UrlMustBeHttps,

    #[error("Login delay exceeds maximum allowed (10000 ms)")]
    LoginDelayTooLong,
}
