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

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid Redis URL format")]
    InvalidRedisUrl,

    #[error("Invalid Resend API key format")]
    InvalidResendKey,

    #[error("Invalid from email address")]
    InvalidFromEmail,

    #[error("Invalid recipient email address")]
    InvalidToEmail,

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Supported locales must list the default locale first")]
    DefaultLocaleNotFirst,

    #[error("Duplicate locale in supported list")]
    DuplicateLocale,

    #[error("Handoff TTL must be between 1 and 86400 seconds")]
    InvalidHandoffTtl,

    #[error("Session idle timeout must be at least 60 seconds")]
    InvalidSessionIdle,
}
