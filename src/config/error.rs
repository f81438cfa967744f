//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address")]
    InvalidHost,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),

    #[error("Invalid Supabase URL format")]
    InvalidSupabaseUrl,

    #[error("Supabase URL must use HTTPS in production")]
    SupabaseUrlMustBeHttps,

    #[error("Invalid function name: {0}")]
    InvalidFunctionName(String),

    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    #[error("Invalid Stripe API key format")]
    InvalidStripeKey,
}
