//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CREATOR_PLATFORM` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use creator_platform::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate_for_server().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod migration;
mod payment;
mod server;
mod supabase;

pub use error::{ConfigError, ValidationError};
pub use migration::MigrationConfig;
pub use payment::PaymentConfig;
pub use server::{Environment, LogFormat, ServerConfig};
pub use supabase::SupabaseConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Shared by the HTTP server and the CLI binaries. Each binary validates
/// the sections it actually uses; the server never calls Supabase, so the
/// `supabase` section may be absent when only the server is deployed.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Supabase project configuration
    #[serde(default)]
    pub supabase: SupabaseConfig,

    /// Payment configuration (Stripe)
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Migration runner configuration
    #[serde(default)]
    pub migration: MigrationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CREATOR_PLATFORM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CREATOR_PLATFORM__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CREATOR_PLATFORM__SUPABASE__URL=...` -> `supabase.url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CREATOR_PLATFORM")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate everything the HTTP server needs
    pub fn validate_for_server(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.payment.validate()?;
        Ok(())
    }

    /// Validate everything the migration runner needs
    pub fn validate_for_migrations(&self) -> Result<(), ValidationError> {
        self.validate_supabase_client()?;
        self.supabase.validate_service_role()?;
        self.migration.validate()?;
        Ok(())
    }

    /// Validate everything the checkout return replay needs
    pub fn validate_for_payment_return(&self) -> Result<(), ValidationError> {
        self.validate_supabase_client()?;
        self.supabase.validate_anon_key()?;
        Ok(())
    }

    fn validate_supabase_client(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.supabase.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::migration::SplitStrategy;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CREATOR_PLATFORM__SUPABASE__URL",
        "CREATOR_PLATFORM__SUPABASE__ANON_KEY",
        "CREATOR_PLATFORM__SUPABASE__SERVICE_ROLE_KEY",
        "CREATOR_PLATFORM__PAYMENT__STRIPE_API_KEY",
        "CREATOR_PLATFORM__SERVER__PORT",
        "CREATOR_PLATFORM__SERVER__ENVIRONMENT",
        "CREATOR_PLATFORM__MIGRATION__SPLIT_STRATEGY",
        "CREATOR_PLATFORM__MIGRATION__CONNECTIVITY_TABLE",
    ];

    /// Helper to set environment variables for testing
    /// Uses double underscores to separate nested config values
    fn set_minimal_env() {
        env::set_var("CREATOR_PLATFORM__SUPABASE__URL", "https://abcd.supabase.co");
        env::set_var("CREATOR_PLATFORM__SUPABASE__ANON_KEY", "anon-key");
        env::set_var("CREATOR_PLATFORM__SUPABASE__SERVICE_ROLE_KEY", "service-key");
        env::set_var("CREATOR_PLATFORM__PAYMENT__STRIPE_API_KEY", "sk_test_xxx");
    }

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.supabase.url, "https://abcd.supabase.co");
        assert_eq!(config.supabase.service_role_key, "service-key");
        assert_eq!(config.payment.stripe_api_key, "sk_test_xxx");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate_for_server().is_ok());
        assert!(config.validate_for_migrations().is_ok());
        assert!(config.validate_for_payment_return().is_ok());
    }

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.supabase.verify_function, "verify-payment");
        assert_eq!(config.migration.connectivity_table, "waitlist");
        assert_eq!(config.migration.split_strategy, SplitStrategy::SqlAware);
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("CREATOR_PLATFORM__SERVER__PORT", "3000");
        env::set_var("CREATOR_PLATFORM__SERVER__ENVIRONMENT", "production");
        env::set_var("CREATOR_PLATFORM__MIGRATION__SPLIT_STRATEGY", "naive");
        env::set_var("CREATOR_PLATFORM__MIGRATION__CONNECTIVITY_TABLE", "creators");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.migration.split_strategy, SplitStrategy::Naive);
        assert_eq!(config.migration.connectivity_table, "creators");
    }

    #[test]
    fn test_migrations_require_service_role() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::remove_var("CREATOR_PLATFORM__SUPABASE__SERVICE_ROLE_KEY");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate_for_payment_return().is_ok());
        assert_eq!(
            config.validate_for_migrations(),
            Err(ValidationError::MissingRequired("SUPABASE_SERVICE_ROLE_KEY"))
        );
    }

    #[test]
    fn test_server_runs_without_supabase_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("CREATOR_PLATFORM__PAYMENT__STRIPE_API_KEY", "sk_test_xxx");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate_for_server().is_ok());
        assert_eq!(
            config.validate_for_migrations(),
            Err(ValidationError::MissingRequired("SUPABASE_URL"))
        );
        assert_eq!(
            config.validate_for_payment_return(),
            Err(ValidationError::MissingRequired("SUPABASE_URL"))
        );
    }
}
