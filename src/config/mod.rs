//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FREEBIES` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working
//! configuration pointing at `foodChain.db` in the working directory.
//!
//! # Example
//!
//! ```no_run
//! use freebies::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Database at {}", config.database.url);
//! ```

mod database;
mod error;
mod logging;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Database configuration (SQLite connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration (tracing subscriber)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FREEBIES` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FREEBIES__DATABASE__URL=sqlite://freebies.db` -> `database.url`
    /// - `FREEBIES__LOGGING__LEVEL=debug` -> `logging.level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FREEBIES")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("FREEBIES__DATABASE__URL");
        env::remove_var("FREEBIES__DATABASE__MAX_CONNECTIONS");
        env::remove_var("FREEBIES__DATABASE__RUN_MIGRATIONS");
        env::remove_var("FREEBIES__LOGGING__LEVEL");
        env::remove_var("FREEBIES__LOGGING__JSON");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.database.url, "sqlite://foodChain.db");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FREEBIES__DATABASE__URL", "sqlite::memory:");
        env::set_var("FREEBIES__DATABASE__RUN_MIGRATIONS", "false");
        env::set_var("FREEBIES__LOGGING__LEVEL", "debug");
        env::set_var("FREEBIES__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url, "sqlite::memory:");
        assert!(!config.database.run_migrations);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_validate_rejects_bad_pool() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FREEBIES__DATABASE__URL", "sqlite::memory:");
        env::set_var("FREEBIES__DATABASE__MAX_CONNECTIONS", "4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::SharedInMemoryPool)
        ));
    }
}
