//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FINANCE_ADVISOR` prefix and nested values use double underscores as separators.
//!
//! Every value has a default, so an empty environment yields a runnable
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use finance_advisor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Engine timeout: {:?}", config.engine.timeout());
//! ```

mod engine;
mod error;
mod server;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Scoring engine launch settings
    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FINANCE_ADVISOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FINANCE_ADVISOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FINANCE_ADVISOR__ENGINE__TIMEOUT_MS=4000` -> `engine.timeout_ms = 4000`
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
                    .prefix("FINANCE_ADVISOR")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The engine must give up before the HTTP layer does, otherwise the
    /// fallback advice would never reach the client.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.engine.validate()?;

        let request_ms = self.server.request_timeout_secs.saturating_mul(1000);
        if self.engine.timeout_ms >= request_ms {
            return Err(ValidationError::EngineTimeoutExceedsRequest {
                engine_ms: self.engine.timeout_ms,
                request_ms,
            });
        }
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
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "FINANCE_ADVISOR__SERVER__PORT",
        "FINANCE_ADVISOR__SERVER__ENVIRONMENT",
        "FINANCE_ADVISOR__ENGINE__PROGRAM",
        "FINANCE_ADVISOR__ENGINE__TIMEOUT_MS",
        "FINANCE_ADVISOR__ENGINE__ARGS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.engine.timeout_ms, 4000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_engine_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FINANCE_ADVISOR__ENGINE__PROGRAM", "/usr/bin/advisor");
        env::set_var("FINANCE_ADVISOR__ENGINE__TIMEOUT_MS", "2500");
        env::set_var("FINANCE_ADVISOR__ENGINE__ARGS", "--json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.program, "/usr/bin/advisor");
        assert_eq!(config.engine.timeout_ms, 2500);
        assert_eq!(config.engine.args_list(), vec!["--json"]);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FINANCE_ADVISOR__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FINANCE_ADVISOR__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_engine_timeout_must_undercut_request_timeout() {
        let config = AppConfig {
            server: ServerConfig {
                request_timeout_secs: 4,
                ..Default::default()
            },
            engine: EngineConfig {
                timeout_ms: 4000,
                ..Default::default()
            },
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::EngineTimeoutExceedsRequest { .. })
        ));
    }
}
