//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_MATRIX` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_matrix::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Decisions stored in {}", config.storage.data_dir().display());
//! ```

mod error;
mod log;
mod report;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use log::LogConfig;
pub use report::ReportConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Decision storage location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging setup
    #[serde(default)]
    pub log: LogConfig,

    /// Report binary output
    #[serde(default)]
    pub report: ReportConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_MATRIX` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_MATRIX__STORAGE__DATA_DIR=/var/lib/decisions` -> `storage.data_dir`
    /// - `DECISION_MATRIX__LOG__JSON=true` -> `log.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("DECISION_MATRIX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty data directory or an unusable
    /// log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
