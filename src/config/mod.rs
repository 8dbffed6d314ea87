//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROPOSAL_KIT` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use proposal_kit::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Snapshots stored in {}", config.storage.snapshot_dir.display());
//! ```

mod error;
mod share;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use share::ShareConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PROPOSAL_KIT";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Snapshot storage (directory, key, quota)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Share link base URL
    #[serde(default)]
    pub share: ShareConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROPOSAL_KIT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROPOSAL_KIT__STORAGE__SNAPSHOT_DIR=/var/lib/proposal` -> `storage.snapshot_dir`
    /// - `PROPOSAL_KIT__SHARE__BASE_URL=https://...` -> `share.base_url`
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
                    .prefix(ENV_PREFIX)
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
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.share.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "PROPOSAL_KIT__STORAGE__SNAPSHOT_DIR",
        "PROPOSAL_KIT__STORAGE__SNAPSHOT_KEY",
        "PROPOSAL_KIT__STORAGE__MAX_SNAPSHOT_BYTES",
        "PROPOSAL_KIT__SHARE__BASE_URL",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.snapshot_key, "xore-roofing-proposal-state-v1");
        assert_eq!(config.share.base_url, "http://localhost:5173/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROPOSAL_KIT__STORAGE__SNAPSHOT_DIR", "/tmp/proposals");
        env::set_var("PROPOSAL_KIT__STORAGE__MAX_SNAPSHOT_BYTES", "1024");
        env::set_var("PROPOSAL_KIT__SHARE__BASE_URL", "https://proposals.example.com/xore");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.snapshot_dir, PathBuf::from("/tmp/proposals"));
        assert_eq!(config.storage.max_snapshot_bytes, 1024);
        assert_eq!(config.share.base_url, "https://proposals.example.com/xore");
    }

    #[test]
    fn test_validate_reports_invalid_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROPOSAL_KIT__STORAGE__SNAPSHOT_KEY", "proposals/current");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidSnapshotKey));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
