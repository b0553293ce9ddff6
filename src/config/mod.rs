//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `VOICEPRINT` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working config.
//!
//! # Example
//!
//! ```no_run
//! use voiceprint::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Minimum sample: {} words", config.voice.min_sample_words);
//! ```

mod error;
mod logging;
mod storage;
mod voice;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use storage::{StorageBackend, StorageConfig};
pub use voice::VoiceConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Sample limits
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Profile repository selection
    #[serde(default)]
    pub storage: StorageConfig,

    /// Tracing output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VOICEPRINT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VOICEPRINT__VOICE__MIN_SAMPLE_WORDS=30` -> `voice.min_sample_words = 30`
    /// - `VOICEPRINT__STORAGE__BACKEND=filesystem` -> `storage.backend = filesystem`
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
                    .prefix("VOICEPRINT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.voice.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
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

    const VARS: &[&str] = &[
        "VOICEPRINT__VOICE__MIN_SAMPLE_WORDS",
        "VOICEPRINT__VOICE__MAX_SAMPLE_CHARS",
        "VOICEPRINT__STORAGE__BACKEND",
        "VOICEPRINT__STORAGE__PROFILE_DIR",
        "VOICEPRINT__LOGGING__LEVEL",
        "VOICEPRINT__LOGGING__JSON",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VOICEPRINT__VOICE__MIN_SAMPLE_WORDS", "30");
        env::set_var("VOICEPRINT__STORAGE__BACKEND", "filesystem");
        env::set_var("VOICEPRINT__STORAGE__PROFILE_DIR", "/var/lib/voiceprint");
        env::set_var("VOICEPRINT__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.voice.min_sample_words, 30);
        assert_eq!(config.voice.max_sample_chars, 50_000);
        assert_eq!(config.storage.backend, StorageBackend::Filesystem);
        assert_eq!(config.storage.profile_dir, PathBuf::from("/var/lib/voiceprint"));
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_validated_rejects_bad_bounds() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VOICEPRINT__VOICE__MIN_SAMPLE_WORDS", "0");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidMinSampleWords))
        ));
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("VOICEPRINT__VOICE__MAX_SAMPLE_CHARS", "lots");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
