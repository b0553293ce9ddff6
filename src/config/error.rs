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

    #[error("Minimum sample words must be at least 1")]
    InvalidMinSampleWords,

    #[error("Maximum sample characters ({max_chars}) must exceed minimum sample words ({min_words})")]
    InvalidSampleBounds { min_words: usize, max_chars: usize },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
