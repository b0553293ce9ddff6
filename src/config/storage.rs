//! Profile storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Which repository adapter holds voice profiles
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    Filesystem,
}

/// Profile storage configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Base directory for the filesystem backend
    #[serde(default = "default_profile_dir")]
    pub profile_dir: PathBuf,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::Filesystem && self.profile_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("storage.profile_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            profile_dir: default_profile_dir(),
        }
    }
}

fn default_profile_dir() -> PathBuf {
    PathBuf::from("./data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.profile_dir, PathBuf::from("./data"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_filesystem_backend_requires_dir() {
        let config = StorageConfig {
            backend: StorageBackend::Filesystem,
            profile_dir: PathBuf::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("storage.profile_dir"))
        );
    }

    #[test]
    fn test_memory_backend_ignores_dir() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            profile_dir: PathBuf::new(),
        };
        assert!(config.validate().is_ok());
    }
}
