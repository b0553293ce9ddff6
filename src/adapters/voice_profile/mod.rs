//! Voice profile persistence adapters.
//!
//! - `InMemoryVoiceProfileRepository` - process-local map, for tests and embedding hosts
//! - `FsVoiceProfileRepository` - one JSON file per user, atomic replace on save
//! - `UserLocks` - per-user write serialization shared by the write handlers

mod filesystem;
mod in_memory;
mod user_locks;

pub use filesystem::FsVoiceProfileRepository;
pub use in_memory::InMemoryVoiceProfileRepository;
pub use user_locks::UserLocks;

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::VoiceProfileRepository;

/// Build the repository selected by configuration
pub fn repository_from_config(config: &StorageConfig) -> Arc<dyn VoiceProfileRepository> {
    match config.backend {
        StorageBackend::Memory => Arc::new(InMemoryVoiceProfileRepository::new()),
        StorageBackend::Filesystem => Arc::new(FsVoiceProfileRepository::new(&config.profile_dir)),
    }
}
