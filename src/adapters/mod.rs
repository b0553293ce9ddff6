//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `voice_profile` - Voice profile repositories (in-memory, filesystem) and write locks

pub mod voice_profile;

pub use voice_profile::{
    repository_from_config, FsVoiceProfileRepository, InMemoryVoiceProfileRepository, UserLocks,
};
