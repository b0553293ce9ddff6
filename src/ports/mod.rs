//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `VoiceProfileRepository` - Keyed persistence of voice profiles

mod voice_profile_repository;

pub use voice_profile_repository::VoiceProfileRepository;
