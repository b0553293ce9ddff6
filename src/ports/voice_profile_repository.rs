//! VoiceProfileRepository port for voice profile persistence

use async_trait::async_trait;

use crate::domain::{
    foundation::{DomainError, UserId},
    voice::VoiceProfile,
};

/// Keyed store of voice profiles, one per user.
///
/// Callers serialize writes per user; implementations only need to make a
/// single `save` atomic.
#[async_trait]
pub trait VoiceProfileRepository: Send + Sync {
    /// Load the profile for a user, `None` if none has been built yet
    async fn load(&self, user_id: &UserId) -> Result<Option<VoiceProfile>, DomainError>;

    /// Insert or replace the profile for its user
    async fn save(&self, profile: &VoiceProfile) -> Result<(), DomainError>;

    /// Check if a profile exists for user
    async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError>;

    /// Delete a user's profile; deleting a missing profile is not an error
    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError>;
}
