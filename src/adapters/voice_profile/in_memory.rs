//! In-Memory Voice Profile Repository
//!
//! Stores profiles in a process-local map. Useful for testing and for hosts
//! that persist profiles elsewhere.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::voice::VoiceProfile;
use crate::ports::VoiceProfileRepository;

/// In-memory storage for voice profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryVoiceProfileRepository {
    profiles: Arc<RwLock<HashMap<UserId, VoiceProfile>>>,
}

impl InMemoryVoiceProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    /// Clear all stored profiles (useful for tests)
    pub async fn clear(&self) {
        self.profiles.write().await.clear();
    }
}

#[async_trait]
impl VoiceProfileRepository for InMemoryVoiceProfileRepository {
    async fn load(&self, user_id: &UserId) -> Result<Option<VoiceProfile>, DomainError> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }

    async fn save(&self, profile: &VoiceProfile) -> Result<(), DomainError> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id().clone(), profile.clone());
        Ok(())
    }

    async fn exists(&self, user_id: &UserId) -> Result<bool, DomainError> {
        Ok(self.profiles.read().await.contains_key(user_id))
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.profiles.write().await.remove(user_id);
        Ok(())
    }
}
