//! RecordPreference - Command handler for explicit style preferences.

use std::sync::Arc;
use tracing::debug;

use super::record_rejection::profile_not_found;
use crate::adapters::UserLocks;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::VoiceProfileRepository;

/// One explicit preference expressed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoicePreference {
    /// The user rewrote `original` as `preferred` by hand.
    Replacement { original: String, preferred: String },
    Phrase(String),
    AvoidedWord(String),
    IndustryTerm(String),
}

/// Command to record a preference.
#[derive(Debug, Clone)]
pub struct RecordPreferenceCommand {
    pub user_id: UserId,
    pub preference: VoicePreference,
}

/// Result of recording a preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPreferenceResult {
    /// False when the preference was already known and nothing changed.
    pub changed: bool,
}

/// Handler for recording preferences.
pub struct RecordPreferenceHandler {
    repository: Arc<dyn VoiceProfileRepository>,
    locks: UserLocks,
}

impl RecordPreferenceHandler {
    pub fn new(repository: Arc<dyn VoiceProfileRepository>, locks: UserLocks) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(
        &self,
        cmd: RecordPreferenceCommand,
    ) -> Result<RecordPreferenceResult, DomainError> {
        let _guard = self.locks.acquire(&cmd.user_id).await;

        let mut profile = self
            .repository
            .load(&cmd.user_id)
            .await?
            .ok_or_else(|| profile_not_found(&cmd.user_id))?;

        let now = Timestamp::now();
        let changed = match &cmd.preference {
            VoicePreference::Replacement {
                original,
                preferred,
            } => {
                profile.record_preference(original, preferred, now)?;
                true
            }
            VoicePreference::Phrase(phrase) => profile.add_preferred_phrase(phrase, now),
            VoicePreference::AvoidedWord(word) => profile.add_avoided_word(word, now),
            VoicePreference::IndustryTerm(term) => profile.add_industry_term(term, now),
        };

        if changed {
            self.repository.save(&profile).await?;
        }
        debug!(user_id = %cmd.user_id, preference = ?cmd.preference, changed, "Voice preference recorded");

        Ok(RecordPreferenceResult { changed })
    }
}
