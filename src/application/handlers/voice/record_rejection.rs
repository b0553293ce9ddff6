//! RecordRejection - Command handler for words the user struck from generated text.

use std::sync::Arc;
use tracing::{debug, info};

use crate::adapters::UserLocks;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::voice::RejectionOutcome;
use crate::ports::VoiceProfileRepository;

/// Command to record a rejected word.
#[derive(Debug, Clone)]
pub struct RecordRejectionCommand {
    pub user_id: UserId,
    pub word: String,
    /// Surrounding text the word was rejected in.
    pub context: String,
}

/// Handler for recording rejections.
pub struct RecordRejectionHandler {
    repository: Arc<dyn VoiceProfileRepository>,
    locks: UserLocks,
}

impl RecordRejectionHandler {
    pub fn new(repository: Arc<dyn VoiceProfileRepository>, locks: UserLocks) -> Self {
        Self { repository, locks }
    }

    pub async fn handle(&self, cmd: RecordRejectionCommand) -> Result<RejectionOutcome, DomainError> {
        let _guard = self.locks.acquire(&cmd.user_id).await;

        let mut profile = self
            .repository
            .load(&cmd.user_id)
            .await?
            .ok_or_else(|| profile_not_found(&cmd.user_id))?;

        let outcome = profile.record_rejection(&cmd.word, cmd.context, Timestamp::now())?;
        self.repository.save(&profile).await?;

        if outcome.newly_avoided {
            info!(user_id = %cmd.user_id, word = %outcome.word, "Word promoted to avoided");
        } else {
            debug!(
                user_id = %cmd.user_id,
                word = %outcome.word,
                rejected_count = outcome.rejected_count,
                "Word rejection recorded"
            );
        }

        Ok(outcome)
    }
}

pub(super) fn profile_not_found(user_id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::ProfileNotFound, "Voice profile not found")
        .with_detail("user_id", user_id.to_string())
}
