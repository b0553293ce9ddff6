//! RecordSample - Command handler that folds a writing sample into a profile.

use std::sync::Arc;
use tracing::{debug, info};

use crate::adapters::UserLocks;
use crate::domain::foundation::{DomainError, SampleId, Timestamp, UserId};
use crate::domain::voice::{
    extract_metrics, is_trusted, SampleGuard, SampleSourceType, VoiceProfile, WritingSample,
};
use crate::ports::VoiceProfileRepository;

/// Command to record a new writing sample for a user.
#[derive(Debug, Clone)]
pub struct RecordSampleCommand {
    pub user_id: UserId,
    pub text: String,
    /// Opaque provenance tag from the upstream feature.
    pub source: String,
    pub source_type: SampleSourceType,
    pub date: Timestamp,
}

/// Result of a recorded sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSampleResult {
    pub sample_id: SampleId,
    pub sample_count: u32,
    pub confidence_score: u8,
    pub trusted: bool,
    /// True if this sample created the profile.
    pub created: bool,
}

/// Handler for recording samples.
pub struct RecordSampleHandler {
    repository: Arc<dyn VoiceProfileRepository>,
    locks: UserLocks,
    guard: SampleGuard,
}

impl RecordSampleHandler {
    pub fn new(
        repository: Arc<dyn VoiceProfileRepository>,
        locks: UserLocks,
        guard: SampleGuard,
    ) -> Self {
        Self {
            repository,
            locks,
            guard,
        }
    }

    pub async fn handle(&self, cmd: RecordSampleCommand) -> Result<RecordSampleResult, DomainError> {
        // 1. Reject out-of-bounds input before any analysis
        self.guard.check(&cmd.text)?;
        let sample = WritingSample::new(cmd.text, cmd.source, cmd.source_type, cmd.date)?;
        let sample_id = sample.id();
        let metrics = extract_metrics(sample.text());

        // 2. Serialize the load-modify-save cycle for this user
        let _guard = self.locks.acquire(&cmd.user_id).await;
        let now = Timestamp::now();

        // 3. Build or merge
        let (profile, created) = match self.repository.load(&cmd.user_id).await? {
            Some(mut profile) => {
                profile.merge_sample(sample, &metrics, now);
                (profile, false)
            }
            None => (
                VoiceProfile::build(cmd.user_id.clone(), sample, &metrics, now),
                true,
            ),
        };

        // 4. Persist
        self.repository.save(&profile).await?;

        let trusted = is_trusted(Some(&profile));
        if created {
            info!(user_id = %cmd.user_id, "Voice profile created");
        }
        debug!(
            user_id = %cmd.user_id,
            %sample_id,
            sample_count = profile.sample_count(),
            confidence = profile.confidence_score(),
            trusted,
            "Writing sample recorded"
        );

        Ok(RecordSampleResult {
            sample_id,
            sample_count: profile.sample_count(),
            confidence_score: profile.confidence_score(),
            trusted,
            created,
        })
    }
}
