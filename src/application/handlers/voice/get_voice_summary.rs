//! GetVoiceSummary - Query handler for a displayable profile summary.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::voice::VoiceProfileSummary;
use crate::ports::VoiceProfileRepository;

/// Query to get a user's voice profile summary.
#[derive(Debug, Clone)]
pub struct GetVoiceSummaryQuery {
    pub user_id: UserId,
}

/// Handler for getting profile summaries.
pub struct GetVoiceSummaryHandler {
    repository: Arc<dyn VoiceProfileRepository>,
}

impl GetVoiceSummaryHandler {
    pub fn new(repository: Arc<dyn VoiceProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetVoiceSummaryQuery,
    ) -> Result<Option<VoiceProfileSummary>, DomainError> {
        let profile = self.repository.load(&query.user_id).await?;
        Ok(profile.as_ref().map(VoiceProfileSummary::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryVoiceProfileRepository;
    use crate::application::handlers::voice::test_support::{
        test_user_id, trusted_profile, FailingRepository,
    };
    use crate::domain::foundation::ErrorCode;
    use crate::domain::voice::TrustLevel;

    #[tokio::test]
    async fn test_summary_exists() {
        let repo = Arc::new(InMemoryVoiceProfileRepository::new());
        repo.save(&trusted_profile()).await.unwrap();
        let handler = GetVoiceSummaryHandler::new(repo);

        let summary = handler
            .handle(GetVoiceSummaryQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(summary.trust_level, TrustLevel::Trusted);
        assert!(!summary.top_words.is_empty());
    }

    #[tokio::test]
    async fn test_summary_not_found() {
        let handler = GetVoiceSummaryHandler::new(Arc::new(InMemoryVoiceProfileRepository::new()));

        let summary = handler
            .handle(GetVoiceSummaryQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert!(summary.is_none());
    }

    #[tokio::test]
    async fn test_summary_propagates_storage_error() {
        let handler = GetVoiceSummaryHandler::new(Arc::new(FailingRepository));

        let err = handler
            .handle(GetVoiceSummaryQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
