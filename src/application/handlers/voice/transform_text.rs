//! TransformText - Query handler that rewrites generated text in the user's voice.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::UserId;
use crate::domain::voice::{self, TransformPreview, TransformResult, TrustLevel, VoiceProfile};
use crate::ports::VoiceProfileRepository;

/// Query to transform already-generated text.
#[derive(Debug, Clone)]
pub struct TransformTextQuery {
    pub user_id: UserId,
    pub text: String,
}

/// Transformed text plus the trust state that gated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTextResult {
    pub result: TransformResult,
    pub trust_level: TrustLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformPreviewResult {
    pub preview: TransformPreview,
    pub trust_level: TrustLevel,
}

/// Handler for transforming text.
///
/// Never fails: without a usable profile the text comes back unchanged.
pub struct TransformTextHandler {
    repository: Arc<dyn VoiceProfileRepository>,
}

impl TransformTextHandler {
    pub fn new(repository: Arc<dyn VoiceProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: TransformTextQuery) -> TransformTextResult {
        let profile = self.load(&query.user_id).await;
        let trust_level = TrustLevel::of(profile.as_ref());

        let result = match &profile {
            Some(profile) => voice::transform(&query.text, profile),
            None => TransformResult {
                text: query.text,
                changes: Vec::new(),
            },
        };

        debug!(user_id = %query.user_id, %trust_level, changes = result.changes.len(), "Text transformed");
        TransformTextResult {
            result,
            trust_level,
        }
    }

    /// Like [`handle`](Self::handle), but returns a before/after preview.
    pub async fn preview(&self, query: TransformTextQuery) -> TransformPreviewResult {
        let profile = self.load(&query.user_id).await;
        let trust_level = TrustLevel::of(profile.as_ref());

        let preview = match &profile {
            Some(profile) => voice::preview(&query.text, profile),
            None => TransformPreview {
                original: query.text.clone(),
                transformed: query.text,
                changes: Vec::new(),
            },
        };

        TransformPreviewResult {
            preview,
            trust_level,
        }
    }

    async fn load(&self, user_id: &UserId) -> Option<VoiceProfile> {
        match self.repository.load(user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Voice profile unavailable, text left unchanged");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryVoiceProfileRepository;
    use crate::application::handlers::voice::test_support::{
        test_user_id, trusted_profile, untrusted_profile, FailingRepository,
    };
    use crate::domain::foundation::Timestamp;

    fn query(text: &str) -> TransformTextQuery {
        TransformTextQuery {
            user_id: test_user_id(),
            text: text.to_string(),
        }
    }

    async fn handler_with(profile: VoiceProfile) -> TransformTextHandler {
        let repo = Arc::new(InMemoryVoiceProfileRepository::new());
        repo.save(&profile).await.unwrap();
        TransformTextHandler::new(repo)
    }

    #[tokio::test]
    async fn test_trusted_profile_replaces_avoided_words() {
        let mut profile = trusted_profile();
        profile.add_avoided_word("leverage", Timestamp::now());
        let handler = handler_with(profile).await;

        let result = handler.handle(query("We will leverage this.")).await;

        assert_eq!(result.trust_level, TrustLevel::Trusted);
        assert_eq!(result.result.text, "We will use this.");
        assert_eq!(result.result.changes.len(), 1);
    }

    #[tokio::test]
    async fn test_degraded_profile_leaves_text() {
        let mut profile = untrusted_profile();
        profile.add_avoided_word("leverage", Timestamp::now());
        let handler = handler_with(profile).await;

        let result = handler.handle(query("We will leverage this.")).await;

        assert_eq!(result.trust_level, TrustLevel::DegradedTrust);
        assert_eq!(result.result.text, "We will leverage this.");
        assert!(result.result.changes.is_empty());
    }

    #[tokio::test]
    async fn test_missing_profile_leaves_text() {
        let handler = TransformTextHandler::new(Arc::new(InMemoryVoiceProfileRepository::new()));

        let result = handler.handle(query("Anything at all.")).await;

        assert_eq!(result.trust_level, TrustLevel::MissingProfile);
        assert_eq!(result.result.text, "Anything at all.");
    }

    #[tokio::test]
    async fn test_storage_failure_leaves_text() {
        let handler = TransformTextHandler::new(Arc::new(FailingRepository));

        let result = handler.preview(query("We will leverage this.")).await;

        assert_eq!(result.preview.original, result.preview.transformed);
        assert!(result.preview.changes.is_empty());
    }

    #[tokio::test]
    async fn test_preview_reports_found_words() {
        let mut profile = trusted_profile();
        profile.add_avoided_word("synergy", Timestamp::now());
        profile.add_avoided_word("paradigm", Timestamp::now());
        let handler = handler_with(profile).await;

        let result = handler.preview(query("Real synergy here.")).await;

        assert_eq!(result.preview.original, "Real synergy here.");
        assert_eq!(result.preview.transformed, "Real teamwork here.");
        assert_eq!(result.preview.changes.len(), 1);
        assert_eq!(result.preview.changes[0].original, "synergy");
    }
}
