//! GetGenerationInstructions - Query handler for voice-matching prompt text.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::UserId;
use crate::domain::voice::{render_instructions, TrustLevel};
use crate::ports::VoiceProfileRepository;

/// Query for the instructions to prepend to a generation prompt.
#[derive(Debug, Clone)]
pub struct GetGenerationInstructionsQuery {
    pub user_id: UserId,
}

/// Rendered instructions plus the trust state they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInstructions {
    pub instructions: String,
    pub trust_level: TrustLevel,
}

/// Handler for getting generation instructions.
///
/// Never fails: storage errors degrade to the generic instructions.
pub struct GetGenerationInstructionsHandler {
    repository: Arc<dyn VoiceProfileRepository>,
}

impl GetGenerationInstructionsHandler {
    pub fn new(repository: Arc<dyn VoiceProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetGenerationInstructionsQuery) -> GenerationInstructions {
        let profile = match self.repository.load(&query.user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(user_id = %query.user_id, error = %e, "Voice profile unavailable, using generic instructions");
                None
            }
        };

        GenerationInstructions {
            instructions: render_instructions(profile.as_ref()),
            trust_level: TrustLevel::of(profile.as_ref()),
        }
    }
}
