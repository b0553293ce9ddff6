//! Compact read model of a profile for display.

use serde::{Deserialize, Serialize};

use super::confidence::TrustLevel;
use super::profile::{DetailLevel, EmotionalTone};
use super::VoiceProfile;
use crate::domain::foundation::{Timestamp, UserId};

/// Number of top words included in a summary.
pub const SUMMARY_TOP_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfileSummary {
    pub user_id: UserId,
    pub sample_count: u32,
    pub confidence_score: u8,
    pub trust_level: TrustLevel,
    pub formality_score: f64,
    pub emotional_tone: EmotionalTone,
    pub detail_level: DetailLevel,
    pub top_words: Vec<String>,
    pub avoided_words: Vec<String>,
    pub last_updated: Timestamp,
}

impl From<&VoiceProfile> for VoiceProfileSummary {
    fn from(profile: &VoiceProfile) -> Self {
        Self {
            user_id: profile.user_id().clone(),
            sample_count: profile.sample_count(),
            confidence_score: profile.confidence_score(),
            trust_level: TrustLevel::of(Some(profile)),
            formality_score: profile.formality_score(),
            emotional_tone: profile.emotional_tone(),
            detail_level: profile.detail_level(),
            top_words: profile
                .common_words()
                .top(SUMMARY_TOP_WORDS)
                .map(|w| w.word.clone())
                .collect(),
            avoided_words: profile.avoided_words().to_vec(),
            last_updated: profile.last_updated(),
        }
    }
}
