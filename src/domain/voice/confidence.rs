//! Confidence Scorer - the trust gate every profile consumer goes through.

use serde::{Deserialize, Serialize};

use super::VoiceProfile;

/// Minimum confidence at which a profile may steer generation.
pub const TRUST_THRESHOLD: u8 = 30;

/// Confidence assigned to a freshly built profile.
pub const SEED_CONFIDENCE: u8 = 20;

/// Samples longer than this earn the substantial-sample bonus.
pub const SUBSTANTIAL_SAMPLE_WORDS: usize = 200;

const CONFIDENCE_PER_SAMPLE: u32 = 5;
const SUBSTANTIAL_SAMPLE_BONUS: u32 = 10;
const MAX_CONFIDENCE: u32 = 100;

/// Confidence of a profile that has absorbed `sample_count` samples, the
/// latest of which had `sample_word_count` words.
pub fn score_after_merge(sample_count: u32, sample_word_count: usize) -> u8 {
    let bonus = if sample_word_count > SUBSTANTIAL_SAMPLE_WORDS {
        SUBSTANTIAL_SAMPLE_BONUS
    } else {
        0
    };
    let score = sample_count
        .saturating_mul(CONFIDENCE_PER_SAMPLE)
        .saturating_add(bonus)
        .min(MAX_CONFIDENCE);
    score as u8
}

/// True iff a profile exists and its confidence reaches the threshold.
pub fn is_trusted(profile: Option<&VoiceProfile>) -> bool {
    TrustLevel::of(profile).is_trusted()
}

/// How far a consumer may rely on a user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// Confidence at or above the threshold.
    Trusted,
    /// A profile exists but is below the threshold.
    DegradedTrust,
    /// No profile has been built yet.
    MissingProfile,
}

impl TrustLevel {
    pub fn of(profile: Option<&VoiceProfile>) -> Self {
        match profile {
            None => Self::MissingProfile,
            Some(p) if p.confidence_score() >= TRUST_THRESHOLD => Self::Trusted,
            Some(_) => Self::DegradedTrust,
        }
    }

    pub fn is_trusted(&self) -> bool {
        matches!(self, Self::Trusted)
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trusted => write!(f, "Trusted"),
            Self::DegradedTrust => write!(f, "Degraded Trust"),
            Self::MissingProfile => write!(f, "Missing Profile"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rewards_breadth() {
        assert_eq!(score_after_merge(1, 100), 5);
        assert_eq!(score_after_merge(6, 100), 30);
        assert_eq!(score_after_merge(10, 100), 50);
    }

    #[test]
    fn score_rewards_one_substantial_sample() {
        assert_eq!(score_after_merge(4, 200), 20);
        assert_eq!(score_after_merge(4, 201), 30);
    }

    #[test]
    fn score_caps_at_one_hundred() {
        assert_eq!(score_after_merge(19, 300), 100);
        assert_eq!(score_after_merge(u32::MAX, 300), 100);
    }

    #[test]
    fn missing_profile_is_not_trusted() {
        assert!(!is_trusted(None));
        assert_eq!(TrustLevel::of(None), TrustLevel::MissingProfile);
    }

    #[test]
    fn trust_level_display() {
        assert_eq!(format!("{}", TrustLevel::DegradedTrust), "Degraded Trust");
    }
}
