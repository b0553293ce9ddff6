//! Feedback records: rejected words and preferred replacements.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Rejections after which a word is permanently avoided.
pub const REJECTIONS_BEFORE_AVOIDED: u32 = 3;

/// A word the user has struck out of generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedWord {
    /// Lower-cased.
    pub word: String,
    /// Where it was last rejected.
    pub context: String,
    pub rejected_count: u32,
    pub last_rejected_date: Timestamp,
}

impl RejectedWord {
    pub(crate) fn new(word: String, context: String, at: Timestamp) -> Self {
        Self {
            word,
            context,
            rejected_count: 1,
            last_rejected_date: at,
        }
    }

    pub(crate) fn reject_again(&mut self, context: String, at: Timestamp) {
        self.rejected_count = self.rejected_count.saturating_add(1);
        self.context = context;
        self.last_rejected_date = at;
    }

    /// True once the word has been rejected often enough to be avoided.
    pub fn should_avoid(&self) -> bool {
        self.rejected_count >= REJECTIONS_BEFORE_AVOIDED
    }
}

/// A swap the user made by hand: `original` rewritten as `preferred`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredReplacement {
    pub original: String,
    pub preferred: String,
    pub frequency: u32,
}

impl PreferredReplacement {
    pub(crate) fn new(original: String, preferred: String) -> Self {
        Self {
            original,
            preferred,
            frequency: 1,
        }
    }

    pub(crate) fn matches(&self, original: &str, preferred: &str) -> bool {
        self.original.to_lowercase() == original.to_lowercase()
            && self.preferred.to_lowercase() == preferred.to_lowercase()
    }
}

/// What a single rejection did to the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionOutcome {
    pub word: String,
    pub rejected_count: u32,
    /// True only on the rejection that moved the word into the avoided set.
    pub newly_avoided: bool,
}
