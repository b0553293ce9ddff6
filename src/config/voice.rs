//! Voice analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::voice::{SampleGuard, DEFAULT_MAX_SAMPLE_CHARS, DEFAULT_MIN_SAMPLE_WORDS};

/// Limits applied to incoming writing samples
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct VoiceConfig {
    /// Samples with fewer words are rejected before analysis
    #[serde(default = "default_min_sample_words")]
    pub min_sample_words: usize,

    /// Hard cap on sample size, in characters
    #[serde(default = "default_max_sample_chars")]
    pub max_sample_chars: usize,
}

impl VoiceConfig {
    /// Build the input guard used by the sample handler
    pub fn sample_guard(&self) -> SampleGuard {
        SampleGuard::new(self.min_sample_words, self.max_sample_chars)
    }

    /// Validate voice configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_sample_words == 0 {
            return Err(ValidationError::InvalidMinSampleWords);
        }
        if self.max_sample_chars <= self.min_sample_words {
            return Err(ValidationError::InvalidSampleBounds {
                min_words: self.min_sample_words,
                max_chars: self.max_sample_chars,
            });
        }
        Ok(())
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            min_sample_words: default_min_sample_words(),
            max_sample_chars: default_max_sample_chars(),
        }
    }
}

fn default_min_sample_words() -> usize {
    DEFAULT_MIN_SAMPLE_WORDS
}

fn default_max_sample_chars() -> usize {
    DEFAULT_MAX_SAMPLE_CHARS
}
