//! Writing samples and the input guard applied before extraction.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, SampleId, Timestamp, ValidationError};

use super::metrics::count_words;

/// Default minimum number of words for a sample to be analyzed.
pub const DEFAULT_MIN_SAMPLE_WORDS: usize = 50;

/// Default hard cap on sample size, in characters.
pub const DEFAULT_MAX_SAMPLE_CHARS: usize = 50_000;

/// Kind of upstream feature a sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SampleSourceType {
    JournalEntry,
    Upload,
    #[default]
    Manual,
    GeneratedEdit,
    Other,
}

impl std::fmt::Display for SampleSourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JournalEntry => write!(f, "Journal Entry"),
            Self::Upload => write!(f, "Upload"),
            Self::Manual => write!(f, "Manual"),
            Self::GeneratedEdit => write!(f, "Generated Edit"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A single piece of the user's own writing.
///
/// Immutable once created; owned by the profile's bounded sample history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingSample {
    id: SampleId,
    text: String,
    /// Opaque provenance tag supplied by the host.
    source: String,
    source_type: SampleSourceType,
    date: Timestamp,
    word_count: usize,
}

impl WritingSample {
    /// Creates a sample, counting words with the extractor's tokenizer.
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        source_type: SampleSourceType,
        date: Timestamp,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        let word_count = count_words(&text);

        Ok(Self {
            id: SampleId::new(),
            text,
            source: source.into(),
            source_type,
            date,
            word_count,
        })
    }

    pub fn id(&self) -> SampleId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_type(&self) -> SampleSourceType {
        self.source_type
    }

    pub fn date(&self) -> Timestamp {
        self.date
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

/// Size limits enforced on raw sample text before any analysis runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleGuard {
    min_words: usize,
    max_chars: usize,
}

impl SampleGuard {
    pub fn new(min_words: usize, max_chars: usize) -> Self {
        Self {
            min_words,
            max_chars,
        }
    }

    pub fn min_words(&self) -> usize {
        self.min_words
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Checks raw text against the limits, returning its word count.
    ///
    /// The character cap is checked first so oversized input is never tokenized.
    pub fn check(&self, text: &str) -> Result<usize, DomainError> {
        let chars = text.chars().count();
        if chars > self.max_chars {
            return Err(DomainError::new(
                ErrorCode::SampleTooLarge,
                format!("Sample exceeds the {} character limit", self.max_chars),
            )
            .with_detail("chars", chars.to_string())
            .with_detail("maximum", self.max_chars.to_string()));
        }

        let words = count_words(text);
        if words < self.min_words {
            return Err(DomainError::new(
                ErrorCode::SampleTooShort,
                format!("Sample needs at least {} words", self.min_words),
            )
            .with_detail("word_count", words.to_string())
            .with_detail("minimum", self.min_words.to_string()));
        }

        Ok(words)
    }
}

impl Default for SampleGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SAMPLE_WORDS, DEFAULT_MAX_SAMPLE_CHARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn sample_counts_words_on_creation() {
        let sample = WritingSample::new(
            "Morning pages, again. I'm writing slowly.",
            "journal:2024-01-04",
            SampleSourceType::JournalEntry,
            Timestamp::now(),
        )
        .unwrap();

        assert_eq!(sample.word_count(), 6);
        assert_eq!(sample.source(), "journal:2024-01-04");
        assert_eq!(sample.source_type(), SampleSourceType::JournalEntry);
    }

    #[test]
    fn sample_rejects_blank_text() {
        let result = WritingSample::new("  \n ", "manual", SampleSourceType::Manual, Timestamp::now());
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn guard_accepts_exactly_minimum_words() {
        let guard = SampleGuard::default();
        assert_eq!(guard.check(&words(50)).unwrap(), 50);
    }

    #[test]
    fn guard_rejects_short_sample() {
        let guard = SampleGuard::default();
        let err = guard.check(&words(49)).unwrap_err();
        assert_eq!(err.code, ErrorCode::SampleTooShort);
        assert_eq!(err.details.get("word_count"), Some(&"49".to_string()));
        assert!(err.is_input_error());
    }

    #[test]
    fn guard_rejects_oversized_sample() {
        let guard = SampleGuard::new(1, 100);
        let err = guard.check(&"x".repeat(101)).unwrap_err();
        assert_eq!(err.code, ErrorCode::SampleTooLarge);
    }

    #[test]
    fn source_type_serializes_snake_case() {
        let json = serde_json::to_string(&SampleSourceType::GeneratedEdit).unwrap();
        assert_eq!(json, "\"generated_edit\"");
    }
}
