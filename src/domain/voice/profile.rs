//! VoiceProfile aggregate root: builder, incremental updater, and feedback.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId, ValidationError};

use super::confidence::{self, SEED_CONFIDENCE};
use super::rejection::{PreferredReplacement, RejectedWord, RejectionOutcome};
use super::{PronounCounts, SampleHistory, VoiceMetrics, Vocabulary, WritingSample};

/// Upper bound on how many past samples a scalar average is weighted as.
pub const MAX_HISTORY_WEIGHT: u32 = 10;

const ENTHUSIASTIC_DENSITY: f64 = 0.02;
const RESERVED_DENSITY: f64 = 0.005;
const CONCISE_SENTENCE_LENGTH: f64 = 12.0;
const COMPREHENSIVE_SENTENCE_LENGTH: f64 = 20.0;

/// How much feeling shows in the user's writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTone {
    Reserved,
    Balanced,
    Enthusiastic,
}

impl EmotionalTone {
    /// Classifies the share of emotional-lexicon words among all words.
    pub fn from_density(density: f64) -> Self {
        if density > ENTHUSIASTIC_DENSITY {
            Self::Enthusiastic
        } else if density < RESERVED_DENSITY {
            Self::Reserved
        } else {
            Self::Balanced
        }
    }
}

impl std::fmt::Display for EmotionalTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reserved => write!(f, "Reserved"),
            Self::Balanced => write!(f, "Balanced"),
            Self::Enthusiastic => write!(f, "Enthusiastic"),
        }
    }
}

/// How much the user elaborates per sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Concise,
    Detailed,
    Comprehensive,
}

impl DetailLevel {
    pub fn from_sentence_length(avg_sentence_length: f64) -> Self {
        if avg_sentence_length < CONCISE_SENTENCE_LENGTH {
            Self::Concise
        } else if avg_sentence_length > COMPREHENSIVE_SENTENCE_LENGTH {
            Self::Comprehensive
        } else {
            Self::Detailed
        }
    }
}

impl std::fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Concise => write!(f, "Concise"),
            Self::Detailed => write!(f, "Detailed"),
            Self::Comprehensive => write!(f, "Comprehensive"),
        }
    }
}

/// Damped per-sample pronoun counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PronounUsage {
    pub i: f64,
    pub we: f64,
    pub my: f64,
    pub our: f64,
}

impl From<PronounCounts> for PronounUsage {
    fn from(counts: PronounCounts) -> Self {
        Self {
            i: f64::from(counts.i),
            we: f64::from(counts.we),
            my: f64::from(counts.my),
            our: f64::from(counts.our),
        }
    }
}

/// VoiceProfile aggregate root
///
/// Accumulated statistical model of one user's writing. Created from the
/// first accepted sample and mutated in place by every later sample,
/// rejection, or preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceProfile {
    // Identity
    user_id: UserId,

    // Vocabulary
    common_words: Vocabulary,
    avoided_words: Vec<String>,
    preferred_phrases: Vec<String>,
    industry_terms: Vec<String>,

    // Damped scalars
    avg_sentence_length: f64,
    formality_score: f64,
    active_voice_percentage: f64,
    personal_pronoun_usage: PronounUsage,
    emotional_density: f64,
    emotional_tone: EmotionalTone,
    detail_level: DetailLevel,

    // Bounded history and feedback
    writing_samples: SampleHistory,
    rejected_words: Vec<RejectedWord>,
    preferred_replacements: Vec<PreferredReplacement>,

    // Metadata
    created_at: Timestamp,
    last_updated: Timestamp,
    confidence_score: u8,
    sample_count: u32,
}

impl VoiceProfile {
    /// Builds a profile from a user's first sample.
    ///
    /// Confidence starts at the fixed low-trust seed regardless of sample size.
    pub fn build(
        user_id: UserId,
        sample: WritingSample,
        metrics: &VoiceMetrics,
        timestamp: Timestamp,
    ) -> Self {
        let emotional_density = metrics.emotional_density();
        let common_words = Vocabulary::seed(&metrics.common_words, sample.text());
        let mut writing_samples = SampleHistory::default();
        writing_samples.push(sample);

        Self {
            user_id,
            common_words,
            avoided_words: Vec::new(),
            preferred_phrases: Vec::new(),
            industry_terms: Vec::new(),
            avg_sentence_length: metrics.avg_sentence_length,
            formality_score: metrics.formality_score,
            active_voice_percentage: metrics.active_voice_percentage,
            personal_pronoun_usage: metrics.pronoun_usage.into(),
            emotional_density,
            emotional_tone: EmotionalTone::from_density(emotional_density),
            detail_level: DetailLevel::from_sentence_length(metrics.avg_sentence_length),
            writing_samples,
            rejected_words: Vec::new(),
            preferred_replacements: Vec::new(),
            created_at: timestamp,
            last_updated: timestamp,
            confidence_score: SEED_CONFIDENCE,
            sample_count: 1,
        }
    }

    /// Folds another sample into the profile.
    ///
    /// Scalars move as `(old * w + new) / (w + 1)` with `w = min(sample_count, 10)`,
    /// so accumulated history never drowns out recent writing. Metrics must be
    /// computed before calling; the merge itself cannot fail.
    pub fn merge_sample(
        &mut self,
        sample: WritingSample,
        metrics: &VoiceMetrics,
        timestamp: Timestamp,
    ) {
        let weight = f64::from(self.sample_count.min(MAX_HISTORY_WEIGHT));
        let damp = |old: f64, new: f64| (old * weight + new) / (weight + 1.0);

        self.avg_sentence_length = damp(self.avg_sentence_length, metrics.avg_sentence_length);
        self.formality_score = damp(self.formality_score, metrics.formality_score);
        self.active_voice_percentage =
            damp(self.active_voice_percentage, metrics.active_voice_percentage);
        self.emotional_density = damp(self.emotional_density, metrics.emotional_density());

        let incoming = PronounUsage::from(metrics.pronoun_usage);
        let usage = &mut self.personal_pronoun_usage;
        usage.i = damp(usage.i, incoming.i);
        usage.we = damp(usage.we, incoming.we);
        usage.my = damp(usage.my, incoming.my);
        usage.our = damp(usage.our, incoming.our);

        self.emotional_tone = EmotionalTone::from_density(self.emotional_density);
        self.detail_level = DetailLevel::from_sentence_length(self.avg_sentence_length);

        self.common_words.absorb(&metrics.common_words, sample.text());

        self.sample_count = self.sample_count.saturating_add(1);
        self.confidence_score = confidence::score_after_merge(self.sample_count, sample.word_count());
        self.writing_samples.push(sample);
        self.last_updated = timestamp;
    }

    /// Records that the user struck `word` out of generated text.
    ///
    /// The third rejection moves the word into the avoided set; later ones
    /// only bump the count.
    pub fn record_rejection(
        &mut self,
        word: &str,
        context: impl Into<String>,
        timestamp: Timestamp,
    ) -> Result<RejectionOutcome, ValidationError> {
        let word = normalize_word(word).ok_or_else(|| ValidationError::empty_field("word"))?;
        let context = context.into();

        let (rejected_count, should_avoid) =
            match self.rejected_words.iter_mut().find(|r| r.word == word) {
                Some(entry) => {
                    entry.reject_again(context, timestamp);
                    (entry.rejected_count, entry.should_avoid())
                }
                None => {
                    let entry = RejectedWord::new(word.clone(), context, timestamp);
                    let outcome = (entry.rejected_count, entry.should_avoid());
                    self.rejected_words.push(entry);
                    outcome
                }
            };

        let newly_avoided = should_avoid && insert_unique(&mut self.avoided_words, &word);
        self.last_updated = timestamp;

        Ok(RejectionOutcome {
            word,
            rejected_count,
            newly_avoided,
        })
    }

    /// Records a manual rewrite of `original` as `preferred`.
    pub fn record_preference(
        &mut self,
        original: &str,
        preferred: &str,
        timestamp: Timestamp,
    ) -> Result<&PreferredReplacement, ValidationError> {
        let original = original.trim();
        let preferred = preferred.trim();
        if original.is_empty() {
            return Err(ValidationError::empty_field("original"));
        }
        if preferred.is_empty() {
            return Err(ValidationError::empty_field("preferred"));
        }

        self.last_updated = timestamp;
        let position = self
            .preferred_replacements
            .iter()
            .position(|r| r.matches(original, preferred));

        let index = match position {
            Some(index) => {
                let entry = &mut self.preferred_replacements[index];
                entry.frequency = entry.frequency.saturating_add(1);
                index
            }
            None => {
                self.preferred_replacements.push(PreferredReplacement::new(
                    original.to_string(),
                    preferred.to_string(),
                ));
                self.preferred_replacements.len() - 1
            }
        };
        Ok(&self.preferred_replacements[index])
    }

    /// Declares a word the user never wants to see. Returns false if already avoided.
    pub fn add_avoided_word(&mut self, word: &str, timestamp: Timestamp) -> bool {
        let Some(word) = normalize_word(word) else {
            return false;
        };
        let inserted = insert_unique(&mut self.avoided_words, &word);
        if inserted {
            self.last_updated = timestamp;
        }
        inserted
    }

    /// Adds a phrase the user likes. Returns false if already present.
    pub fn add_preferred_phrase(&mut self, phrase: &str, timestamp: Timestamp) -> bool {
        let inserted = insert_unique(&mut self.preferred_phrases, phrase.trim());
        if inserted {
            self.last_updated = timestamp;
        }
        inserted
    }

    /// Adds a term from the user's field. Returns false if already present.
    pub fn add_industry_term(&mut self, term: &str, timestamp: Timestamp) -> bool {
        let inserted = insert_unique(&mut self.industry_terms, term.trim());
        if inserted {
            self.last_updated = timestamp;
        }
        inserted
    }

    // Getters
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn common_words(&self) -> &Vocabulary {
        &self.common_words
    }

    pub fn avoided_words(&self) -> &[String] {
        &self.avoided_words
    }

    pub fn preferred_phrases(&self) -> &[String] {
        &self.preferred_phrases
    }

    pub fn industry_terms(&self) -> &[String] {
        &self.industry_terms
    }

    pub fn avg_sentence_length(&self) -> f64 {
        self.avg_sentence_length
    }

    pub fn formality_score(&self) -> f64 {
        self.formality_score
    }

    pub fn active_voice_percentage(&self) -> f64 {
        self.active_voice_percentage
    }

    pub fn personal_pronoun_usage(&self) -> &PronounUsage {
        &self.personal_pronoun_usage
    }

    pub fn emotional_tone(&self) -> EmotionalTone {
        self.emotional_tone
    }

    pub fn detail_level(&self) -> DetailLevel {
        self.detail_level
    }

    pub fn writing_samples(&self) -> &SampleHistory {
        &self.writing_samples
    }

    pub fn rejected_words(&self) -> &[RejectedWord] {
        &self.rejected_words
    }

    pub fn preferred_replacements(&self) -> &[PreferredReplacement] {
        &self.preferred_replacements
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    pub fn confidence_score(&self) -> u8 {
        self.confidence_score
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }
}

fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}

/// Case-insensitive set insert that keeps insertion order.
fn insert_unique(items: &mut Vec<String>, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let lowered = value.to_lowercase();
    if items.iter().any(|existing| existing.to_lowercase() == lowered) {
        return false;
    }
    items.push(value.to_string());
    true
}
