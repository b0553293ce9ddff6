//! Voice module - per-user writing fingerprint and its consumers.
//!
//! This module defines:
//! - The Metrics Extractor (`extract_metrics`) turning text into `VoiceMetrics`
//! - The `VoiceProfile` aggregate with its builder, damped updater, and feedback learners
//! - The Confidence Scorer and `TrustLevel` gate
//! - The Prompt Generator (`render_instructions`)
//! - The Voice Transform Service (`transform`, `preview`)
//!
//! Everything here is synchronous and side-effect free; persistence and
//! per-user write serialization live in the application layer.

mod confidence;
mod history;
mod instructions;
mod lexicon;
mod metrics;
mod profile;
mod rejection;
mod sample;
mod summary;
mod transform;
mod vocabulary;

pub use confidence::{
    is_trusted, score_after_merge, TrustLevel, SEED_CONFIDENCE, SUBSTANTIAL_SAMPLE_WORDS,
    TRUST_THRESHOLD,
};
pub use history::SampleHistory;
pub use instructions::{render_instructions, GENERIC_INSTRUCTIONS, INSTRUCTION_VOCABULARY_WORDS};
pub use lexicon::{
    is_stop_word, synonym_for, BUZZWORD_SYNONYMS, CASUAL_SUBSTITUTIONS, DEFAULT_AVOIDED_WORDS,
    EMOTIONAL_WORDS, FORMAL_TERMS, STOP_WORDS,
};
pub use metrics::{
    count_sentences, count_words, extract_metrics, tokenize, PronounCounts, VoiceMetrics,
    COMMON_WORDS_PER_SAMPLE, MIN_VOCABULARY_WORD_LEN,
};
pub use profile::{DetailLevel, EmotionalTone, PronounUsage, VoiceProfile, MAX_HISTORY_WEIGHT};
pub use rejection::{PreferredReplacement, RejectedWord, RejectionOutcome, REJECTIONS_BEFORE_AVOIDED};
pub use sample::{
    SampleGuard, SampleSourceType, WritingSample, DEFAULT_MAX_SAMPLE_CHARS,
    DEFAULT_MIN_SAMPLE_WORDS,
};
pub use summary::{VoiceProfileSummary, SUMMARY_TOP_WORDS};
pub use transform::{
    preview, transform, ChangeKind, TransformPreview, TransformResult, VoiceChange,
    CASUAL_FORMALITY_BELOW,
};
pub use vocabulary::{
    context_snippet, Vocabulary, WordFrequency, CONTEXT_SNIPPET_CHARS, MAX_CONTEXTS_PER_WORD,
};
