//! Metrics Extractor - raw text to measurable writing quantities.
//!
//! Extraction is a pure, total function: any `&str` yields a `VoiceMetrics`.
//! Empty or whitespace-only input produces all-zero metrics, and every
//! division is guarded.
//!
//! The active-voice figure is a lexical approximation (form of "to be"
//! followed by an `-ed`/`-en` word), not grammatical analysis.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::lexicon::{
    is_stop_word, EMOTIONAL_WORD_SET, FIRST_PERSON_PLURAL, FIRST_PERSON_SINGULAR,
    FORMAL_TERM_SET, PLURAL_POSSESSIVE, SINGULAR_POSSESSIVE,
};

/// Number of top words reported per sample.
pub const COMMON_WORDS_PER_SAMPLE: usize = 20;

/// Shortest token considered distinctive vocabulary.
pub const MIN_VOCABULARY_WORD_LEN: usize = 3;

const BASELINE_FORMALITY: f64 = 5.0;
const FORMAL_TERM_BONUS: f64 = 0.5;
const MAX_FORMALITY_BONUS: f64 = 5.0;
const PASSIVE_PENALTY_PER_RATIO: f64 = 10.0;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)*").expect("word pattern is valid"));

static SENTENCE_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

static PASSIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:am|is|are|was|were|be|been|being)\s+\w+(?:ed|en)\b")
        .expect("passive pattern is valid")
});

/// Counts of first-person pronouns in one sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PronounCounts {
    pub i: u32,
    pub we: u32,
    pub my: u32,
    pub our: u32,
}

/// Measurable quantities derived from a single text.
///
/// Transient: metrics feed the builder/updater and are never stored on their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoiceMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_sentence_length: f64,
    /// Unique non-stop-words, sorted.
    pub vocabulary: Vec<String>,
    /// Top words by in-sample frequency, most frequent first.
    pub common_words: Vec<String>,
    /// 1-10; zero only for empty input.
    pub formality_score: f64,
    /// 0-100.
    pub active_voice_percentage: f64,
    pub pronoun_usage: PronounCounts,
    /// Every emotional-lexicon match, in order of appearance.
    pub emotional_words: Vec<String>,
}

impl VoiceMetrics {
    /// Fraction of words that are emotional-lexicon matches.
    pub fn emotional_density(&self) -> f64 {
        if self.word_count == 0 {
            return 0.0;
        }
        self.emotional_words.len() as f64 / self.word_count as f64
    }
}

/// Splits text into lower-cased word tokens, keeping contractions intact.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().replace('’', "'").to_lowercase())
        .collect()
}

/// Word count using the same tokenizer as extraction.
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

/// Byte offset of the first token equal to `word` (already lower-cased).
pub(crate) fn find_word(text: &str, word: &str) -> Option<usize> {
    WORD_PATTERN
        .find_iter(text)
        .find(|m| m.as_str().replace('’', "'").to_lowercase() == word)
        .map(|m| m.start())
}

/// Number of non-blank fragments between sentence terminators.
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_TERMINATORS
        .split(text)
        .filter(|fragment| fragment.chars().any(char::is_alphanumeric))
        .count()
}

/// Extracts voice metrics from raw text.
pub fn extract_metrics(text: &str) -> VoiceMetrics {
    let words = tokenize(text);
    if words.is_empty() {
        return VoiceMetrics::default();
    }

    let word_count = words.len();
    let sentence_count = count_sentences(text);
    let avg_sentence_length = ratio(word_count, sentence_count);

    let mut frequencies: HashMap<&str, u32> = HashMap::new();
    let mut pronoun_usage = PronounCounts::default();
    let mut formal_terms = 0usize;
    let mut emotional_words = Vec::new();

    for word in &words {
        let word = word.as_str();

        if FIRST_PERSON_SINGULAR.contains(&word) {
            pronoun_usage.i += 1;
        } else if FIRST_PERSON_PLURAL.contains(&word) {
            pronoun_usage.we += 1;
        } else if SINGULAR_POSSESSIVE.contains(&word) {
            pronoun_usage.my += 1;
        } else if PLURAL_POSSESSIVE.contains(&word) {
            pronoun_usage.our += 1;
        }

        if FORMAL_TERM_SET.contains(word) {
            formal_terms += 1;
        }
        if EMOTIONAL_WORD_SET.contains(word) {
            emotional_words.push(word.to_string());
        }
        if is_vocabulary_candidate(word) {
            *frequencies.entry(word).or_insert(0) += 1;
        }
    }

    let mut vocabulary: Vec<String> = frequencies.keys().map(|w| w.to_string()).collect();
    vocabulary.sort();

    let mut ranked: Vec<(&str, u32)> = frequencies.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let common_words = ranked
        .into_iter()
        .take(COMMON_WORDS_PER_SAMPLE)
        .map(|(w, _)| w.to_string())
        .collect();

    let formality_bonus = (formal_terms as f64 * FORMAL_TERM_BONUS).min(MAX_FORMALITY_BONUS);
    let formality_score = (BASELINE_FORMALITY + formality_bonus).clamp(1.0, 10.0);

    let passive_count = PASSIVE_PATTERN.find_iter(text).count();
    let active_voice_percentage = if sentence_count == 0 {
        0.0
    } else {
        (100.0 - ratio(passive_count, sentence_count) * PASSIVE_PENALTY_PER_RATIO).max(0.0)
    };

    VoiceMetrics {
        word_count,
        sentence_count,
        avg_sentence_length,
        vocabulary,
        common_words,
        formality_score,
        active_voice_percentage,
        pronoun_usage,
        emotional_words,
    }
}

fn is_vocabulary_candidate(word: &str) -> bool {
    word.chars().count() >= MIN_VOCABULARY_WORD_LEN && !is_stop_word(word)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_text_yields_all_zero_metrics() {
        for text in ["", "   ", "\n\t  \n", "...!?"] {
            let metrics = extract_metrics(text);
            assert_eq!(metrics, VoiceMetrics::default(), "input {:?}", text);
            assert_eq!(metrics.formality_score, 0.0);
            assert_eq!(metrics.active_voice_percentage, 0.0);
        }
    }

    #[test]
    fn counts_words_and_sentences() {
        let metrics = extract_metrics("I walked home. It was late! Was it raining?");
        assert_eq!(metrics.word_count, 9);
        assert_eq!(metrics.sentence_count, 3);
        assert!((metrics.avg_sentence_length - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        let metrics = extract_metrics("just a quick note to myself");
        assert_eq!(metrics.sentence_count, 1);
        assert_eq!(metrics.word_count, 6);
    }

    #[test]
    fn tokenizer_keeps_contractions_and_normalizes_apostrophes() {
        let tokens = tokenize("I’m sure we'll DON'T stop");
        assert_eq!(tokens, vec!["i'm", "sure", "we'll", "don't", "stop"]);
    }

    #[test]
    fn common_words_exclude_stop_words_and_rank_by_frequency() {
        let metrics = extract_metrics(
            "The garden was quiet. The garden smelled of rain. I love the garden and the rain.",
        );
        assert_eq!(metrics.common_words[0], "garden");
        assert_eq!(metrics.common_words[1], "rain");
        assert!(!metrics.common_words.contains(&"the".to_string()));
        assert!(metrics.vocabulary.contains(&"quiet".to_string()));
        assert!(!metrics.vocabulary.contains(&"was".to_string()));
    }

    #[test]
    fn function_words_and_short_tokens_never_rank() {
        let metrics = extract_metrics(
            "Their harbour is there. Which harbour? The one about which they wrote, \
             into their notes. Go up to it by ox cart.",
        );
        assert_eq!(metrics.common_words[0], "harbour");
        for word in ["their", "there", "which", "about", "into", "they", "go", "up", "ox"] {
            assert!(!metrics.vocabulary.contains(&word.to_string()), "{word}");
        }
        assert!(metrics.vocabulary.contains(&"cart".to_string()));
        assert_eq!(crate::domain::voice::STOP_WORDS.len(), 66);
    }

    #[test]
    fn common_words_capped_at_twenty() {
        let text = (0..40)
            .map(|i| format!("word{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let metrics = extract_metrics(&text);
        assert_eq!(metrics.common_words.len(), COMMON_WORDS_PER_SAMPLE);
        assert_eq!(metrics.vocabulary.len(), 40);
    }

    #[test]
    fn formality_baseline_without_formal_terms() {
        let metrics = extract_metrics("We went to the lake and swam until dusk.");
        assert_eq!(metrics.formality_score, 5.0);
    }

    #[test]
    fn formality_rises_with_formal_terms_and_caps_at_ten() {
        let some = extract_metrics("We leverage synergy to optimize outcomes.");
        assert_eq!(some.formality_score, 6.5);

        let many = extract_metrics(&"We leverage synergy to optimize and facilitate. ".repeat(5));
        assert_eq!(many.formality_score, 10.0);
    }

    #[test]
    fn passive_constructions_lower_active_voice() {
        let active = extract_metrics("I wrote the letter. I mailed it.");
        assert_eq!(active.active_voice_percentage, 100.0);

        let passive = extract_metrics("The letter was written. It was mailed.");
        assert_eq!(passive.active_voice_percentage, 90.0);
    }

    #[test]
    fn active_voice_never_negative() {
        let text = format!("It {}.", vec!["was mailed"; 12].join(" and "));
        let metrics = extract_metrics(&text);
        assert_eq!(metrics.active_voice_percentage, 0.0);
    }

    #[test]
    fn pronouns_counted_with_contractions() {
        let metrics = extract_metrics("I think I'm ready. We're close, and my notes are ours. Our plan works.");
        assert_eq!(metrics.pronoun_usage.i, 2);
        assert_eq!(metrics.pronoun_usage.we, 1);
        assert_eq!(metrics.pronoun_usage.my, 1);
        assert_eq!(metrics.pronoun_usage.our, 2);
    }

    #[test]
    fn emotional_words_match_lexicon() {
        let metrics = extract_metrics("I love this. I was so happy, then sad, then happy again.");
        assert_eq!(metrics.emotional_words, vec!["love", "happy", "sad", "happy"]);
        assert!(metrics.emotional_density() > 0.2);
    }

    proptest! {
        #[test]
        fn extraction_is_total_and_bounded(text in "\\PC{0,400}") {
            let metrics = extract_metrics(&text);
            prop_assert!(metrics.common_words.len() <= COMMON_WORDS_PER_SAMPLE);
            prop_assert!(metrics.active_voice_percentage >= 0.0);
            prop_assert!(metrics.active_voice_percentage <= 100.0);
            prop_assert!(metrics.formality_score <= 10.0);
            prop_assert!(metrics.avg_sentence_length.is_finite());
            if metrics.word_count > 0 {
                prop_assert!(metrics.formality_score >= 1.0);
                prop_assert!(metrics.sentence_count >= 1);
            }
        }

        #[test]
        fn whitespace_only_input_is_all_zero(text in "[ \\t\\n\\r]{0,64}") {
            prop_assert_eq!(extract_metrics(&text), VoiceMetrics::default());
        }
    }
}
