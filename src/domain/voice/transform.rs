//! Voice Transform Service - post-processes generated text toward a profile.
//!
//! Passes run in a fixed order: avoided-word replacement, formality
//! adjustment, sentence-length adjustment. Nothing runs for a profile below
//! the trust threshold.

use std::collections::HashMap;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::confidence::is_trusted;
use super::lexicon::{synonym_for, CASUAL_SUBSTITUTIONS};
use super::VoiceProfile;

/// Target formality below which casual substitutions are applied.
pub const CASUAL_FORMALITY_BELOW: f64 = 5.0;

/// Which pass produced a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    AvoidedWord,
    Formality,
}

/// One substitution made (or, for unmapped avoided words, merely found).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceChange {
    pub kind: ChangeKind,
    pub original: String,
    /// `None` when an avoided word was found but has no known replacement.
    pub replacement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformResult {
    pub text: String,
    pub changes: Vec<VoiceChange>,
}

impl TransformResult {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            changes: Vec::new(),
        }
    }
}

/// Before/after view for showing the user what would change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformPreview {
    pub original: String,
    pub transformed: String,
    /// Avoided words found in the original, one entry per word.
    pub changes: Vec<VoiceChange>,
}

/// Rewrites `text` toward the profile's voice.
pub fn transform(text: &str, profile: &VoiceProfile) -> TransformResult {
    if !is_trusted(Some(profile)) {
        return TransformResult::unchanged(text);
    }

    let mut changes = Vec::new();
    let text = replace_avoided_words(text, profile.avoided_words(), &mut changes);
    let text = adjust_formality(
        text,
        profile.formality_score(),
        profile.avoided_words(),
        &mut changes,
    );
    let text = adjust_sentence_length(text, profile.avg_sentence_length());

    TransformResult { text, changes }
}

/// Runs [`transform`] and reports only the avoided words it found.
pub fn preview(text: &str, profile: &VoiceProfile) -> TransformPreview {
    let result = transform(text, profile);
    TransformPreview {
        original: text.to_string(),
        transformed: result.text,
        changes: result
            .changes
            .into_iter()
            .filter(|c| c.kind == ChangeKind::AvoidedWord)
            .collect(),
    }
}

fn replace_avoided_words(text: &str, avoided: &[String], changes: &mut Vec<VoiceChange>) -> String {
    let patterns: Vec<(&String, Regex)> = avoided
        .iter()
        .filter_map(|word| whole_word(word).map(|pattern| (word, pattern)))
        .collect();

    // Matches are found against the input only, never against replaced text.
    let mut replacements: HashMap<String, &str> = HashMap::new();
    for (word, pattern) in &patterns {
        if !pattern.is_match(text) {
            continue;
        }

        let replacement = synonym_for(word).filter(|synonym| !contains_any(synonym, &patterns));
        if let Some(replacement) = replacement {
            replacements.insert(word.trim().to_lowercase(), replacement);
        }
        changes.push(VoiceChange {
            kind: ChangeKind::AvoidedWord,
            original: (*word).clone(),
            replacement: replacement.map(str::to_string),
        });
    }

    let Some(pattern) = any_whole_word(replacements.keys()) else {
        return text.to_string();
    };
    pattern
        .replace_all(text, |caps: &Captures| {
            match replacements.get(&caps[0].to_lowercase()) {
                Some(replacement) => match_case(&caps[0], replacement),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn contains_any(text: &str, patterns: &[(&String, Regex)]) -> bool {
    patterns.iter().any(|(_, pattern)| pattern.is_match(text))
}

fn adjust_formality(
    text: String,
    formality: f64,
    avoided: &[String],
    changes: &mut Vec<VoiceChange>,
) -> String {
    if formality >= CASUAL_FORMALITY_BELOW {
        return text;
    }

    let mut text = text;
    for (formal, casual) in CASUAL_SUBSTITUTIONS {
        if avoided.iter().any(|word| word.trim().eq_ignore_ascii_case(casual)) {
            continue;
        }
        let Some(pattern) = whole_word(formal) else {
            continue;
        };
        if pattern.is_match(&text) {
            text = substitute(&pattern, &text, casual);
            changes.push(VoiceChange {
                kind: ChangeKind::Formality,
                original: (*formal).to_string(),
                replacement: Some((*casual).to_string()),
            });
        }
    }
    text
}

/// Sentence splitting and merging are not implemented; this pass must stay
/// in the pipeline as a pass-through so a later version can slot in here.
fn adjust_sentence_length(text: String, _target_avg_sentence_length: f64) -> String {
    text
}

fn whole_word(word: &str) -> Option<Regex> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))).ok()
}

/// One alternation over several words, longest first so phrases win over
/// their own prefixes.
fn any_whole_word<'a>(words: impl Iterator<Item = &'a String>) -> Option<Regex> {
    let mut words: Vec<&String> = words.collect();
    if words.is_empty() {
        return None;
    }
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternatives: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|"))).ok()
}

fn substitute(pattern: &Regex, text: &str, replacement: &str) -> String {
    pattern
        .replace_all(text, |caps: &Captures| match_case(&caps[0], replacement))
        .into_owned()
}

/// Carries a leading capital from the matched text over to the replacement.
fn match_case(matched: &str, replacement: &str) -> String {
    let starts_upper = matched.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return replacement.to_string();
    }
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
