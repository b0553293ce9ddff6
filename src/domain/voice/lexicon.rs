//! Fixed word lists backing the heuristic voice analysis.
//!
//! Everything here is deliberately small and lexical. A richer model can
//! replace these lists without changing the `VoiceMetrics` contract.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Function words excluded from vocabulary and common-word ranking.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
    "does", "did", "will", "would", "could", "should", "can", "this", "that", "these", "those",
    "it", "its", "i", "we", "my", "our", "you", "your", "they", "them", "their", "he", "she",
    "his", "her", "as", "so", "if", "then", "than", "not", "just", "about", "into", "there",
    "what", "when", "which", "who",
];

/// Corporate and formal register markers; each occurrence raises formality.
pub const FORMAL_TERMS: &[&str] = &[
    "leverage",
    "utilize",
    "synergy",
    "paradigm",
    "facilitate",
    "optimize",
    "stakeholder",
    "deliverable",
    "strategic",
    "implement",
    "furthermore",
    "moreover",
    "consequently",
    "therefore",
    "pursuant",
];

/// Small emotional lexicon used for tone density.
pub const EMOTIONAL_WORDS: &[&str] = &[
    "love", "hate", "excited", "amazing", "terrible", "happy", "sad", "frustrated",
];

/// Buzzwords a generation step should avoid when the user has not declared their own list.
pub const DEFAULT_AVOIDED_WORDS: &[&str] = &[
    "leverage",
    "synergy",
    "utilize",
    "paradigm",
    "game-changer",
    "circle back",
    "deep dive",
    "move the needle",
    "best-in-class",
    "disruptive",
];

/// Plain-language replacements for common buzzwords.
///
/// Words missing from this table are reported but left in place.
pub const BUZZWORD_SYNONYMS: &[(&str, &str)] = &[
    ("leverage", "use"),
    ("utilize", "use"),
    ("synergy", "teamwork"),
    ("paradigm", "model"),
    ("facilitate", "help"),
    ("optimize", "improve"),
    ("stakeholder", "person involved"),
    ("stakeholders", "people involved"),
    ("deliverable", "result"),
    ("deliverables", "results"),
    ("robust", "strong"),
    ("innovative", "new"),
    ("holistic", "complete"),
    ("streamline", "simplify"),
    ("impactful", "effective"),
    ("ideate", "brainstorm"),
    ("circle back", "follow up"),
];

/// Substitutions applied when the target voice is casual.
pub const CASUAL_SUBSTITUTIONS: &[(&str, &str)] = &[
    ("do not", "don't"),
    ("does not", "doesn't"),
    ("cannot", "can't"),
    ("will not", "won't"),
    ("it is", "it's"),
    ("i am", "I'm"),
    ("we are", "we're"),
    ("however", "but"),
    ("therefore", "so"),
];

/// Pronoun forms counted per personal pronoun, contractions included.
pub const FIRST_PERSON_SINGULAR: &[&str] = &["i", "i'm", "i've", "i'll", "i'd"];
pub const FIRST_PERSON_PLURAL: &[&str] = &["we", "we're", "we've", "we'll", "we'd"];
pub const SINGULAR_POSSESSIVE: &[&str] = &["my", "mine"];
pub const PLURAL_POSSESSIVE: &[&str] = &["our", "ours"];

pub(crate) static STOP_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORDS.iter().copied().collect());

pub(crate) static FORMAL_TERM_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FORMAL_TERMS.iter().copied().collect());

pub(crate) static EMOTIONAL_WORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EMOTIONAL_WORDS.iter().copied().collect());

static SYNONYM_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BUZZWORD_SYNONYMS.iter().copied().collect());

/// Returns true if the lower-cased token is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Looks up the plain-language replacement for a buzzword (case-insensitive).
pub fn synonym_for(word: &str) -> Option<&'static str> {
    SYNONYM_MAP.get(word.to_lowercase().as_str()).copied()
}
