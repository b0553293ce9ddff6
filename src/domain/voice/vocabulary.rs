//! Bounded word-frequency table for a voice profile.
//!
//! The table never holds more than [`Vocabulary::CAPACITY`] words. After each
//! sample is absorbed the table is re-ranked by frequency and everything past
//! the capacity is evicted, so memory stays flat however many samples arrive.

use serde::{Deserialize, Serialize};

use super::metrics::find_word;

/// Maximum number of context snippets kept per word.
pub const MAX_CONTEXTS_PER_WORD: usize = 5;

/// Maximum length of a context snippet, in characters.
pub const CONTEXT_SNIPPET_CHARS: usize = 100;

const SNIPPET_LEAD_CHARS: usize = 40;

/// A word the user reaches for, with recent usage examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    /// Only ever increases.
    pub frequency: u32,
    /// Most recent last; at most [`MAX_CONTEXTS_PER_WORD`].
    pub contexts: Vec<String>,
}

impl WordFrequency {
    fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            frequency: 0,
            contexts: Vec::new(),
        }
    }

    fn observe(&mut self, context: String) {
        self.frequency = self.frequency.saturating_add(1);
        self.contexts.push(context);
        if self.contexts.len() > MAX_CONTEXTS_PER_WORD {
            let excess = self.contexts.len() - MAX_CONTEXTS_PER_WORD;
            self.contexts.drain(..excess);
        }
    }
}

/// Frequency-ranked word table with evict-by-rank overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary(Vec<WordFrequency>);

impl Vocabulary {
    pub const CAPACITY: usize = 100;

    /// Seeds a table from a first sample: every word at frequency 1 with one snippet.
    pub fn seed(words: &[String], text: &str) -> Self {
        let mut vocabulary = Self::default();
        vocabulary.absorb(words, text);
        vocabulary
    }

    /// Counts one more use of each word, then re-ranks and evicts.
    pub fn absorb(&mut self, words: &[String], text: &str) {
        for word in words {
            self.record(word, context_snippet(text, word));
        }
        self.rank();
    }

    fn record(&mut self, word: &str, context: String) {
        match self.0.iter_mut().find(|entry| entry.word == word) {
            Some(entry) => entry.observe(context),
            None => {
                let mut entry = WordFrequency::new(word);
                entry.observe(context);
                self.0.push(entry);
            }
        }
    }

    /// Stable sort by descending frequency, then truncate to capacity.
    fn rank(&mut self) {
        self.0.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        self.0.truncate(Self::CAPACITY);
    }

    pub fn get(&self, word: &str) -> Option<&WordFrequency> {
        self.0.iter().find(|entry| entry.word == word)
    }

    /// The `n` most frequent words, highest first.
    pub fn top(&self, n: usize) -> impl Iterator<Item = &WordFrequency> {
        self.0.iter().take(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordFrequency> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Up to [`CONTEXT_SNIPPET_CHARS`] characters around the first use of `word`.
pub fn context_snippet(text: &str, word: &str) -> String {
    let start = find_word(text, word)
        .map(|byte| text[..byte].chars().count().saturating_sub(SNIPPET_LEAD_CHARS))
        .unwrap_or(0);

    text.chars()
        .skip(start)
        .take(CONTEXT_SNIPPET_CHARS)
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn seed_starts_every_word_at_one() {
        let vocabulary = Vocabulary::seed(&words(&["garden", "rain"]), "The garden in the rain.");
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.iter().all(|w| w.frequency == 1 && w.contexts.len() == 1));
    }

    #[test]
    fn absorb_increments_and_reranks() {
        let mut vocabulary = Vocabulary::seed(&words(&["garden", "rain"]), "garden rain");
        vocabulary.absorb(&words(&["rain"]), "more rain today");

        let top: Vec<_> = vocabulary.top(2).map(|w| w.word.as_str()).collect();
        assert_eq!(top, vec!["rain", "garden"]);
        assert_eq!(vocabulary.get("rain").unwrap().frequency, 2);
    }

    #[test]
    fn contexts_keep_most_recent_five() {
        let mut vocabulary = Vocabulary::default();
        for i in 0..8 {
            vocabulary.absorb(&words(&["tea"]), &format!("tea number {}", i));
        }
        let entry = vocabulary.get("tea").unwrap();
        assert_eq!(entry.frequency, 8);
        assert_eq!(entry.contexts.len(), MAX_CONTEXTS_PER_WORD);
        assert_eq!(entry.contexts.first().unwrap(), "tea number 3");
        assert_eq!(entry.contexts.last().unwrap(), "tea number 7");
    }

    #[test]
    fn table_evicts_lowest_ranked_past_capacity() {
        let mut vocabulary = Vocabulary::default();
        vocabulary.absorb(&words(&["anchor"]), "anchor");
        vocabulary.absorb(&words(&["anchor"]), "anchor");

        let many: Vec<String> = (0..150).map(|i| format!("w{}", i)).collect();
        vocabulary.absorb(&many, "filler");

        assert_eq!(vocabulary.len(), Vocabulary::CAPACITY);
        assert_eq!(vocabulary.top(1).next().unwrap().word, "anchor");
    }

    #[test]
    fn snippet_is_bounded_and_contains_word() {
        let text = format!("{} the lighthouse keeper {}", "a".repeat(300), "b".repeat(300));
        let snippet = context_snippet(&text, "lighthouse");
        assert!(snippet.chars().count() <= CONTEXT_SNIPPET_CHARS);
        assert!(snippet.contains("lighthouse"));
    }

    #[test]
    fn snippet_handles_multibyte_text() {
        let text = "Café mornings are my favourite, naïve, slow, and quiet.";
        let snippet = context_snippet(text, "naïve");
        assert!(snippet.contains("naïve"));
    }

    #[test]
    fn vocabulary_serializes_as_array() {
        let vocabulary = Vocabulary::seed(&words(&["garden"]), "garden");
        let json = serde_json::to_value(&vocabulary).unwrap();
        assert!(json.is_array());
    }
}
