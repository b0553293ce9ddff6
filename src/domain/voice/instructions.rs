//! Prompt Generator - renders a profile as plain-language style instructions.
//!
//! Pure templating. The output is meant to be prepended to a downstream
//! generation prompt; nothing is learned here.

use std::fmt::Write;

use super::confidence::is_trusted;
use super::lexicon::DEFAULT_AVOIDED_WORDS;
use super::VoiceProfile;

/// Returned whenever a profile is missing or below the trust threshold.
pub const GENERIC_INSTRUCTIONS: &str = "Write in a clear, natural, conversational style. \
Prefer plain words over jargon, use active voice, and keep sentences a comfortable length.";

/// Number of vocabulary words listed as "words this person uses".
pub const INSTRUCTION_VOCABULARY_WORDS: usize = 15;

const FORMAL_ABOVE: f64 = 7.0;
const CASUAL_AT_OR_BELOW: f64 = 4.0;
const PRONOUN_BIAS_RATIO: f64 = 2.0;

/// Renders style instructions for `profile`, or the generic fallback when
/// the profile cannot be trusted yet.
pub fn render_instructions(profile: Option<&VoiceProfile>) -> String {
    match profile {
        Some(profile) if is_trusted(Some(profile)) => render_trusted(profile),
        _ => GENERIC_INSTRUCTIONS.to_string(),
    }
}

fn render_trusted(profile: &VoiceProfile) -> String {
    let mut lines = vec!["Write in this person's voice:".to_string()];

    lines.push(format!("- Formality: {}", formality_band(profile.formality_score())));
    lines.push(format!(
        "- Aim for sentences of about {:.0} words on average.",
        profile.avg_sentence_length()
    ));
    lines.push(format!(
        "- Use active voice about {:.0}% of the time.",
        profile.active_voice_percentage()
    ));

    if let Some(directive) = pronoun_directive(profile) {
        lines.push(format!("- {}", directive));
    }

    let vocabulary: Vec<&str> = profile
        .common_words()
        .top(INSTRUCTION_VOCABULARY_WORDS)
        .map(|w| w.word.as_str())
        .collect();
    if !vocabulary.is_empty() {
        lines.push(format!("- Words this person uses: {}", vocabulary.join(", ")));
    }

    let avoided = if profile.avoided_words().is_empty() {
        DEFAULT_AVOIDED_WORDS.join(", ")
    } else {
        profile.avoided_words().join(", ")
    };
    lines.push(format!("- Never use: {}", avoided));

    if !profile.preferred_phrases().is_empty() {
        lines.push(format!(
            "- Phrases this person likes: {}",
            profile.preferred_phrases().join(", ")
        ));
    }

    if !profile.industry_terms().is_empty() {
        lines.push(format!(
            "- Terms from their field you may use: {}",
            profile.industry_terms().join(", ")
        ));
    }

    if !profile.preferred_replacements().is_empty() {
        let mut replacements: Vec<_> = profile.preferred_replacements().iter().collect();
        replacements.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        let mut line = String::from("- Prefer");
        for (i, r) in replacements.iter().enumerate() {
            let sep = if i == 0 { " " } else { "; " };
            let _ = write!(line, "{}\"{}\" over \"{}\"", sep, r.preferred, r.original);
        }
        lines.push(line);
    }

    lines.push(format!(
        "- Tone: {}. Detail: {}.",
        profile.emotional_tone(),
        profile.detail_level()
    ));

    lines.join("\n")
}

fn formality_band(score: f64) -> &'static str {
    if score > FORMAL_ABOVE {
        "formal and polished"
    } else if score <= CASUAL_AT_OR_BELOW {
        "casual and relaxed"
    } else {
        "balanced, neither stiff nor sloppy"
    }
}

fn pronoun_directive(profile: &VoiceProfile) -> Option<&'static str> {
    let usage = profile.personal_pronoun_usage();
    if usage.i > usage.we * PRONOUN_BIAS_RATIO {
        Some("Write in the first person singular: use \"I\", avoid \"we\".")
    } else if usage.we > usage.i * PRONOUN_BIAS_RATIO {
        Some("Write in the first person plural: use \"we\", avoid \"I\".")
    } else {
        None
    }
}
