//! # Lexicon Scorers
//!
//! In-process sentiment models backed by embedded word lists. Both scorers
//! are built once at startup and are read-only afterwards.

mod polarity;
mod rule_based;

pub use polarity::PolarityScorer;
pub use rule_based::RuleBasedScorer;

/// Split on whitespace and strip punctuation from both ends of each token.
///
/// Internal apostrophes survive so contractions like "isn't" stay whole.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .collect()
}
