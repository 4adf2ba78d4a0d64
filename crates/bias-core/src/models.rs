//! Data models shared by the scorers, the voting engine and the server
//!
//! Every value here lives for a single request: a headline comes in, the
//! models produce scores, the scores produce a verdict, and everything is
//! dropped once the response is written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::BiasError;

// =============================================================================
// Scores
// =============================================================================

/// Which model family produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    /// Lexicon and rule based compound scorer
    RuleBased,
    /// Lexicon based polarity scorer
    LexiconBased,
    /// Hosted transformer sentiment classifier
    Transformer,
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::RuleBased => write!(f, "Rule-based"),
            ModelSource::LexiconBased => write!(f, "Lexicon-based"),
            ModelSource::Transformer => write!(f, "Transformer"),
        }
    }
}

/// Three-way sentiment label common to every model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for SentimentLabel {
    type Err = BiasError;

    /// Parse a classifier label such as `POSITIVE` or `neg`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "POSITIVE" | "POS" => Ok(SentimentLabel::Positive),
            "NEGATIVE" | "NEG" => Ok(SentimentLabel::Negative),
            "NEUTRAL" | "NEU" => Ok(SentimentLabel::Neutral),
            other => Err(BiasError::InvalidModelOutput(format!(
                "unrecognized sentiment label '{}'",
                other
            ))),
        }
    }
}

/// A model's output after normalization
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    pub source: ModelSource,
    pub label: SentimentLabel,
    /// Signed score for the lexicon models, confidence for the transformer
    pub magnitude: f64,
}

// =============================================================================
// Verdict
// =============================================================================

/// Binary outcome of the vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Biased,
    Neutral,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Biased => write!(f, "Biased"),
            Decision::Neutral => write!(f, "Neutral / Unbiased"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub decision: Decision,
    /// One entry per bias vote, in the order the scores were given
    pub reasons: Vec<String>,
}

impl Verdict {
    /// Number of models that voted "biased"
    pub fn vote_count(&self) -> usize {
        self.reasons.len()
    }

    pub fn is_biased(&self) -> bool {
        self.decision == Decision::Biased
    }
}

// =============================================================================
// Entities and the full report
// =============================================================================

/// A named entity found in the headline, e.g. `("Senate", "ORG")`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
}

/// Display text for each model's output, in the order the page shows them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretations {
    pub rule_based: String,
    pub lexicon_based: String,
    pub entities: String,
    pub transformer: String,
}

/// Everything produced for one headline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub headline: String,
    /// Rule-based, lexicon-based and transformer scores, in that order
    pub scores: [ModelScore; 3],
    pub interpretations: Interpretations,
    pub entities: Vec<Entity>,
    pub verdict: Verdict,
    pub threshold: f64,
    pub analyzed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!("POSITIVE".parse::<SentimentLabel>().unwrap(), SentimentLabel::Positive);
        assert_eq!("negative".parse::<SentimentLabel>().unwrap(), SentimentLabel::Negative);
        assert_eq!(" Neu ".parse::<SentimentLabel>().unwrap(), SentimentLabel::Neutral);
        assert!("LABEL_1".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(Decision::Biased.to_string(), "Biased");
        assert_eq!(Decision::Neutral.to_string(), "Neutral / Unbiased");
    }

    #[test]
    fn test_score_serializes_snake_case() {
        let score = ModelScore {
            source: ModelSource::RuleBased,
            label: SentimentLabel::Negative,
            magnitude: -0.5,
        };
        let json = serde_json::to_value(score).unwrap();
        assert_eq!(json["source"], "rule_based");
        assert_eq!(json["label"], "negative");
    }
}
