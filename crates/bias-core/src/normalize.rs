//! Score normalization
//!
//! Each model family reports sentiment differently. These functions map the
//! native output of each one onto a [`ModelScore`] so the voting engine can
//! treat them uniformly.

use crate::error::{BiasError, BiasResult};
use crate::models::{ModelScore, ModelSource, SentimentLabel};

/// Compound scores within this distance of zero are neutral
pub const RULE_BASED_CUTOFF: f64 = 0.05;

/// Polarity scores within this distance of zero are neutral
pub const LEXICON_CUTOFF: f64 = 0.1;

fn label_for(score: f64, cutoff: f64) -> SentimentLabel {
    if score > cutoff {
        SentimentLabel::Positive
    } else if score < -cutoff {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Normalize a rule-based compound score in `[-1, 1]`
pub fn from_compound(compound: f64) -> ModelScore {
    ModelScore {
        source: ModelSource::RuleBased,
        label: label_for(compound, RULE_BASED_CUTOFF),
        magnitude: compound,
    }
}

/// Normalize a lexicon polarity score in `[-1, 1]`
pub fn from_polarity(polarity: f64) -> ModelScore {
    ModelScore {
        source: ModelSource::LexiconBased,
        label: label_for(polarity, LEXICON_CUTOFF),
        magnitude: polarity,
    }
}

/// Normalize a transformer classification.
///
/// The classifier already picks the label; its confidence becomes the
/// magnitude and must lie in `[0, 1]`.
pub fn from_classifier(label: SentimentLabel, confidence: f64) -> BiasResult<ModelScore> {
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(BiasError::InvalidModelOutput(format!(
            "classifier confidence {} outside [0, 1]",
            confidence
        )));
    }

    Ok(ModelScore {
        source: ModelSource::Transformer,
        label,
        magnitude: confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_labels() {
        assert_eq!(from_compound(0.5).label, SentimentLabel::Positive);
        assert_eq!(from_compound(-0.06).label, SentimentLabel::Negative);
        assert_eq!(from_compound(0.0).label, SentimentLabel::Neutral);
        assert_eq!(from_compound(-0.5).magnitude, -0.5);
    }

    #[test]
    fn test_cutoffs_are_exclusive() {
        assert_eq!(from_compound(0.05).label, SentimentLabel::Neutral);
        assert_eq!(from_compound(-0.05).label, SentimentLabel::Neutral);
        assert_eq!(from_polarity(0.1).label, SentimentLabel::Neutral);
        assert_eq!(from_polarity(-0.1).label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_polarity_uses_wider_cutoff() {
        // Positive for the rule scorer, still neutral for the polarity scorer
        assert_eq!(from_compound(0.08).label, SentimentLabel::Positive);
        assert_eq!(from_polarity(0.08).label, SentimentLabel::Neutral);
        assert_eq!(from_polarity(-0.25).label, SentimentLabel::Negative);
        assert_eq!(from_polarity(-0.25).source, ModelSource::LexiconBased);
    }

    #[test]
    fn test_classifier_passthrough() {
        let score = from_classifier(SentimentLabel::Negative, 0.97).unwrap();
        assert_eq!(score.source, ModelSource::Transformer);
        assert_eq!(score.label, SentimentLabel::Negative);
        assert_eq!(score.magnitude, 0.97);
    }

    #[test]
    fn test_classifier_rejects_bad_confidence() {
        assert!(from_classifier(SentimentLabel::Positive, 1.2).is_err());
        assert!(from_classifier(SentimentLabel::Positive, -0.1).is_err());
        assert!(from_classifier(SentimentLabel::Positive, f64::NAN).is_err());
    }
}
