//! Bias voting engine
//!
//! Three normalized scores each get one vote. A score votes "biased" when it
//! carries a non-neutral label and its magnitude reaches the threshold; two
//! or more votes make the headline biased.

use crate::models::{Decision, ModelScore, SentimentLabel, Verdict};

/// Minimum absolute magnitude for a score to count as a vote
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Votes needed for a biased verdict (majority of three)
pub const MAJORITY: usize = 2;

/// Decide a verdict from the three model scores.
///
/// The comparison is on `|magnitude|` and is inclusive, so a negative
/// compound score of -0.3 votes just like a confidence of 0.3.
pub fn vote(scores: &[ModelScore; 3], threshold: f64) -> Verdict {
    let reasons: Vec<String> = scores
        .iter()
        .filter(|score| is_bias_vote(score, threshold))
        .map(vote_reason)
        .collect();

    let decision = if reasons.len() >= MAJORITY {
        Decision::Biased
    } else {
        Decision::Neutral
    };

    Verdict { decision, reasons }
}

fn is_bias_vote(score: &ModelScore, threshold: f64) -> bool {
    score.label != SentimentLabel::Neutral && score.magnitude.abs() >= threshold
}

fn vote_reason(score: &ModelScore) -> String {
    format!(
        "{} model reports {} sentiment (score: {:.2})",
        score.source, score.label, score.magnitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelSource;

    fn scores(entries: [(SentimentLabel, f64); 3]) -> [ModelScore; 3] {
        let sources = [
            ModelSource::RuleBased,
            ModelSource::LexiconBased,
            ModelSource::Transformer,
        ];
        let mut out = [ModelScore {
            source: ModelSource::RuleBased,
            label: SentimentLabel::Neutral,
            magnitude: 0.0,
        }; 3];
        for (i, (label, magnitude)) in entries.into_iter().enumerate() {
            out[i] = ModelScore {
                source: sources[i],
                label,
                magnitude,
            };
        }
        out
    }

    #[test]
    fn test_two_votes_is_biased() {
        let verdict = vote(
            &scores([
                (SentimentLabel::Positive, 0.5),
                (SentimentLabel::Negative, 0.4),
                (SentimentLabel::Neutral, 0.9),
            ]),
            DEFAULT_THRESHOLD,
        );
        assert_eq!(verdict.decision, Decision::Biased);
        assert_eq!(verdict.vote_count(), 2);
    }

    #[test]
    fn test_no_votes_is_neutral() {
        let verdict = vote(
            &scores([
                (SentimentLabel::Positive, 0.2),
                (SentimentLabel::Negative, 0.1),
                (SentimentLabel::Neutral, 0.0),
            ]),
            DEFAULT_THRESHOLD,
        );
        assert_eq!(verdict.decision, Decision::Neutral);
        assert!(verdict.reasons.is_empty());
        assert_eq!(verdict.decision.to_string(), "Neutral / Unbiased");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let verdict = vote(
            &scores([
                (SentimentLabel::Positive, 0.3),
                (SentimentLabel::Neutral, 0.0),
                (SentimentLabel::Negative, 0.35),
            ]),
            0.3,
        );
        assert!(verdict.is_biased());
        assert_eq!(verdict.vote_count(), 2);
    }

    #[test]
    fn test_neutral_never_votes() {
        let verdict = vote(
            &scores([
                (SentimentLabel::Neutral, 1.0),
                (SentimentLabel::Neutral, -1.0),
                (SentimentLabel::Positive, 0.99),
            ]),
            DEFAULT_THRESHOLD,
        );
        assert_eq!(verdict.vote_count(), 1);
        assert_eq!(verdict.decision, Decision::Neutral);
    }

    #[test]
    fn test_negative_magnitude_compared_by_absolute_value() {
        let verdict = vote(
            &scores([
                (SentimentLabel::Negative, -0.6),
                (SentimentLabel::Negative, -0.3),
                (SentimentLabel::Negative, 0.1),
            ]),
            DEFAULT_THRESHOLD,
        );
        assert!(verdict.is_biased());
        assert_eq!(verdict.vote_count(), 2);
    }

    #[test]
    fn test_three_votes_and_reason_order() {
        let verdict = vote(
            &scores([
                (SentimentLabel::Positive, 0.72),
                (SentimentLabel::Positive, 0.5),
                (SentimentLabel::Positive, 0.99),
            ]),
            DEFAULT_THRESHOLD,
        );
        assert_eq!(verdict.vote_count(), 3);
        assert_eq!(
            verdict.reasons,
            vec![
                "Rule-based model reports positive sentiment (score: 0.72)".to_string(),
                "Lexicon-based model reports positive sentiment (score: 0.50)".to_string(),
                "Transformer model reports positive sentiment (score: 0.99)".to_string(),
            ]
        );
    }

    #[test]
    fn test_vote_is_deterministic() {
        let input = scores([
            (SentimentLabel::Negative, -0.45),
            (SentimentLabel::Neutral, 0.05),
            (SentimentLabel::Negative, 0.88),
        ]);
        let first = vote(&input, 0.4);
        let second = vote(&input, 0.4);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_threshold_counts_every_labeled_score() {
        let verdict = vote(
            &scores([
                (SentimentLabel::Positive, 0.0),
                (SentimentLabel::Negative, 0.0),
                (SentimentLabel::Neutral, 0.0),
            ]),
            0.0,
        );
        assert_eq!(verdict.vote_count(), 2);
        assert!(verdict.is_biased());
    }
}
