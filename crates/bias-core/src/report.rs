//! Report assembly
//!
//! Collects the normalized scores, entities and verdict for one headline,
//! together with the per-model text the page shows next to each chart.

use chrono::Utc;
use uuid::Uuid;

use crate::models::*;
use crate::voting::vote;

/// Build the full report for a headline.
///
/// `scores` must be ordered rule-based, lexicon-based, transformer.
pub fn build_report(
    headline: &str,
    scores: [ModelScore; 3],
    entities: Vec<Entity>,
    threshold: f64,
) -> AnalysisReport {
    let verdict = vote(&scores, threshold);

    let interpretations = Interpretations {
        rule_based: describe_lexicon_score(&scores[0]),
        lexicon_based: describe_lexicon_score(&scores[1]),
        entities: describe_entities(&entities),
        transformer: describe_classification(&scores[2]),
    };

    AnalysisReport {
        id: Uuid::new_v4(),
        headline: headline.to_string(),
        scores,
        interpretations,
        entities,
        verdict,
        threshold,
        analyzed_at: Utc::now(),
    }
}

/// Per-model bias hint for the lexicon scorers
pub fn describe_lexicon_score(score: &ModelScore) -> String {
    match score.label {
        SentimentLabel::Positive => "Possibly Biased (Positive)".to_string(),
        SentimentLabel::Negative => "Possibly Biased (Negative)".to_string(),
        SentimentLabel::Neutral => "Neutral/Unbiased".to_string(),
    }
}

/// Classifier label with its confidence, e.g. `NEGATIVE (0.98 confidence)`
pub fn describe_classification(score: &ModelScore) -> String {
    format!(
        "{} ({:.2} confidence)",
        score.label.to_string().to_uppercase(),
        score.magnitude
    )
}

pub fn describe_entities(entities: &[Entity]) -> String {
    if entities.is_empty() {
        return "No strong entities detected".to_string();
    }

    let listed: Vec<String> = entities
        .iter()
        .map(|e| format!("{} ({})", e.text, e.label))
        .collect();
    format!("Entities detected: {}", listed.join(", "))
}
