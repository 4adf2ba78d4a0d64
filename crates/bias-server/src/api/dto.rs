use bias_core::{AnalysisReport, Entity, Interpretations, ModelScore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// GET /health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub threshold: f64,
    pub sentiment_model: String,
    pub ner_model: String,
}

// ============================================================================
// POST /analyze (form) and POST /api/v1/analyze (JSON)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub headline: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub id: String,
    pub headline: String,
    /// `Biased` or `Neutral / Unbiased`
    pub verdict: String,
    pub biased: bool,
    pub votes: usize,
    pub reasons: Vec<String>,
    pub scores: Vec<ModelScore>,
    pub interpretations: Interpretations,
    pub entities: Vec<Entity>,
    pub threshold: f64,
    pub analyzed_at: DateTime<Utc>,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        Self {
            id: report.id.to_string(),
            headline: report.headline,
            verdict: report.verdict.decision.to_string(),
            biased: report.verdict.is_biased(),
            votes: report.verdict.vote_count(),
            reasons: report.verdict.reasons,
            scores: report.scores.to_vec(),
            interpretations: report.interpretations,
            entities: report.entities,
            threshold: report.threshold,
            analyzed_at: report.analyzed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bias_core::{build_report, normalize, SentimentLabel};

    #[test]
    fn test_response_from_report() {
        let scores = [
            normalize::from_compound(0.64),
            normalize::from_polarity(0.8),
            normalize::from_classifier(SentimentLabel::Positive, 0.99).unwrap(),
        ];
        let report = build_report("A great victory", scores, vec![], 0.3);
        let id = report.id.to_string();

        let response = AnalyzeResponse::from(report);
        assert_eq!(response.id, id);
        assert_eq!(response.verdict, "Biased");
        assert!(response.biased);
        assert_eq!(response.votes, 3);
        assert_eq!(response.scores.len(), 3);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["scores"][2]["source"], "transformer");
        assert_eq!(json["interpretations"]["transformer"], "POSITIVE (0.99 confidence)");
    }
}
