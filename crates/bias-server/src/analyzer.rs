//! Per-request analysis pipeline

use std::time::Instant;

use bias_core::{build_report, validate_headline, AnalysisReport, PolarityScorer, RuleBasedScorer};

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::inference::InferenceClient;

/// Holds every model, built once at startup and shared read-only
pub struct Analyzer {
    rule_based: RuleBasedScorer,
    polarity: PolarityScorer,
    inference: InferenceClient,
    threshold: f64,
}

impl Analyzer {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let rule_based = RuleBasedScorer::new();
        let polarity = PolarityScorer::new();
        tracing::info!(
            rule_based_words = rule_based.len(),
            polarity_words = polarity.len(),
            "Lexicons loaded"
        );

        Ok(Self {
            rule_based,
            polarity,
            inference: InferenceClient::new(&config.inference)?,
            threshold: config.voting.threshold,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn inference(&self) -> &InferenceClient {
        &self.inference
    }

    /// Score a headline with all four models and vote on the result.
    ///
    /// Any model failure aborts the whole request.
    pub async fn analyze(&self, headline: &str) -> AppResult<AnalysisReport> {
        let headline = validate_headline(headline)?;
        let start = Instant::now();

        let rule_based = self.rule_based.score(headline);
        let lexicon_based = self.polarity.score(headline);
        tracing::debug!(
            compound = %rule_based.magnitude,
            polarity = %lexicon_based.magnitude,
            "Lexicon scores computed"
        );

        let entities = self.inference.entities(headline).await?;
        let transformer = self.inference.classify(headline).await?;

        let report = build_report(
            headline,
            [rule_based, lexicon_based, transformer],
            entities,
            self.threshold,
        );

        tracing::info!(
            report_id = %report.id,
            decision = %report.verdict.decision,
            votes = report.verdict.vote_count(),
            entity_count = report.entities.len(),
            duration_ms = %start.elapsed().as_millis(),
            "Headline analyzed"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_empty_headline_rejected_before_models_run() {
        let analyzer = Analyzer::new(&test_config()).unwrap();
        let result = analyzer.analyze("   ").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_unreachable_model_is_fatal() {
        let analyzer = Analyzer::new(&test_config()).unwrap();
        let result = analyzer.analyze("Markets rally on strong jobs report").await;
        assert!(matches!(result, Err(AppError::ModelUnavailable(_))));
    }

    #[test]
    fn test_threshold_from_config() {
        let mut config = test_config();
        config.voting.threshold = 0.45;
        let analyzer = Analyzer::new(&config).unwrap();
        assert_eq!(analyzer.threshold(), 0.45);
        assert_eq!(analyzer.inference().ner_model(), "test-ner");
    }
}
