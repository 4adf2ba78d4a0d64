//! # Polarity scorer
//!
//! Adjective-centric polarity lexicon. Each matched word contributes one
//! assessment in `[-1, 1]`; the polarity of the text is their mean.

use std::collections::{HashMap, HashSet};

use super::tokenize;
use crate::models::ModelScore;
use crate::normalize;

/// Applied to an assessment preceded by a negation
const NEGATION_FACTOR: f64 = -0.5;

const POLARITIES: &[(&str, f64)] = &[
    // positive
    ("good", 0.7), ("great", 0.8), ("excellent", 1.0), ("best", 1.0), ("better", 0.5),
    ("amazing", 0.6), ("awesome", 1.0), ("wonderful", 1.0), ("fantastic", 0.4),
    ("brilliant", 0.9), ("perfect", 1.0), ("happy", 0.8), ("nice", 0.6), ("beautiful", 0.85),
    ("strong", 0.43), ("successful", 0.75), ("positive", 0.23), ("fair", 0.7), ("free", 0.4),
    ("safe", 0.5), ("new", 0.14), ("important", 0.4), ("hopeful", 0.5), ("impressive", 1.0),
    ("incredible", 0.9), ("remarkable", 0.75), ("innovative", 0.5), ("effective", 0.6),
    ("bold", 0.33), ("peaceful", 0.5), ("right", 0.29), ("generous", 0.6), ("brave", 0.8),
    ("smart", 0.21), ("wise", 0.7), ("honest", 0.6), ("popular", 0.6), ("favorable", 0.5),
    ("glorious", 0.8), ("thriving", 0.6), ("stunning", 0.5), ("superb", 1.0),
    ("outstanding", 0.5), ("magnificent", 1.0), ("heroic", 0.6), ("proud", 0.8),
    ("lucky", 0.33), ("healthy", 0.5), ("stable", 0.2), ("robust", 0.4),
    // negative
    ("bad", -0.7), ("worse", -0.4), ("worst", -1.0), ("terrible", -1.0), ("horrible", -1.0),
    ("awful", -1.0), ("poor", -0.4), ("sad", -0.5), ("angry", -0.5), ("dangerous", -0.6),
    ("deadly", -0.2), ("violent", -0.8), ("wrong", -0.5), ("evil", -1.0), ("stupid", -0.8),
    ("ridiculous", -0.33), ("absurd", -0.4), ("corrupt", -0.5), ("weak", -0.375),
    ("disastrous", -1.0), ("tragic", -0.75), ("shocking", -1.0), ("brutal", -0.875),
    ("devastating", -0.8), ("chaotic", -0.6), ("illegal", -0.5), ("unfair", -0.7),
    ("false", -0.4), ("fake", -0.5), ("dead", -0.2), ("failed", -0.5), ("negative", -0.3),
    ("disgraceful", -0.9), ("shameful", -0.7), ("outrageous", -0.5), ("dismal", -0.6),
    ("grim", -0.5), ("harsh", -0.4), ("hostile", -0.2), ("reckless", -0.4),
    ("careless", -0.3), ("crazy", -0.6), ("insane", -1.0), ("pathetic", -1.0),
    ("disappointing", -0.6), ("furious", -0.6), ("hateful", -0.8), ("bitter", -0.1),
    ("worthless", -0.8), ("useless", -0.5), ("scary", -0.5), ("ugly", -0.7),
    ("painful", -0.7), ("toxic", -0.6), ("miserable", -1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3), ("really", 1.3), ("extremely", 1.5), ("so", 1.3), ("too", 1.2),
    ("quite", 1.1), ("incredibly", 1.4), ("highly", 1.3), ("truly", 1.3),
    ("utterly", 1.5), ("totally", 1.3), ("slightly", 0.7), ("somewhat", 0.8),
    ("fairly", 0.9), ("rather", 0.9),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "nor", "without", "cannot"];

/// Mean-of-assessments polarity scorer. Build once and share.
pub struct PolarityScorer {
    polarities: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer {
    pub fn new() -> Self {
        Self {
            polarities: POLARITIES.iter().map(|(w, p)| (w.to_string(), *p)).collect(),
            intensifiers: INTENSIFIERS.iter().map(|(w, m)| (w.to_string(), *m)).collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Number of words with a polarity
    pub fn len(&self) -> usize {
        self.polarities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarities.is_empty()
    }

    /// Score `text` and normalize the result
    pub fn score(&self, text: &str) -> ModelScore {
        normalize::from_polarity(self.polarity(text))
    }

    /// Polarity in `[-1, 1]`, 0.0 when no word matches
    pub fn polarity(&self, text: &str) -> f64 {
        let lowered: Vec<String> = tokenize(text).iter().map(|t| t.to_lowercase()).collect();

        let assessments: Vec<f64> = lowered
            .iter()
            .enumerate()
            .filter_map(|(i, word)| {
                self.polarities
                    .get(word)
                    .map(|&polarity| self.assess(&lowered, i, polarity))
            })
            .collect();

        if assessments.is_empty() {
            return 0.0;
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    fn assess(&self, lowered: &[String], i: usize, polarity: f64) -> f64 {
        let mut assessment = polarity;

        if i >= 1 {
            if let Some(multiplier) = self.intensifiers.get(&lowered[i - 1]) {
                assessment *= multiplier;
            }
        }

        let negated = lowered[i.saturating_sub(2)..i]
            .iter()
            .any(|w| self.negations.contains(w) || w.ends_with("n't"));
        if negated {
            assessment *= NEGATION_FACTOR;
        }

        assessment
    }
}
