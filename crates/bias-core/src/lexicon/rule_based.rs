//! # Rule-based compound scorer
//!
//! Valence-aware lexicon scorer tuned for short, headline-length text. Word
//! valences live on a `[-4, 4]` scale and are adjusted by a handful of
//! rules before the sum is squashed into a compound score in `[-1, 1]`.

use std::collections::{HashMap, HashSet};

use super::tokenize;
use crate::models::ModelScore;
use crate::normalize;

/// Added to a valence when a word is shouted in otherwise mixed-case text
const CAPS_INCR: f64 = 0.733;
/// Booster and dampener step
const BOOST_INCR: f64 = 0.293;
const BOOST_DECR: f64 = -0.293;
/// Multiplier applied to a valence that follows a negation
const NEGATION_SCALAR: f64 = -0.74;
/// Per exclamation mark, at most four count
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Per question mark when two or three appear; four or more take the max
const QUESTION_INCR: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
/// Normalization constant, approximates the max expected sum
const ALPHA: f64 = 15.0;

const VALENCES: &[(&str, f64)] = &[
    // positive
    ("good", 1.9), ("great", 3.1), ("excellent", 3.2), ("best", 3.2), ("better", 1.9),
    ("amazing", 2.8), ("awesome", 3.1), ("wonderful", 2.7), ("fantastic", 2.6),
    ("brilliant", 2.8), ("outstanding", 3.0), ("superb", 3.1), ("perfect", 2.7),
    ("love", 3.2), ("loves", 2.7), ("loved", 2.9), ("like", 1.5), ("likes", 1.8),
    ("happy", 2.7), ("glad", 2.0), ("joy", 2.8), ("celebrate", 2.7), ("celebrates", 2.7),
    ("win", 2.8), ("wins", 2.7), ("won", 2.7), ("winning", 2.4), ("victory", 2.8),
    ("success", 2.7), ("successful", 2.8), ("triumph", 3.1), ("hero", 2.6), ("heroes", 2.3),
    ("hope", 1.9), ("hopes", 1.6), ("hopeful", 1.6), ("optimism", 2.5), ("optimistic", 1.3),
    ("boost", 1.7), ("boosts", 1.3), ("gain", 2.0), ("gains", 1.4), ("growth", 1.6),
    ("surge", 1.2), ("surges", 1.2), ("soar", 1.9), ("soars", 1.9), ("rally", 1.4),
    ("rallies", 1.4), ("recover", 1.4), ("recovery", 1.4), ("rebound", 1.2),
    ("improve", 1.9), ("improves", 1.8), ("improved", 2.1), ("strong", 2.3),
    ("stronger", 1.6), ("safe", 1.9), ("secure", 1.4), ("peace", 2.5), ("peaceful", 2.2),
    ("praise", 2.6), ("praised", 2.2), ("praises", 2.4), ("support", 1.7), ("supports", 1.5),
    ("help", 1.7), ("helps", 1.6), ("benefit", 2.0), ("benefits", 1.6), ("breakthrough", 2.5),
    ("innovative", 1.9), ("historic", 1.5), ("record", 0.8), ("thrive", 2.5), ("thrives", 2.5),
    ("agree", 1.5), ("agreement", 2.2), ("deal", 0.8), ("fair", 1.3), ("honest", 2.3),
    ("brave", 2.4), ("generous", 2.3), ("kind", 2.4), ("free", 2.3), ("freedom", 3.2),
    ("welcome", 2.0), ("welcomes", 1.7), ("reward", 2.1), ("rescue", 2.3), ("rescued", 1.8),
    ("save", 2.2), ("saves", 2.0), ("saved", 1.9), ("smart", 1.7), ("wise", 1.8),
    ("beautiful", 2.9), ("incredible", 2.2), ("stunning", 2.1), ("impressive", 2.3),
    ("landmark", 1.0), ("unprecedented", 0.6), ("ambitious", 1.1), ("effective", 2.1),
    // negative
    ("bad", -2.5), ("worse", -2.1), ("worst", -3.1), ("terrible", -2.1), ("horrible", -2.5),
    ("awful", -2.0), ("dreadful", -1.9), ("disaster", -3.1), ("disastrous", -2.9),
    ("catastrophe", -3.4), ("catastrophic", -2.2), ("tragedy", -3.4), ("tragic", -3.3),
    ("crisis", -3.1), ("chaos", -2.7), ("chaotic", -2.2), ("fail", -2.5), ("fails", -1.8),
    ("failed", -2.3), ("failure", -2.3), ("lose", -1.3), ("loses", -1.3), ("lost", -1.3),
    ("loss", -1.3), ("losses", -1.7), ("defeat", -2.0), ("defeated", -2.1),
    ("kill", -3.7), ("kills", -2.5), ("killed", -3.5), ("killing", -3.4), ("dead", -3.3),
    ("death", -2.9), ("deaths", -2.9), ("die", -2.9), ("dies", -2.9), ("died", -2.6),
    ("murder", -3.7), ("attack", -2.1), ("attacks", -1.9), ("war", -2.9), ("violence", -3.1),
    ("violent", -2.9), ("terror", -3.4), ("terrorist", -3.7), ("threat", -2.4),
    ("threatens", -1.6), ("danger", -2.4), ("dangerous", -2.1), ("fear", -2.2),
    ("fears", -1.8), ("afraid", -2.0), ("panic", -2.3), ("scandal", -1.9), ("corrupt", -3.0),
    ("corruption", -1.9), ("fraud", -2.8), ("scam", -2.7), ("lie", -1.6), ("lies", -1.8),
    ("liar", -3.1), ("hate", -2.7), ("hates", -1.9), ("angry", -2.3), ("anger", -2.7),
    ("outrage", -2.3), ("outraged", -2.5), ("furious", -2.7), ("slam", -1.5), ("slams", -1.7),
    ("blast", -1.1), ("blasts", -1.1), ("blame", -1.4), ("blames", -1.7), ("criticize", -1.6),
    ("criticizes", -1.4), ("criticism", -1.9), ("condemn", -1.6), ("condemns", -2.3),
    ("crash", -1.7), ("crashes", -1.7), ("plunge", -1.5), ("plunges", -1.5), ("collapse", -2.2),
    ("collapses", -2.2), ("slump", -1.4), ("decline", -1.1), ("declines", -1.1),
    ("drop", -1.1), ("drops", -1.1), ("fall", -1.2), ("falls", -1.0), ("cut", -1.1),
    ("cuts", -1.2), ("weak", -1.9), ("weaker", -1.6), ("problem", -1.7), ("problems", -1.7),
    ("trouble", -1.7), ("struggle", -2.0), ("struggles", -1.9), ("struggling", -1.8),
    ("sad", -2.1), ("grief", -2.2), ("suffer", -2.1), ("suffering", -2.1), ("pain", -2.3),
    ("hurt", -2.4), ("injured", -1.7), ("victim", -2.1), ("victims", -1.9), ("abuse", -3.2),
    ("shame", -2.1), ("shameful", -2.2), ("disgrace", -2.2), ("disgraceful", -2.2),
    ("ridiculous", -1.5), ("absurd", -1.3), ("stupid", -2.4), ("idiot", -2.3), ("evil", -3.4),
    ("destroy", -2.7), ("destroys", -2.6), ("destroyed", -2.7), ("ruin", -2.8),
    ("ruins", -2.1), ("wrong", -2.1), ("illegal", -2.6), ("arrest", -1.4), ("arrested", -2.1),
    ("accused", -1.4), ("guilty", -1.8), ("protest", -1.0), ("protests", -0.9),
    ("riot", -2.6), ("riots", -2.1), ("warn", -0.4), ("warns", -0.4), ("warning", -1.4),
    ("risk", -1.1), ("risks", -1.1), ("recession", -2.1), ("inflation", -0.8),
    ("layoffs", -1.8), ("unemployment", -1.9), ("poverty", -2.3), ("controversial", -0.8),
    ("shocking", -1.7), ("devastating", -3.1), ("devastated", -3.1), ("brutal", -3.1),
];

/// Intensifiers (positive) and dampeners (negative)
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCR), ("amazingly", BOOST_INCR), ("completely", BOOST_INCR),
    ("considerably", BOOST_INCR), ("deeply", BOOST_INCR), ("enormously", BOOST_INCR),
    ("entirely", BOOST_INCR), ("especially", BOOST_INCR), ("exceptionally", BOOST_INCR),
    ("extremely", BOOST_INCR), ("fully", BOOST_INCR), ("greatly", BOOST_INCR),
    ("highly", BOOST_INCR), ("hugely", BOOST_INCR), ("incredibly", BOOST_INCR),
    ("intensely", BOOST_INCR), ("massively", BOOST_INCR), ("more", BOOST_INCR),
    ("most", BOOST_INCR), ("particularly", BOOST_INCR), ("quite", BOOST_INCR),
    ("really", BOOST_INCR), ("remarkably", BOOST_INCR), ("so", BOOST_INCR),
    ("substantially", BOOST_INCR), ("thoroughly", BOOST_INCR), ("totally", BOOST_INCR),
    ("tremendously", BOOST_INCR), ("truly", BOOST_INCR), ("unbelievably", BOOST_INCR),
    ("utterly", BOOST_INCR), ("very", BOOST_INCR),
    ("almost", BOOST_DECR), ("barely", BOOST_DECR), ("hardly", BOOST_DECR),
    ("less", BOOST_DECR), ("little", BOOST_DECR), ("marginally", BOOST_DECR),
    ("occasionally", BOOST_DECR), ("partly", BOOST_DECR), ("scarcely", BOOST_DECR),
    ("slightly", BOOST_DECR), ("somewhat", BOOST_DECR),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere",
    "cannot", "without", "aint", "isnt", "arent", "wasnt", "werent", "dont", "doesnt",
    "didnt", "wont", "wouldnt", "cant", "couldnt", "shouldnt", "hasnt", "havent", "hadnt",
];

/// Compound sentiment scorer. Build once and share.
pub struct RuleBasedScorer {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for RuleBasedScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBasedScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().map(|(w, v)| (w.to_string(), *v)).collect(),
            boosters: BOOSTERS.iter().map(|(w, v)| (w.to_string(), *v)).collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Number of words with a valence
    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }

    /// Score `text` and normalize the result
    pub fn score(&self, text: &str) -> ModelScore {
        normalize::from_compound(self.compound(text))
    }

    /// Compound score in `[-1, 1]`, 0.0 when nothing in the text carries sentiment
    pub fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let cap_differential = has_cap_differential(&tokens);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let mut sentiments: Vec<f64> = (0..tokens.len())
            .map(|i| {
                if self.boosters.contains_key(&lowered[i]) {
                    0.0
                } else {
                    self.valence(&tokens, &lowered, i, cap_differential)
                }
            })
            .collect();

        apply_but_rule(&lowered, &mut sentiments);

        let sum: f64 = sentiments.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let emphasis = punctuation_emphasis(text);
        let total = if sum > 0.0 { sum + emphasis } else { sum - emphasis };

        (total / (total * total + ALPHA).sqrt()).clamp(-1.0, 1.0)
    }

    fn valence(&self, tokens: &[&str], lowered: &[String], i: usize, cap_differential: bool) -> f64 {
        let Some(&base) = self.valences.get(&lowered[i]) else {
            return 0.0;
        };

        let mut valence = base;
        if cap_differential && is_all_caps(tokens[i]) {
            valence += CAPS_INCR.copysign(valence);
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prev = &lowered[i - distance];
            // Modifiers only apply across words that carry no sentiment themselves
            if self.valences.contains_key(prev) {
                continue;
            }

            let decay = match distance {
                1 => 1.0,
                2 => 0.95,
                _ => 0.9,
            };
            valence += self.booster_scalar(tokens[i - distance], prev, valence, cap_differential) * decay;

            if self.is_negation(prev) {
                valence *= NEGATION_SCALAR;
            }
        }

        valence
    }

    fn booster_scalar(&self, token: &str, lowered: &str, valence: f64, cap_differential: bool) -> f64 {
        let Some(&step) = self.boosters.get(lowered) else {
            return 0.0;
        };

        let mut scalar = if valence < 0.0 { -step } else { step };
        if cap_differential && is_all_caps(token) {
            scalar += CAPS_INCR.copysign(valence);
        }
        scalar
    }

    fn is_negation(&self, lowered: &str) -> bool {
        self.negations.contains(lowered) || lowered.contains("n't")
    }
}

/// Sentiment before a contrastive "but" is halved, after it amplified
fn apply_but_rule(lowered: &[String], sentiments: &mut [f64]) {
    let Some(but_idx) = lowered.iter().position(|w| w == "but") else {
        return;
    };

    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < but_idx {
            *sentiment *= 0.5;
        } else if i > but_idx {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamations as f64 * EXCLAMATION_INCR + question_emphasis
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(|c| c.is_alphabetic()) && !token.chars().any(|c| c.is_lowercase())
}

/// True when some, but not all, tokens are shouted
fn has_cap_differential(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|t| is_all_caps(t)).count();
    shouted > 0 && shouted < tokens.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;

    #[test]
    fn test_positive_headline() {
        let scorer = RuleBasedScorer::new();
        let compound = scorer.compound("Company reports great results");
        assert!(compound > 0.05, "compound = {}", compound);
        assert_eq!(scorer.score("Company reports great results").label, SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_headline() {
        let scorer = RuleBasedScorer::new();
        let compound = scorer.compound("Terrible disaster kills dozens");
        assert!(compound < -0.05, "compound = {}", compound);
    }

    #[test]
    fn test_no_sentiment_words() {
        let scorer = RuleBasedScorer::new();
        assert_eq!(scorer.compound("Senate meets on Tuesday"), 0.0);
        assert_eq!(scorer.compound(""), 0.0);
        assert_eq!(scorer.score("Senate meets on Tuesday").label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_negation_flips_sign() {
        let scorer = RuleBasedScorer::new();
        assert!(scorer.compound("the plan is good") > 0.0);
        assert!(scorer.compound("the plan is not good") < 0.0);
        assert!(scorer.compound("the plan isn't good") < 0.0);
    }

    #[test]
    fn test_booster_and_dampener() {
        let scorer = RuleBasedScorer::new();
        let plain = scorer.compound("a good plan");
        assert!(scorer.compound("a very good plan") > plain);
        assert!(scorer.compound("a slightly good plan") < plain);
    }

    #[test]
    fn test_caps_emphasis() {
        let scorer = RuleBasedScorer::new();
        let shouted = scorer.compound("GREAT results for the team");
        let plain = scorer.compound("great results for the team");
        assert!(shouted > plain);
        // All caps everywhere carries no differential
        assert_eq!(
            scorer.compound("GREAT RESULTS FOR THE TEAM"),
            scorer.compound("great results for the team")
        );
    }

    #[test]
    fn test_exclamation_emphasis() {
        let scorer = RuleBasedScorer::new();
        let plain = scorer.compound("great news");
        assert!(scorer.compound("great news!!!") > plain);
        assert!(scorer.compound("terrible news!!!") < scorer.compound("terrible news"));
    }

    #[test]
    fn test_question_emphasis_steps_to_max() {
        assert_eq!(punctuation_emphasis("why?"), 0.0);
        assert!((punctuation_emphasis("why??") - 0.36).abs() < 1e-9);
        assert!((punctuation_emphasis("why???") - 0.54).abs() < 1e-9);
        assert_eq!(punctuation_emphasis("why????"), MAX_QUESTION_EMPHASIS);
        assert_eq!(punctuation_emphasis("why??????"), MAX_QUESTION_EMPHASIS);

        let scorer = RuleBasedScorer::new();
        assert!(scorer.compound("great news????") > scorer.compound("great news???"));
    }

    #[test]
    fn test_but_shifts_weight() {
        let scorer = RuleBasedScorer::new();
        assert!(scorer.compound("the plan is good but the rollout was awful") < 0.0);
        assert!(scorer.compound("the rollout was awful but the plan is good") > 0.0);
    }

    #[test]
    fn test_compound_stays_bounded() {
        let scorer = RuleBasedScorer::new();
        let text = "great amazing excellent wonderful best love triumph victory !!!!";
        let compound = scorer.compound(text);
        assert!(compound > 0.9 && compound <= 1.0);
    }
}
