//! # Bias Core
//!
//! Scoring and decision logic for the headline bias analyzer.
//!
//! A headline is scored by two in-process lexicon models and a hosted
//! transformer classifier. [`normalize`] maps each raw output onto a
//! [`ModelScore`], [`voting::vote`] turns the three scores into a
//! [`Verdict`], and [`report`] assembles everything the page displays.

pub mod error;
pub mod lexicon;
pub mod models;
pub mod normalize;
pub mod report;
pub mod voting;

pub use error::*;
pub use lexicon::{PolarityScorer, RuleBasedScorer};
pub use models::*;
pub use report::build_report;
pub use voting::{vote, DEFAULT_THRESHOLD};
