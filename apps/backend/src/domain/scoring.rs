//! Match checking for submitted category → description pairs.

use crate::domain::category::{MatchPair, MatchResult};
use crate::domain::dataset::Dataset;

pub const UNKNOWN_CATEGORY_MESSAGE: &str = "Unknown category provided.";
pub const MATCHED_MESSAGE: &str =
    "Matched! Enjoy your flag and keep exploring the mitigation notes.";
pub const MISMATCH_MESSAGE: &str =
    "Not quite. Re-read the description and hint to tighten the match.";

/// Scored submission: one result per pair, in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    pub results: Vec<MatchResult>,
    pub all_solved: bool,
}

impl Scorecard {
    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.correct).count()
    }
}

/// Score one pair. Descriptions must match exactly (case-sensitive, no trimming).
pub fn score_pair(dataset: &Dataset, pair: &MatchPair) -> MatchResult {
    let Some(record) = dataset.get(&pair.category) else {
        return MatchResult {
            category: pair.category.clone(),
            correct: false,
            flag: None,
            explanation: None,
            message: UNKNOWN_CATEGORY_MESSAGE,
        };
    };

    let correct = record.description == pair.description;
    MatchResult {
        category: record.category.clone(),
        correct,
        flag: correct.then(|| record.flag.clone()),
        explanation: Some(record.explanation.clone()),
        message: if correct {
            MATCHED_MESSAGE
        } else {
            MISMATCH_MESSAGE
        },
    }
}

/// Score every pair independently; duplicates are not collapsed.
///
/// The submission is solved when it has as many pairs as the dataset has
/// categories and every pair is correct.
pub fn score_submission(dataset: &Dataset, pairs: &[MatchPair]) -> Scorecard {
    let results: Vec<MatchResult> = pairs.iter().map(|p| score_pair(dataset, p)).collect();
    let all_solved = results.len() == dataset.len() && results.iter().all(|r| r.correct);

    Scorecard {
        results,
        all_solved,
    }
}
