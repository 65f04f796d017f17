//! Category records and the per-submission match types.

use serde::{Deserialize, Serialize};

/// One security category as stored in the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub category: String,
    pub description: String,
    pub hint: String,
    pub explanation: String,
    pub flag: String,
}

/// Player-facing view of a record: no description, no flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayableCategory {
    pub category: String,
    pub hint: String,
    pub explanation: String,
}

impl From<&CategoryRecord> for PlayableCategory {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            category: record.category.clone(),
            hint: record.hint.clone(),
            explanation: record.explanation.clone(),
        }
    }
}

/// A claimed category → description association.
///
/// Built from the raw submission; an empty category is simply unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPair {
    pub category: String,
    pub description: String,
}

impl MatchPair {
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Outcome for a single submitted pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub category: String,
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub message: &'static str,
}
