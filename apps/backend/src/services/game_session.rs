//! Game session service: builds shuffled game payloads and scores submissions.

use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::config::game::GameConfig;
use crate::domain::category::{MatchPair, MatchResult, PlayableCategory};
use crate::domain::dataset::Dataset;
use crate::domain::scoring::score_submission;
use crate::domain::shuffle::shuffled_copy;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MISSING_PAIRS_MESSAGE: &str = "Request body must include a pairs array.";
pub const MALFORMED_PAIR_MESSAGE: &str = "Each pair must be an object.";

/// Payload for a new round of the matching game.
#[derive(Debug, Clone, Serialize)]
pub struct GamePayload {
    pub categories: Vec<PlayableCategory>,
    pub descriptions: Vec<String>,
    pub help: String,
}

/// Scored submission as returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    pub results: Vec<MatchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_flag: Option<String>,
}

/// Game session service over the shared, read-only dataset.
pub struct GameSessionService<'a> {
    dataset: &'a Dataset,
    config: &'a GameConfig,
}

impl<'a> GameSessionService<'a> {
    pub fn new(dataset: &'a Dataset, config: &'a GameConfig) -> Self {
        Self { dataset, config }
    }

    /// Categories in dataset order plus every correct description, shuffled.
    ///
    /// Each call draws a fresh order; the dataset itself is never reordered.
    pub fn new_game<R: Rng + ?Sized>(&self, rng: &mut R) -> GamePayload {
        let descriptions: Vec<String> = self
            .dataset
            .descriptions()
            .into_iter()
            .map(str::to_owned)
            .collect();

        GamePayload {
            categories: self.dataset.playable(),
            descriptions: shuffled_copy(&descriptions, rng),
            help: self.config.help.clone(),
        }
    }

    /// Score the raw `pairs` member of a check request.
    ///
    /// Anything other than an array of pair objects is rejected before any
    /// pair is scored. Inside a pair object, missing or non-string members
    /// are scored in-band and never fail the request.
    pub fn check(&self, pairs: Option<Value>) -> Result<CheckOutcome, DomainError> {
        let pairs = parse_pairs(pairs)?;
        Ok(self.check_pairs(&pairs))
    }

    pub fn check_pairs(&self, pairs: &[MatchPair]) -> CheckOutcome {
        let card = score_submission(self.dataset, pairs);

        info!(
            submitted = pairs.len(),
            correct = card.correct_count(),
            categories = self.dataset.len(),
            all_solved = card.all_solved,
            "check.scored"
        );

        CheckOutcome {
            final_flag: card.all_solved.then(|| self.config.final_flag.clone()),
            results: card.results,
        }
    }
}

fn parse_pairs(pairs: Option<Value>) -> Result<Vec<MatchPair>, DomainError> {
    let Some(Value::Array(items)) = pairs else {
        return Err(DomainError::validation(
            ValidationKind::InvalidPairs,
            MISSING_PAIRS_MESSAGE,
        ));
    };

    items
        .iter()
        .map(|item| match item {
            Value::Object(fields) => Ok(MatchPair::new(
                str_member(fields, "category"),
                str_member(fields, "description"),
            )),
            _ => Err(DomainError::validation(
                ValidationKind::Other("PAIR_SHAPE".into()),
                MALFORMED_PAIR_MESSAGE,
            )),
        })
        .collect()
}

/// String member of a pair object; anything else reads as `""`, which never
/// matches a dataset category or description.
fn str_member<'a>(fields: &'a Map<String, Value>, key: &str) -> &'a str {
    fields.get(key).and_then(Value::as_str).unwrap_or_default()
}
