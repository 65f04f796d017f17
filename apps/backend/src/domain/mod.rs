//! Domain layer: category records, the dataset, and match scoring.

pub mod category;
pub mod dataset;
pub mod scoring;
pub mod shuffle;


// Re-exports for ergonomics
pub use category::{CategoryRecord, MatchPair, MatchResult, PlayableCategory};
pub use dataset::Dataset;
pub use scoring::{score_pair, score_submission, Scorecard};
pub use shuffle::shuffled_copy;
