use std::path::PathBuf;

use matcher_backend::config::GameConfig;
use matcher_backend::infra::state::build_state;
use matcher_backend::{AppState, CategoryRecord, Dataset};

pub const TEST_FINAL_FLAG: &str = "FLAG{test_final}";

pub fn record(category: &str, description: &str, flag: &str) -> CategoryRecord {
    CategoryRecord {
        category: category.to_string(),
        description: description.to_string(),
        hint: format!("hint {category}"),
        explanation: format!("explanation {category}"),
        flag: flag.to_string(),
    }
}

/// Categories A and B with descriptions descA/descB and flags FLAG_A/FLAG_B.
pub fn ab_dataset() -> Dataset {
    Dataset::from_records(vec![
        record("A", "descA", "FLAG_A"),
        record("B", "descB", "FLAG_B"),
    ])
    .expect("valid A/B dataset")
}

pub fn test_game_config() -> GameConfig {
    GameConfig {
        final_flag: TEST_FINAL_FLAG.to_string(),
        ..GameConfig::default()
    }
}

pub fn ab_state() -> AppState {
    build_state()
        .with_dataset(ab_dataset())
        .with_game_config(test_game_config())
        .build()
        .expect("build A/B state")
}

/// The dataset file shipped with the server.
pub fn shipped_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/llm_owasp_top10.json")
}

pub fn shipped_state() -> AppState {
    build_state()
        .with_dataset_path(shipped_dataset_path())
        .build()
        .expect("shipped dataset should load")
}
