use std::path::PathBuf;
use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::domain::dataset::Dataset;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::state::app_state::AppState;

enum DatasetSource {
    Loaded(Arc<Dataset>),
    Path(PathBuf),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    dataset: Option<DatasetSource>,
    game: GameConfig,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            dataset: None,
            game: GameConfig::default(),
        }
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(DatasetSource::Loaded(Arc::new(dataset)));
        self
    }

    /// Load the dataset from disk during `build()`.
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = Some(DatasetSource::Path(path.into()));
        self
    }

    pub fn with_game_config(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let dataset = match self.dataset {
            Some(DatasetSource::Loaded(dataset)) => dataset,
            Some(DatasetSource::Path(path)) => {
                Arc::new(Dataset::load(&path).map_err(DomainError::from)?)
            }
            None => return Err(AppError::config("no dataset configured")),
        };

        Ok(AppState::new(dataset, self.game))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
