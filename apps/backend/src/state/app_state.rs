use std::sync::Arc;

use crate::config::game::GameConfig;
use crate::domain::dataset::Dataset;
use crate::services::game_session::GameSessionService;

/// Application state shared by every worker.
///
/// Everything here is read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Category dataset loaded at startup
    pub dataset: Arc<Dataset>,
    /// Final flag and help text
    pub game: GameConfig,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, game: GameConfig) -> Self {
        Self { dataset, game }
    }

    pub fn game_session(&self) -> GameSessionService<'_> {
        GameSessionService::new(&self.dataset, &self.game)
    }
}
