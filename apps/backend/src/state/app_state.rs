use std::sync::Arc;

use crate::catalog::CardSource;
use crate::config::GameSettings;
use crate::services::GameService;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub games: GameService,
}

impl AppState {
    pub fn new(games: GameService) -> Self {
        Self { games }
    }

    /// State around a fresh registry fed from `cards`.
    pub fn with_cards(cards: Arc<dyn CardSource>, settings: GameSettings) -> Self {
        Self::new(GameService::new(cards, settings))
    }
}
