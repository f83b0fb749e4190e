use std::path::Path;
use std::sync::Arc;

use diffbetween::catalog::StaticCardSource;
use diffbetween::config::GameSettings;
use diffbetween::domain::Card;
use diffbetween::state::app_state::AppState;
use diffbetween::GameService;

/// `n` distinct cards named `{prefix}{i}`.
pub fn cards(prefix: &str, n: usize) -> Vec<Card> {
    (0..n).map(|i| Card::new(format!("{prefix}{i}"))).collect()
}

/// Deterministic settings with a fixed RNG seed.
pub fn seeded_settings() -> GameSettings {
    GameSettings {
        rng_seed: Some(0xD1FF),
        ..GameSettings::default()
    }
}

/// Service over an in-memory catalog of `setups` and `punchlines` cards.
pub fn service_with(setups: usize, punchlines: usize, settings: GameSettings) -> GameService {
    let source = StaticCardSource::unrated(cards("setup ", setups), cards("punch ", punchlines));
    GameService::new(Arc::new(source), settings)
}

/// App state with a roomy catalog: 40 setups, 400 punchlines.
pub fn test_state() -> AppState {
    AppState::new(service_with(40, 400, seeded_settings()))
}

/// Write `setups.csv` and `punchlines.csv` into `dir`.
pub fn write_catalog(dir: &Path, setups: &str, punchlines: &str) {
    std::fs::write(dir.join("setups.csv"), setups).expect("write setups.csv");
    std::fs::write(dir.join("punchlines.csv"), punchlines).expect("write punchlines.csv");
}
