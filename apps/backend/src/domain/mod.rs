//! Domain layer: pure game logic types and helpers.

pub mod card_pool;
pub mod cards;
pub mod dealing;
pub mod game;
pub mod player;
pub mod rounds;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_rounds;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use card_pool::CardPool;
pub use cards::{Card, CardKind, ContentRating};
pub use dealing::{refill, DEFAULT_HAND_SIZE};
pub use game::{GameId, GameSession, NewGame, Phase};
pub use player::Player;
pub use rounds::{build_rounds, Round};
pub use snapshot::{snapshot, GameSnapshot};
