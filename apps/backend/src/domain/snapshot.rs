//! Public snapshot API for observing game state without exposing internals.

use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::domain::game::{GameId, GameSession, Phase};
use crate::domain::rounds::Round;
use crate::domain::{Card, ContentRating, Player};

/// Serializable view of a whole session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub id: GameId,
    pub phase: Phase,
    pub rating: ContentRating,
    pub hand_size: usize,
    pub rounds_total: usize,
    pub rounds_remaining: usize,
    pub punchlines_remaining: usize,
    pub created_at: String,
    /// Players in join order, with their hands.
    pub players: Vec<Player>,
    /// Setup pair, plays and votes of the round in progress.
    pub current_round: Option<Round>,
    /// Completed rounds, oldest first.
    pub results: Vec<RoundResult>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundResult {
    pub setup: [Card; 2],
    pub tally: Vec<VoteCount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteCount {
    pub punchline: Card,
    pub votes: usize,
}

impl RoundResult {
    fn from_round(round: &Round) -> Self {
        Self {
            setup: round.setup.clone(),
            tally: round
                .tally()
                .into_iter()
                .map(|(punchline, votes)| VoteCount { punchline, votes })
                .collect(),
        }
    }
}

/// Produce the public snapshot of `game`.
pub fn snapshot(game: &GameSession) -> GameSnapshot {
    let rounds = game.rounds();
    // Rounds are consumed from the back, so completed ones sit above
    // `rounds_remaining`; walk them in reverse to get play order.
    let results = (game.rounds_remaining()..rounds.len())
        .rev()
        .map(|idx| RoundResult::from_round(&rounds[idx]))
        .collect();

    GameSnapshot {
        id: game.id(),
        phase: game.phase(),
        rating: game.rating(),
        hand_size: game.hand_size(),
        rounds_total: rounds.len(),
        rounds_remaining: game.rounds_remaining(),
        punchlines_remaining: game.punchlines().size(),
        created_at: game
            .created_at()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
        players: game.players().to_vec(),
        current_round: game.current_round().cloned(),
        results,
    }
}
