//! The game session aggregate and its play/vote phase machine.

use std::fmt;

use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::dealing;
use crate::domain::rounds::{build_rounds, Round};
use crate::domain::{Card, CardPool, ContentRating, Player};
use crate::errors::domain::DomainError;

/// Session identifier, drawn from the registry's bounded id space.
pub type GameId = u32;

/// Which action the current round is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Every player submits one punchline.
    Playing,
    /// Every player votes for one of the submitted punchlines.
    Voting,
    /// All rounds complete.
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Playing => "playing",
            Phase::Voting => "voting",
            Phase::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// Everything needed to start a session.
#[derive(Debug, Clone)]
pub struct NewGame<'a> {
    pub id: GameId,
    pub host: &'a str,
    pub round_count: usize,
    pub hand_size: usize,
    pub rating: ContentRating,
    pub setups: &'a [Card],
    pub punchlines: Vec<Card>,
    pub created_at: OffsetDateTime,
}

/// One playthrough: players, the punchline stock, and the round sequence.
///
/// Rounds are consumed from the back: the current round is
/// `rounds[rounds_remaining - 1]` and `rounds_remaining == 0` is terminal.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: GameId,
    players: Vec<Player>,
    punchlines: CardPool,
    rounds: Vec<Round>,
    rounds_remaining: usize,
    phase: Phase,
    hand_size: usize,
    rating: ContentRating,
    created_at: OffsetDateTime,
    rng: ChaCha8Rng,
}

impl GameSession {
    /// Build the rounds, seat the host and deal their opening hand.
    pub fn start(new: NewGame<'_>, mut rng: ChaCha8Rng) -> Result<Self, DomainError> {
        if new.round_count == 0 {
            return Err(DomainError::InvalidRoundCount { requested: 0 });
        }
        let rounds = build_rounds(new.round_count, new.setups, &mut rng)?;

        let mut session = Self {
            id: new.id,
            players: Vec::new(),
            punchlines: CardPool::new(new.punchlines),
            rounds,
            rounds_remaining: new.round_count,
            phase: Phase::Playing,
            hand_size: new.hand_size,
            rating: new.rating,
            created_at: new.created_at,
            rng,
        };
        session.join(new.host)?;
        Ok(session)
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn rounds_remaining(&self) -> usize {
        self.rounds_remaining
    }

    /// The round being played or voted on; `None` once finished.
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds_remaining
            .checked_sub(1)
            .and_then(|idx| self.rounds.get(idx))
    }

    pub fn punchlines(&self) -> &CardPool {
        &self.punchlines
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn rating(&self) -> ContentRating {
        self.rating
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Seat a new player and deal them a full hand.
    pub fn join(&mut self, name: &str) -> Result<(), DomainError> {
        if self.is_finished() {
            return Err(DomainError::GameFinished);
        }
        if name.trim().is_empty() {
            return Err(DomainError::InvalidPlayerName);
        }
        if self.player(name).is_some() {
            return Err(DomainError::DuplicatePlayerName(name.to_string()));
        }
        self.ensure_dealable(self.hand_size)?;

        self.players.push(Player::new(name));
        self.refill()?;
        debug!(game_id = self.id, player = name, players = self.players.len(), "Player joined");
        Ok(())
    }

    /// Submit `card` from `name`'s hand for the current round.
    ///
    /// The last outstanding play moves the game to voting. Hands are topped
    /// back up afterwards.
    pub fn play(&mut self, name: &str, card: Card) -> Result<(), DomainError> {
        self.require_phase(Phase::Playing)?;
        let seat = self.seat_of(name)?;
        let idx = self.current_index()?;
        if self.rounds[idx].plays.contains_key(name) {
            return Err(DomainError::DuplicateSubmission(name.to_string()));
        }
        if !self.players[seat].holds(&card) {
            return Err(DomainError::CardNotInHand);
        }
        self.ensure_dealable(1)?;

        self.players[seat].discard(&card);
        let round = &mut self.rounds[idx];
        round.plays.insert(name.to_string(), card);
        if round.plays.len() == self.players.len() {
            self.phase = Phase::Voting;
        }
        self.refill()?;
        debug!(game_id = self.id, player = name, phase = %self.phase, "Punchline played");
        Ok(())
    }

    /// Record `name`'s vote for one of the current round's punchlines.
    ///
    /// The last outstanding vote closes the round: the next round starts
    /// in the playing phase, or the game finishes if none remain.
    pub fn vote(&mut self, name: &str, card: Card) -> Result<(), DomainError> {
        self.require_phase(Phase::Voting)?;
        self.seat_of(name)?;
        let idx = self.current_index()?;
        let round = &self.rounds[idx];
        if round.votes.contains_key(name) {
            return Err(DomainError::DuplicateSubmission(name.to_string()));
        }
        if !round.plays.values().any(|played| *played == card) {
            return Err(DomainError::UnknownSubmission);
        }
        let closes_round = round.votes.len() + 1 == self.players.len();
        if closes_round {
            self.ensure_dealable(0)?;
        }

        self.rounds[idx].votes.insert(name.to_string(), card);
        if closes_round {
            self.rounds_remaining -= 1;
            self.refill()?;
            self.phase = if self.rounds_remaining == 0 {
                Phase::Finished
            } else {
                Phase::Playing
            };
        }
        debug!(
            game_id = self.id,
            player = name,
            phase = %self.phase,
            rounds_remaining = self.rounds_remaining,
            "Vote recorded"
        );
        Ok(())
    }

    fn require_phase(&self, expected: Phase) -> Result<(), DomainError> {
        match self.phase {
            Phase::Finished => Err(DomainError::GameFinished),
            actual if actual != expected => {
                Err(DomainError::InvalidPhaseForAction { expected, actual })
            }
            _ => Ok(()),
        }
    }

    fn seat_of(&self, name: &str) -> Result<usize, DomainError> {
        self.players
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| DomainError::PlayerNotFound(name.to_string()))
    }

    fn current_index(&self) -> Result<usize, DomainError> {
        self.rounds_remaining
            .checked_sub(1)
            .ok_or(DomainError::GameFinished)
    }

    /// Reject an action up front if the refill that follows it would run dry.
    ///
    /// `extra` is the number of cards the action itself will take out of
    /// hands before the refill.
    fn ensure_dealable(&self, extra: usize) -> Result<(), DomainError> {
        let needed = dealing::cards_needed(&self.players, self.hand_size) + extra;
        if needed > self.punchlines.size() {
            return Err(DomainError::InsufficientPunchlines {
                needed,
                available: self.punchlines.size(),
            });
        }
        Ok(())
    }

    fn refill(&mut self) -> Result<(), DomainError> {
        dealing::refill(
            &mut self.players,
            &mut self.punchlines,
            self.hand_size,
            &mut self.rng,
        )?;
        Ok(())
    }
}
