//! Domain-level error type used across the session core, services and the
//! card catalog.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::{GameId, Phase};

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The catalog cannot supply two distinct setup cards per round.
    TooFewSetupCards { needed: usize, available: usize },
    /// The punchline pool cannot top every hand back up.
    InsufficientPunchlines { needed: usize, available: usize },
    /// Every session id is held by a live game.
    NoIdsAvailable,
    /// A catalog file could not be parsed.
    MalformedCardSource(String),
    /// A catalog file could not be fetched at all.
    CardSourceUnavailable(String),
    DuplicatePlayerName(String),
    InvalidPlayerName,
    PlayerNotFound(String),
    SessionNotFound(GameId),
    GameFinished,
    InvalidPhaseForAction { expected: Phase, actual: Phase },
    CardNotInHand,
    /// The player already played (or voted) in the current round.
    DuplicateSubmission(String),
    /// The voted card was not played in the current round.
    UnknownSubmission,
    InvalidRoundCount { requested: usize },
    InvalidRating(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::TooFewSetupCards { needed, available } => {
                write!(f, "not enough setup cards: need {needed}, have {available}")
            }
            DomainError::InsufficientPunchlines { needed, available } => {
                write!(
                    f,
                    "not enough punchline cards: need {needed}, have {available}"
                )
            }
            DomainError::NoIdsAvailable => write!(f, "no game ids are available"),
            DomainError::MalformedCardSource(d) => write!(f, "malformed card source: {d}"),
            DomainError::CardSourceUnavailable(d) => write!(f, "card source unavailable: {d}"),
            DomainError::DuplicatePlayerName(name) => {
                write!(f, "player name already exists: {name}")
            }
            DomainError::InvalidPlayerName => write!(f, "player name must not be blank"),
            DomainError::PlayerNotFound(name) => write!(f, "player not in game: {name}"),
            DomainError::SessionNotFound(id) => write!(f, "game {id} does not exist"),
            DomainError::GameFinished => write!(f, "game is finished"),
            DomainError::InvalidPhaseForAction { expected, actual } => {
                write!(f, "phase mismatch: expected {expected}, game is {actual}")
            }
            DomainError::CardNotInHand => write!(f, "card not in hand"),
            DomainError::DuplicateSubmission(name) => {
                write!(f, "{name} already submitted this round")
            }
            DomainError::UnknownSubmission => {
                write!(f, "card was not played this round")
            }
            DomainError::InvalidRoundCount { requested } => {
                write!(f, "round count {requested} is outside the allowed range")
            }
            DomainError::InvalidRating(r) => write!(f, "unknown content rating: {r:?}"),
        }
    }
}

impl Error for DomainError {}
