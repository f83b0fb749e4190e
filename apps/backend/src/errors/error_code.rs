//! Error codes for the diffbetween API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the diffbetween API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General bad request error
    BadRequest,
    /// General validation error
    ValidationError,
    /// Invalid game ID provided
    InvalidGameId,
    /// Player name empty or blank
    InvalidPlayerName,
    /// Round count outside the configured range
    InvalidRoundCount,
    /// Unknown content rating
    InvalidRating,
    /// Card not in hand
    CardNotInHand,
    /// Voted card was not played this round
    UnknownSubmission,
    /// Catalog too small for the requested round count
    TooFewSetupCards,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Game Conflicts
    /// Player name taken within the game
    DuplicatePlayerName,
    /// Player already played or voted this round
    DuplicateSubmission,
    /// Action not valid in the current phase
    PhaseMismatch,
    /// Game has no rounds left
    GameFinished,
    /// Punchline pool exhausted
    InsufficientPunchlines,

    // Capacity & Upstream
    /// All game ids are taken by live games
    NoIdsAvailable,
    /// Card catalog could not be parsed
    MalformedCardSource,
    /// Card catalog could not be fetched
    CardSourceUnavailable,

    // System Errors
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidGameId => "INVALID_GAME_ID",
            Self::InvalidPlayerName => "INVALID_PLAYER_NAME",
            Self::InvalidRoundCount => "INVALID_ROUND_COUNT",
            Self::InvalidRating => "INVALID_RATING",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::UnknownSubmission => "UNKNOWN_SUBMISSION",
            Self::TooFewSetupCards => "TOO_FEW_SETUP_CARDS",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DuplicatePlayerName => "DUPLICATE_PLAYER_NAME",
            Self::DuplicateSubmission => "DUPLICATE_SUBMISSION",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::GameFinished => "GAME_FINISHED",
            Self::InsufficientPunchlines => "INSUFFICIENT_PUNCHLINES",

            Self::NoIdsAvailable => "NO_IDS_AVAILABLE",
            Self::MalformedCardSource => "MALFORMED_CARD_SOURCE",
            Self::CardSourceUnavailable => "CARD_SOURCE_UNAVAILABLE",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
