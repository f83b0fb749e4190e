// Unit tests for error mapping - pure domain logic without HTTP servers
use crate::domain::Phase;
use crate::errors::domain::DomainError;
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let app: AppError = DomainError::CardNotInHand.into();
    assert_eq!(app.code(), ErrorCode::CardNotInHand);
    assert_eq!(app.status().as_u16(), 422);

    let app: AppError = DomainError::TooFewSetupCards {
        needed: 6,
        available: 2,
    }
    .into();
    assert_eq!(app.code().as_str(), "TOO_FEW_SETUP_CARDS");
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::DuplicatePlayerName("al".into()).into();
    assert_eq!(app.code().as_str(), "DUPLICATE_PLAYER_NAME");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::InvalidPhaseForAction {
        expected: Phase::Voting,
        actual: Phase::Playing,
    }
    .into();
    assert_eq!(app.code().as_str(), "PHASE_MISMATCH");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError = DomainError::GameFinished.into();
    assert_eq!(app.code().as_str(), "GAME_FINISHED");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::SessionNotFound(42).into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
    assert!(app.to_string().contains("game 42 does not exist"));

    let app: AppError = DomainError::PlayerNotFound("zed".into()).into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_capacity_and_upstream() {
    let app: AppError = DomainError::NoIdsAvailable.into();
    assert_eq!(app.code().as_str(), "NO_IDS_AVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::MalformedCardSource("line 3".into()).into();
    assert_eq!(app.code().as_str(), "MALFORMED_CARD_SOURCE");
    assert_eq!(app.status().as_u16(), 502);

    let app: AppError = DomainError::CardSourceUnavailable("timeout".into()).into();
    assert_eq!(app.code().as_str(), "CARD_SOURCE_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 502);
}
