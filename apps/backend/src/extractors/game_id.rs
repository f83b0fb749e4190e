use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::domain::GameId;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game id taken from the `{game_id}` path segment.
///
/// Only the shape is checked here (a positive integer). Whether the game
/// exists is up to the service, which reports `GAME_NOT_FOUND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePath(pub GameId);

impl GamePath {
    pub fn id(self) -> GameId {
        self.0
    }
}

impl FromRequest for GamePath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_game_id(req.match_info().get("game_id")))
    }
}

fn parse_game_id(raw: Option<&str>) -> Result<GamePath, AppError> {
    let raw = raw.ok_or_else(|| {
        AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
    })?;
    match raw.parse::<GameId>() {
        Ok(id) if id > 0 => Ok(GamePath(id)),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidGameId,
            format!("Invalid game id: {raw}"),
        )),
    }
}
