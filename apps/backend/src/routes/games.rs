//! Game HTTP routes. Every successful call answers with the game snapshot.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::{Card, ContentRating};
use crate::error::AppError;
use crate::extractors::{GamePath, ValidatedJson};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    /// Host's player name.
    pub name: String,
    pub rounds: usize,
    /// One of `G`, `PG`, `PG-13`, `R`, `X`.
    pub rating: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub name: String,
}

/// A play or a vote: who, and which punchline.
#[derive(Debug, Deserialize)]
pub struct CardRequest {
    pub name: String,
    pub punchline: Card,
}

/// POST /api/games
async fn create_game(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateGameRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let rating = req.rating.parse::<ContentRating>()?;
    let snapshot = app_state
        .games
        .create_game(&req.name, req.rounds, rating)
        .await?;
    Ok(HttpResponse::Created().json(snapshot))
}

/// GET /api/games/{game_id}
async fn get_game(
    game_id: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state.games.get_game(game_id.id())?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/games/{game_id}/players
async fn join_game(
    game_id: GamePath,
    app_state: web::Data<AppState>,
    body: ValidatedJson<JoinRequest>,
) -> Result<HttpResponse, AppError> {
    let snapshot = app_state.games.join(game_id.id(), &body.name)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/games/{game_id}/plays
async fn play_card(
    game_id: GamePath,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CardRequest>,
) -> Result<HttpResponse, AppError> {
    let CardRequest { name, punchline } = body.into_inner();
    let snapshot = app_state.games.play(game_id.id(), &name, punchline)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /api/games/{game_id}/votes
async fn cast_vote(
    game_id: GamePath,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CardRequest>,
) -> Result<HttpResponse, AppError> {
    let CardRequest { name, punchline } = body.into_inner();
    let snapshot = app_state.games.vote(game_id.id(), &name, punchline)?;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// DELETE /api/games/{game_id}
async fn end_game(
    game_id: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.games.end_game(game_id.id())?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_game))
        .route("/{game_id}", web::get().to(get_game))
        .route("/{game_id}", web::delete().to(end_game))
        .route("/{game_id}/players", web::post().to(join_game))
        .route("/{game_id}/plays", web::post().to(play_card))
        .route("/{game_id}/votes", web::post().to(cast_vote));
}
