//! Game lifecycle service: composes the card source, the session registry
//! and the session state machine.

use std::collections::HashSet;
use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::catalog::CardSource;
use crate::config::GameSettings;
use crate::domain::{
    snapshot, Card, CardKind, ContentRating, GameId, GameSession, GameSnapshot, NewGame,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::state::registry::{SessionHandle, SessionRegistry};

/// Entry point for every game operation.
///
/// Card fetching is the only async step and runs before any lock is taken.
/// Each mutation runs entirely under the session's own lock; the registry
/// lock is released before a session lock is acquired.
#[derive(Clone)]
pub struct GameService {
    registry: Arc<SessionRegistry>,
    cards: Arc<dyn CardSource>,
    settings: GameSettings,
}

impl GameService {
    pub fn new(cards: Arc<dyn CardSource>, settings: GameSettings) -> Self {
        let registry = Arc::new(SessionRegistry::new(
            settings.max_sessions,
            settings.idle_expiry,
        ));
        Self {
            registry,
            cards,
            settings,
        }
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Start a game hosted by `host` with `round_count` rounds of cards
    /// rated at most `rating`.
    pub async fn create_game(
        &self,
        host: &str,
        round_count: usize,
        rating: ContentRating,
    ) -> Result<GameSnapshot, AppError> {
        if round_count == 0 || round_count > self.settings.max_rounds {
            return Err(DomainError::InvalidRoundCount {
                requested: round_count,
            }
            .into());
        }
        if host.trim().is_empty() {
            return Err(DomainError::InvalidPlayerName.into());
        }

        let (setups, punchlines) = tokio::try_join!(
            self.cards.fetch_cards(CardKind::Setup, rating),
            self.cards.fetch_cards(CardKind::Punchline, rating),
        )?;
        let setups = distinct(setups);
        let punchlines = distinct(punchlines);
        debug!(
            setups = setups.len(),
            punchlines = punchlines.len(),
            rating = %rating,
            "Fetched catalogs"
        );

        let now = OffsetDateTime::now_utc();
        let handle = self.registry.create_with(now, |id| {
            GameSession::start(
                NewGame {
                    id,
                    host,
                    round_count,
                    hand_size: self.settings.hand_size,
                    rating,
                    setups: &setups,
                    punchlines,
                    created_at: now,
                },
                self.session_rng(id),
            )
        })?;

        let game = handle.lock();
        info!(
            game_id = game.id(),
            host,
            rounds = round_count,
            rating = %rating,
            "Game created"
        );
        Ok(snapshot(&game))
    }

    pub fn get_game(&self, id: GameId) -> Result<GameSnapshot, AppError> {
        let handle = self.session(id)?;
        let game = handle.lock();
        Ok(snapshot(&game))
    }

    pub fn join(&self, id: GameId, name: &str) -> Result<GameSnapshot, AppError> {
        self.mutate(id, |game| game.join(name))
    }

    pub fn play(&self, id: GameId, name: &str, card: Card) -> Result<GameSnapshot, AppError> {
        self.mutate(id, |game| game.play(name, card))
    }

    pub fn vote(&self, id: GameId, name: &str, card: Card) -> Result<GameSnapshot, AppError> {
        self.mutate(id, |game| game.vote(name, card))
    }

    /// End a game early and free its id.
    pub fn end_game(&self, id: GameId) -> Result<(), AppError> {
        if !self.registry.release(id) {
            return Err(DomainError::SessionNotFound(id).into());
        }
        info!(game_id = id, "Game ended");
        Ok(())
    }

    /// Drop games idle past the expiry window.
    pub fn sweep_expired(&self) -> usize {
        self.registry.sweep_expired(OffsetDateTime::now_utc())
    }

    fn session(&self, id: GameId) -> Result<SessionHandle, AppError> {
        Ok(self.registry.lookup(id, OffsetDateTime::now_utc())?)
    }

    fn mutate<F>(&self, id: GameId, action: F) -> Result<GameSnapshot, AppError>
    where
        F: FnOnce(&mut GameSession) -> Result<(), DomainError>,
    {
        let handle = self.session(id)?;
        let mut game = handle.lock();
        action(&mut game)?;
        Ok(snapshot(&game))
    }

    fn session_rng(&self, id: GameId) -> ChaCha8Rng {
        match self.settings.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed ^ u64::from(id)),
            None => ChaCha8Rng::from_os_rng(),
        }
    }
}

/// Drop repeated card texts, keeping the first of each.
fn distinct(mut cards: Vec<Card>) -> Vec<Card> {
    let mut seen = HashSet::with_capacity(cards.len());
    cards.retain(|card| seen.insert(card.clone()));
    cards
}
