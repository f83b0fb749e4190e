//! Card catalogs: where setup and punchline decks come from.

pub mod dir;
pub mod http;
pub mod memory;
pub mod parse;

use async_trait::async_trait;

use crate::domain::{Card, CardKind, ContentRating};
use crate::errors::domain::DomainError;

pub use dir::DirCardSource;
pub use http::HttpCardSource;
pub use memory::StaticCardSource;
pub use parse::{parse_catalog, RatedCard};

/// Supplies the cards a new game is built from.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// All cards of `kind` rated at or below `rating`, in catalog order.
    async fn fetch_cards(
        &self,
        kind: CardKind,
        rating: ContentRating,
    ) -> Result<Vec<Card>, DomainError>;
}

/// Keep the cards a game capped at `rating` may use.
pub fn eligible(entries: &[RatedCard], rating: ContentRating) -> Vec<Card> {
    entries
        .iter()
        .filter(|entry| entry.rating.allowed_under(rating))
        .map(|entry| entry.card.clone())
        .collect()
}
