//! In-memory card source for tests and local play.

use async_trait::async_trait;

use crate::catalog::{eligible, parse_catalog, CardSource, RatedCard};
use crate::domain::{Card, CardKind, ContentRating};
use crate::errors::domain::DomainError;

/// Holds both decks in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCardSource {
    setups: Vec<RatedCard>,
    punchlines: Vec<RatedCard>,
}

impl StaticCardSource {
    pub fn new(setups: Vec<RatedCard>, punchlines: Vec<RatedCard>) -> Self {
        Self { setups, punchlines }
    }

    /// Every card rated `G`, so any game rating sees all of them.
    pub fn unrated(setups: Vec<Card>, punchlines: Vec<Card>) -> Self {
        let rate = |cards: Vec<Card>| -> Vec<RatedCard> {
            cards
                .into_iter()
                .map(|card| RatedCard {
                    card,
                    rating: ContentRating::G,
                })
                .collect()
        };
        Self::new(rate(setups), rate(punchlines))
    }

    /// Build from two catalog documents.
    pub fn from_csv(setups: &str, punchlines: &str) -> Result<Self, DomainError> {
        Ok(Self::new(
            parse_catalog(setups.as_bytes())?,
            parse_catalog(punchlines.as_bytes())?,
        ))
    }
}

#[async_trait]
impl CardSource for StaticCardSource {
    async fn fetch_cards(
        &self,
        kind: CardKind,
        rating: ContentRating,
    ) -> Result<Vec<Card>, DomainError> {
        let entries = match kind {
            CardKind::Setup => &self.setups,
            CardKind::Punchline => &self.punchlines,
        };
        Ok(eligible(entries, rating))
    }
}
