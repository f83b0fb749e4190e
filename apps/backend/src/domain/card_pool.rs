//! Shared stock of cards that can be drawn without replacement.

use rand::Rng;

use crate::domain::Card;
use crate::errors::domain::DomainError;

/// An unordered pool of cards.
///
/// Draws pick a uniformly random index and `swap_remove` it, so each card
/// costs O(1) and the remaining order carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove and return `n` cards chosen uniformly at random.
    ///
    /// Fails without touching the pool when fewer than `n` cards remain.
    pub fn draw<R: Rng>(&mut self, n: usize, rng: &mut R) -> Result<Vec<Card>, DomainError> {
        if n > self.cards.len() {
            return Err(DomainError::InsufficientPunchlines {
                needed: n,
                available: self.cards.len(),
            });
        }

        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            let index = rng.random_range(0..self.cards.len());
            drawn.push(self.cards.swap_remove(index));
        }
        Ok(drawn)
    }
}
