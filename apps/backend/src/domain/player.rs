use serde::Serialize;

use crate::domain::Card;

/// A seated player and the punchlines currently in their hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    pub fn holds(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    /// Remove `card` from the hand, returning it if it was there.
    pub fn discard(&mut self, card: &Card) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c == card)?;
        Some(self.hand.swap_remove(pos))
    }
}
