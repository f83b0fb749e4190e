//! Round construction: each round gets two setup cards, never reused.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use serde::Serialize;

use crate::domain::Card;
use crate::errors::domain::DomainError;

/// One play/vote cycle with a fixed pair of setup cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub setup: [Card; 2],
    /// Player name -> played punchline.
    pub plays: BTreeMap<String, Card>,
    /// Player name -> punchline voted for.
    pub votes: BTreeMap<String, Card>,
}

impl Round {
    pub fn new(setup: [Card; 2]) -> Self {
        Self {
            setup,
            plays: BTreeMap::new(),
            votes: BTreeMap::new(),
        }
    }

    /// Votes received per played card, most votes first.
    ///
    /// Cards nobody voted for are listed with zero. Ties keep card order.
    pub fn tally(&self) -> Vec<(Card, usize)> {
        let mut counts: BTreeMap<&Card, usize> =
            self.plays.values().map(|card| (card, 0)).collect();
        for card in self.votes.values() {
            *counts.entry(card).or_insert(0) += 1;
        }

        let mut tally: Vec<(Card, usize)> = counts
            .into_iter()
            .map(|(card, n)| (card.clone(), n))
            .collect();
        tally.sort_by(|a, b| b.1.cmp(&a.1));
        tally
    }
}

/// Build `round_count` rounds from `setups`.
///
/// Picks `round_count * 2` distinct indices uniformly at random (duplicates
/// are rejected and redrawn) and pairs them in draw order. Callers must
/// hand in a catalog without duplicate texts for value-level uniqueness.
pub fn build_rounds<R: Rng>(
    round_count: usize,
    setups: &[Card],
    rng: &mut R,
) -> Result<Vec<Round>, DomainError> {
    let needed = round_count.saturating_mul(2);
    if setups.len() < needed {
        return Err(DomainError::TooFewSetupCards {
            needed,
            available: setups.len(),
        });
    }

    let mut taken = HashSet::with_capacity(needed);
    let mut picks = Vec::with_capacity(needed);
    while picks.len() < needed {
        let index = rng.random_range(0..setups.len());
        if taken.insert(index) {
            picks.push(setups[index].clone());
        }
    }

    Ok(picks
        .chunks_exact(2)
        .map(|pair| Round::new([pair[0].clone(), pair[1].clone()]))
        .collect())
}
