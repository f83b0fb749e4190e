//! Hand refilling from the shared punchline pool.

use rand::Rng;

use crate::domain::{CardPool, Player};
use crate::errors::domain::DomainError;

/// Cards each hand is topped up to unless a game overrides it.
pub const DEFAULT_HAND_SIZE: usize = 6;

/// Number of cards needed to bring every hand up to `hand_size`.
pub fn cards_needed(players: &[Player], hand_size: usize) -> usize {
    players
        .iter()
        .map(|p| hand_size.saturating_sub(p.hand.len()))
        .sum()
}

/// Top up every player's hand to `hand_size`, in join order.
///
/// A player the pool cannot fully serve aborts the refill with
/// `InsufficientPunchlines`; players served earlier in the same call keep
/// their new cards. Returns the number of cards dealt.
pub fn refill<R: Rng>(
    players: &mut [Player],
    pool: &mut CardPool,
    hand_size: usize,
    rng: &mut R,
) -> Result<usize, DomainError> {
    let mut dealt = 0;
    for player in players.iter_mut() {
        let needed = hand_size.saturating_sub(player.hand.len());
        if needed > pool.size() {
            return Err(DomainError::InsufficientPunchlines {
                needed,
                available: pool.size(),
            });
        }
        let cards = pool.draw(needed, rng)?;
        player.hand.extend(cards);
        dealt += needed;
    }
    Ok(dealt)
}
