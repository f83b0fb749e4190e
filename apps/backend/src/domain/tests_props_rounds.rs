//! Property tests for round construction.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::test_state_helpers::cards;
use crate::domain::{build_rounds, test_prelude};
use crate::errors::domain::DomainError;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: building succeeds exactly when there are 2r setups
    #[test]
    fn prop_build_fails_iff_too_few_setups(
        round_count in 1usize..=10,
        available in 0usize..=25,
        seed in any::<u64>(),
    ) {
        let setups = cards("s", available);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let result = build_rounds(round_count, &setups, &mut rng);

        if available < round_count * 2 {
            prop_assert_eq!(
                result.unwrap_err(),
                DomainError::TooFewSetupCards { needed: round_count * 2, available }
            );
        } else {
            prop_assert_eq!(result.unwrap().len(), round_count);
        }
    }

    /// Property: no setup card appears twice across the rounds of a game
    #[test]
    fn prop_setups_are_never_reused(
        round_count in 1usize..=10,
        extra in 0usize..=10,
        seed in any::<u64>(),
    ) {
        let setups = cards("s", round_count * 2 + extra);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let rounds = build_rounds(round_count, &setups, &mut rng).unwrap();

        let used: Vec<_> = rounds.iter().flat_map(|r| r.setup.iter()).collect();
        let unique: HashSet<_> = used.iter().collect();
        prop_assert_eq!(used.len(), round_count * 2);
        prop_assert_eq!(unique.len(), used.len());
        for card in used {
            prop_assert!(setups.contains(card));
        }
        for round in &rounds {
            prop_assert!(round.plays.is_empty() && round.votes.is_empty());
        }
    }
}
