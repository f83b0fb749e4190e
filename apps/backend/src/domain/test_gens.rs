// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::ContentRating;

pub fn rating() -> impl Strategy<Value = ContentRating> {
    prop_oneof![
        Just(ContentRating::G),
        Just(ContentRating::Pg),
        Just(ContentRating::Pg13),
        Just(ContentRating::R),
        Just(ContentRating::X),
    ]
}

/// 1..=max distinct, non-blank player names.
pub fn player_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,8}", 1..=max).prop_map(|set| set.into_iter().collect())
}

/// One step of a randomly driven session.
#[derive(Debug, Clone)]
pub enum Action {
    /// Seat index (mod players) and card choice (mod hand size).
    Play(usize, usize),
    /// Seat index and which submitted punchline to vote for.
    Vote(usize, usize),
    /// Seat a fresh player.
    Join,
}

pub fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (any::<usize>(), any::<usize>()).prop_map(|(s, c)| Action::Play(s, c)),
        4 => (any::<usize>(), any::<usize>()).prop_map(|(s, c)| Action::Vote(s, c)),
        1 => Just(Action::Join),
    ]
}

pub fn actions(max: usize) -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(action(), 0..=max)
}
