//! Snapshot API tests.

use crate::domain::snapshot::{snapshot, VoteCount};
use crate::domain::test_state_helpers::{finish_round, game_with, some_card};
use crate::domain::{Phase, DEFAULT_HAND_SIZE};

#[test]
fn fresh_game_snapshot() {
    let game = game_with(&["al", "bob"], 3, 40, 21);
    let snap = snapshot(&game);

    assert_eq!(snap.id, 1);
    assert_eq!(snap.phase, Phase::Playing);
    assert_eq!(snap.rounds_total, 3);
    assert_eq!(snap.rounds_remaining, 3);
    assert_eq!(snap.hand_size, DEFAULT_HAND_SIZE);
    assert_eq!(snap.punchlines_remaining, 40 - 2 * DEFAULT_HAND_SIZE);
    assert_eq!(snap.created_at, "1970-01-01T00:00:00Z");
    assert_eq!(snap.players.len(), 2);
    assert_eq!(snap.players[0].name, "al");
    assert!(snap.results.is_empty());
    assert_eq!(
        snap.current_round.as_ref().map(|r| &r.setup),
        game.current_round().map(|r| &r.setup)
    );
}

#[test]
fn completed_rounds_are_listed_oldest_first() {
    let mut game = game_with(&["al", "bob"], 3, 60, 22);
    let first_setup = game.current_round().unwrap().setup.clone();
    finish_round(&mut game);
    let second_setup = game.current_round().unwrap().setup.clone();
    finish_round(&mut game);

    let snap = snapshot(&game);
    assert_eq!(snap.results.len(), 2);
    assert_eq!(snap.results[0].setup, first_setup);
    assert_eq!(snap.results[1].setup, second_setup);
    assert_eq!(snap.rounds_remaining, 1);
}

#[test]
fn tally_counts_unvoted_plays() {
    let mut game = game_with(&["al", "bob"], 1, 40, 23);
    let al_card = some_card(&game, "al");
    let bob_card = some_card(&game, "bob");
    game.play("al", al_card.clone()).unwrap();
    game.play("bob", bob_card.clone()).unwrap();
    game.vote("al", bob_card.clone()).unwrap();
    game.vote("bob", bob_card.clone()).unwrap();

    let snap = snapshot(&game);
    assert_eq!(snap.phase, Phase::Finished);
    assert!(snap.current_round.is_none());
    assert_eq!(
        snap.results[0].tally,
        vec![
            VoteCount {
                punchline: bob_card,
                votes: 2
            },
            VoteCount {
                punchline: al_card,
                votes: 0
            },
        ]
    );
}

#[test]
fn snapshot_serializes_public_names() {
    let game = game_with(&["al"], 1, 20, 24);
    let json = serde_json::to_value(snapshot(&game)).unwrap();

    assert_eq!(json["phase"], "playing");
    assert_eq!(json["rating"], "R");
    assert_eq!(json["players"][0]["name"], "al");
    assert_eq!(
        json["players"][0]["hand"].as_array().map(Vec::len),
        Some(DEFAULT_HAND_SIZE)
    );
    assert_eq!(json["current_round"]["setup"].as_array().map(Vec::len), Some(2));
}
