//! Many threads driving one session: every call is serialized by the
//! session lock, so the card count never drifts.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use diffbetween::domain::{ContentRating, Phase};
use diffbetween::GameService;

use crate::support::game_setup::{seeded_settings, service_with};

const PLAYERS: usize = 8;

fn total_cards(svc: &GameService, id: u32) -> usize {
    let snap = svc.get_game(id).unwrap();
    let in_hands: usize = snap.players.iter().map(|p| p.hand.len()).sum();
    let in_play = snap.current_round.as_ref().map_or(0, |r| r.plays.len());
    in_hands + in_play + snap.punchlines_remaining
}

#[tokio::test]
async fn concurrent_joins_and_plays_keep_state_consistent() {
    let svc = Arc::new(service_with(10, 500, seeded_settings()));
    let id = svc.create_game("host", 1, ContentRating::G).await.unwrap().id;
    let before = total_cards(&svc, id);

    let joiners: Vec<_> = (0..PLAYERS)
        .map(|i| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || svc.join(id, &format!("p{i}")).map(|_| ()))
        })
        .collect();
    for handle in joiners {
        handle.join().unwrap().unwrap();
    }
    assert_eq!(svc.get_game(id).unwrap().players.len(), PLAYERS + 1);

    // Everyone but the host plays at once.
    let players: Vec<_> = (0..PLAYERS)
        .map(|i| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || {
                let name = format!("p{i}");
                let snap = svc.get_game(id).unwrap();
                let card = snap
                    .players
                    .iter()
                    .find(|p| p.name == name)
                    .and_then(|p| p.hand.first().cloned())
                    .unwrap();
                svc.play(id, &name, card).map(|_| ())
            })
        })
        .collect();
    for handle in players {
        handle.join().unwrap().unwrap();
    }

    let snap = svc.get_game(id).unwrap();
    assert_eq!(snap.phase, Phase::Playing);
    let round = snap.current_round.as_ref().unwrap();
    assert_eq!(round.plays.len(), PLAYERS);
    let distinct: HashSet<_> = round.plays.values().collect();
    assert_eq!(distinct.len(), PLAYERS);
    assert_eq!(total_cards(&svc, id), before);
}

#[tokio::test]
async fn racing_duplicate_joins_admit_exactly_one() {
    let svc = Arc::new(service_with(10, 500, seeded_settings()));
    let id = svc.create_game("host", 1, ContentRating::G).await.unwrap().id;

    let racers: Vec<_> = (0..6)
        .map(|_| {
            let svc = Arc::clone(&svc);
            thread::spawn(move || svc.join(id, "twin").is_ok())
        })
        .collect();
    let admitted = racers
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(admitted, 1);
    assert_eq!(svc.get_game(id).unwrap().players.len(), 2);
}
