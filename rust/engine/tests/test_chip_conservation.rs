use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::config::TableConfig;
use holdem_engine::engine::{ActionOutcome, Engine};
use holdem_engine::errors::GameError;
use holdem_engine::player::{Player, PlayerAction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn table_total(e: &Engine) -> u32 {
    e.players().iter().map(|p| p.chips()).sum::<u32>() + e.pot()
}

fn random_action(rng: &mut ChaCha20Rng, current_bet: u32) -> PlayerAction {
    match rng.random_range(0..10) {
        0 => PlayerAction::Fold,
        1..=3 => PlayerAction::Check,
        4..=7 => PlayerAction::Call,
        _ => PlayerAction::RaiseTo(current_bet + rng.random_range(1..=120)),
    }
}

fn dealt_cards(e: &Engine) -> Vec<Card> {
    let mut cards: Vec<Card> = e
        .players()
        .iter()
        .flat_map(|p| p.hole_cards().iter().copied())
        .collect();
    cards.extend_from_slice(e.community_cards());
    cards
}

fn assert_unique(cards: &[Card]) {
    let set: HashSet<&Card> = cards.iter().collect();
    assert_eq!(set.len(), cards.len(), "duplicate card in {:?}", cards);
}

#[test]
fn chips_and_pot_are_conserved_through_random_play() {
    for seed in 0..4u64 {
        let players = vec![
            Player::human("A", 300),
            Player::automated("B", 300),
            Player::automated("C", 300),
        ];
        let mut e = Engine::new(players, TableConfig::default(), Some(seed)).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed + 100);
        let total = table_total(&e);

        for _ in 0..60 {
            match e.start_hand() {
                Ok(()) => {}
                Err(err @ GameError::NotEnoughPlayers { .. }) => {
                    assert!(err.is_fatal());
                    break;
                }
                Err(other) => panic!("unexpected start error {:?}", other),
            }
            assert_eq!(table_total(&e), total);

            let mut steps = 0;
            while e.is_hand_in_progress() {
                steps += 1;
                assert!(steps < 1_000, "hand did not terminate");
                let action = random_action(&mut rng, e.current_bet());
                match e.submit_action(action) {
                    Ok(ActionOutcome::HandComplete(summary)) => {
                        assert_eq!(
                            summary.total_awarded() + summary.refund.map_or(0, |r| r.amount),
                            summary.pot
                        );
                        assert_eq!(e.pot(), 0);
                        assert_unique(&dealt_cards(&e));
                    }
                    Ok(_) => assert_unique(&dealt_cards(&e)),
                    Err(err) => assert!(!err.is_fatal()),
                }
                assert_eq!(table_total(&e), total);
            }
        }
    }
}

#[test]
fn same_seed_replays_the_same_hands() {
    let run = |seed: u64| -> Vec<u32> {
        let mut e = Engine::heads_up(TableConfig::default(), Some(seed)).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        for _ in 0..10 {
            if e.start_hand().is_err() {
                break;
            }
            while e.is_hand_in_progress() {
                let action = random_action(&mut rng, e.current_bet());
                let _ = e.submit_action(action);
            }
        }
        e.players().iter().map(|p| p.chips()).collect()
    };
    assert_eq!(run(77), run(77));
}
