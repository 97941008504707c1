use holdem_engine::cards::{Card, Rank};
use holdem_engine::config::TableConfig;
use holdem_engine::deck::Deck;
use holdem_engine::engine::{ActionOutcome, Engine};
use holdem_engine::events::{HandSummary, Resolution};
use holdem_engine::hand::Category;
use holdem_engine::player::{Player, PlayerAction as A};

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

fn deck(cards: &str) -> Deck {
    Deck::stacked(cards.split_whitespace().map(c).collect())
}

fn finish(outcome: ActionOutcome) -> HandSummary {
    match outcome {
        ActionOutcome::HandComplete(summary) => summary,
        other => panic!("expected the hand to finish, got {:?}", other),
    }
}

fn check_down(e: &mut Engine) -> HandSummary {
    e.submit_action(A::Call).unwrap();
    e.submit_action(A::Check).unwrap();
    for _ in 0..5 {
        e.submit_action(A::Check).unwrap();
    }
    finish(e.submit_action(A::Check).unwrap())
}

#[test]
fn best_hand_takes_the_pot() {
    // A: As Ad, B: 7c 8d, board Ac Kh Kd 2c 3s
    let mut e = Engine::with_deck(
        vec![Player::human("A", 1000), Player::automated("B", 1000)],
        TableConfig::default(),
        deck("As 7c Ad 8d Ac Kh Kd 2c 3s"),
    )
    .unwrap();
    e.start_hand().unwrap();
    let summary = check_down(&mut e);

    assert_eq!(
        summary.resolution,
        Resolution::Showdown {
            category: Category::FullHouse
        }
    );
    assert_eq!(summary.pot, 40);
    assert_eq!(summary.winners(), vec![0]);
    assert_eq!(e.player(0).unwrap().chips(), 1020);
    assert_eq!(e.player(1).unwrap().chips(), 980);

    let shown = &summary.shown[0];
    assert_eq!(shown.seat, 0);
    assert_eq!(shown.result.primary, vec![Rank::Ace, Rank::King]);
    assert_eq!(shown.best_five.len(), 5);
    assert_eq!(summary.shown[1].result.category, Category::OnePair);
    assert_eq!(e.last_summary(), Some(&summary));
}

#[test]
fn tied_hands_split_with_odd_chip_to_the_first_winner() {
    // deal order A B C A B C, then the board
    // A: Kc Qc, B: Kd Qh, C: 3s 8h, board Kh Qd 7c 4s 2d
    let mut e = Engine::with_deck(
        vec![
            Player::human("A", 1000),
            Player::automated("B", 1000),
            Player::automated("C", 1000),
        ],
        TableConfig {
            initial_dealer: 2,
            ..TableConfig::default()
        },
        deck("Kc Kd 3s Qc Qh 8h Kh Qd 7c 4s 2d"),
    )
    .unwrap();
    e.start_hand().unwrap();

    // preflop: C opens to 21, both blinds call
    e.submit_action(A::RaiseTo(21)).unwrap();
    e.submit_action(A::Call).unwrap();
    e.submit_action(A::Call).unwrap();
    assert_eq!(e.pot(), 63);

    // flop: A bets 19, B calls, C folds
    e.submit_action(A::RaiseTo(19)).unwrap();
    e.submit_action(A::Call).unwrap();
    e.submit_action(A::Fold).unwrap();
    assert_eq!(e.pot(), 101);

    for _ in 0..3 {
        e.submit_action(A::Check).unwrap();
    }
    let summary = finish(e.submit_action(A::Check).unwrap());

    assert_eq!(
        summary.resolution,
        Resolution::Split {
            category: Category::TwoPair
        }
    );
    let shares: Vec<(usize, u32)> = summary.awards.iter().map(|a| (a.seat, a.amount)).collect();
    assert_eq!(shares, vec![(0, 51), (1, 50)]);
    assert_eq!(summary.refund, None);
    assert_eq!(summary.shown.len(), 2);

    let chips: Vec<u32> = e.players().iter().map(|p| p.chips()).collect();
    assert_eq!(chips, vec![1011, 1010, 979]);
    assert_eq!(e.pot(), 0);
}

#[test]
fn folded_seat_is_never_shown() {
    let mut e = Engine::with_deck(
        vec![
            Player::human("A", 1000),
            Player::automated("B", 1000),
            Player::automated("C", 1000),
        ],
        TableConfig {
            initial_dealer: 2,
            ..TableConfig::default()
        },
        deck("Kc Kd 3s Qc Qh 8h Kh Qd 7c 4s 2d"),
    )
    .unwrap();
    e.start_hand().unwrap();
    e.submit_action(A::Fold).unwrap();
    // the small blind's call closes preflop once C has folded
    e.submit_action(A::Call).unwrap();
    for _ in 0..5 {
        e.submit_action(A::Check).unwrap();
    }
    let summary = finish(e.submit_action(A::Check).unwrap());
    assert!(summary.shown.iter().all(|s| s.seat != 2));
    assert_eq!(summary.total_awarded(), 40);
}
