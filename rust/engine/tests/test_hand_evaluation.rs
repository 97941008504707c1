use std::cmp::Ordering;

use holdem_engine::cards::{Card, Rank};
use holdem_engine::deck::Deck;
use holdem_engine::hand::{best_hand, compare_hands, evaluate_hand, try_best_five, Category};

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

fn hand(s: &str) -> Vec<Card> {
    s.split_whitespace().map(c).collect()
}

fn seven(s: &str) -> [Card; 7] {
    let v = hand(s);
    [v[0], v[1], v[2], v[3], v[4], v[5], v[6]]
}

#[test]
fn full_house_aces_over_kings() {
    let r = best_hand(&hand("As Ad Ac Kh Kd 2c 3s"));
    assert_eq!(r.category, Category::FullHouse);
    assert_eq!(r.primary, vec![Rank::Ace, Rank::King]);
    assert!(r.kickers.is_empty());
}

#[test]
fn straight_using_both_hole_cards() {
    // 3-4-5-6-7 with the seven from the hole
    let r = best_hand(&hand("2s 7d 3c 4h 5d 6s 9c"));
    assert_eq!(r.category, Category::Straight);
    assert_eq!(r.primary, vec![Rank::Seven]);
}

#[test]
fn six_high_straight() {
    let r = best_hand(&hand("2s 8d 3c 4h 5d 6s 9c"));
    assert_eq!(r.category, Category::Straight);
    assert_eq!(r.primary, vec![Rank::Six]);
}

#[test]
fn straight_flush_beats_four_of_a_kind() {
    let sf = evaluate_hand(&seven("9h 8h 7h 6h 5h Ac Ad"));
    let quads = evaluate_hand(&seven("Ks Kh Kd Kc 2s 3d 4c"));
    assert_eq!(sf.category, Category::StraightFlush);
    assert_eq!(quads.category, Category::FourOfAKind);
    assert_eq!(compare_hands(&sf, &quads), Ordering::Greater);
}

#[test]
fn full_house_ranked_by_trips_first() {
    let kings_full = best_hand(&hand("Kc Kd Kh 2c 2d 7s 8h"));
    let queens_full = best_hand(&hand("Qc Qd Qh Ac Ad 7s 8h"));
    assert_eq!(kings_full.primary, vec![Rank::King, Rank::Two]);
    assert_eq!(queens_full.primary, vec![Rank::Queen, Rank::Ace]);
    assert!(kings_full > queens_full);
}

#[test]
fn two_pair_decided_by_kicker() {
    let queen = best_hand(&hand("As Ad Ks Kd Qh 3c 2d"));
    let jack = best_hand(&hand("Ac Ah Kc Kh Jd 3s 2h"));
    assert_eq!(queen.category, Category::TwoPair);
    assert_eq!(queen.kickers, vec![Rank::Queen]);
    assert_eq!(jack.kickers, vec![Rank::Jack]);
    assert_eq!(compare_hands(&queen, &jack), Ordering::Greater);
}

#[test]
fn wheel_straight_flush_is_five_high() {
    let r = best_hand(&hand("Ad 2d 3d 4d 5d Kc Ks"));
    assert_eq!(r.category, Category::StraightFlush);
    assert_eq!(r.primary, vec![Rank::Five]);
    let six_high = best_hand(&hand("2c 3c 4c 5c 6c Ah Ad"));
    assert!(six_high > r);
}

#[test]
fn flush_picks_five_highest_of_suit() {
    let r = best_hand(&hand("Ah 9h 7h 5h 3h 2h Kd"));
    assert_eq!(r.category, Category::Flush);
    assert_eq!(
        r.kickers,
        vec![Rank::Ace, Rank::Nine, Rank::Seven, Rank::Five, Rank::Three]
    );
}

#[test]
fn board_plays_for_both_seats() {
    let board = "Ts Js Qs Ks As";
    let a = best_hand(&hand(&format!("2c 3d {}", board)));
    let b = best_hand(&hand(&format!("4h 5h {}", board)));
    assert_eq!(a.category, Category::StraightFlush);
    assert_eq!(compare_hands(&a, &b), Ordering::Equal);
}

#[test]
fn best_five_is_drawn_from_the_input() {
    let cards = hand("As Ad Ac Kh Kd 2c 3s");
    let (five, result) = try_best_five(&cards).unwrap();
    assert_eq!(result.category, Category::FullHouse);
    assert!(five.iter().all(|card| cards.contains(card)));
    assert!(!five.contains(&c("2c")) && !five.contains(&c("3s")));
}

#[test]
fn extra_card_never_lowers_the_result() {
    let six = hand("As Kd 9c 7h 4s 2d");
    let with_seventh = {
        let mut v = six.clone();
        v.push(c("9d"));
        v
    };
    assert!(best_hand(&with_seventh) >= best_hand(&six));
}

#[test]
fn evaluation_ignores_input_order() {
    let mut deck = Deck::new_with_seed(2024);
    for _ in 0..200 {
        deck.shuffle();
        let cards: Vec<Card> = (0..7).map(|_| deck.deal()).collect();
        let expected = best_hand(&cards);

        let mut reversed = cards.clone();
        reversed.reverse();
        assert_eq!(best_hand(&reversed), expected);

        let mut rotated = cards.clone();
        rotated.rotate_left(3);
        assert_eq!(best_hand(&rotated), expected);
    }
}

#[test]
fn categories_order_from_high_card_to_straight_flush() {
    let samples = [
        ("As Kd 9c 7h 4s 3d 2c", Category::HighCard),
        ("As Ad 9c 7h 4s 3d 2c", Category::OnePair),
        ("As Ad 9c 9h 4s 3d Jc", Category::TwoPair),
        ("As Ad Ac 7h 4s 3d Jc", Category::ThreeOfAKind),
        ("9s Td Jc Qh Ks 3d 2c", Category::Straight),
        ("As Ks 9s 7s 4s 3d 2c", Category::Flush),
        ("As Ad Ac 7h 7s 3d 2c", Category::FullHouse),
        ("As Ad Ac Ah 4s 3d 2c", Category::FourOfAKind),
        ("9s Ts Js Qs Ks 3d 2c", Category::StraightFlush),
    ];
    let results: Vec<_> = samples
        .iter()
        .map(|(cards, expected)| {
            let r = best_hand(&hand(cards));
            assert_eq!(r.category, *expected, "{}", cards);
            r
        })
        .collect();
    for pair in results.windows(2) {
        assert!(pair[1] > pair[0]);
    }
    assert_eq!(Category::HighCard.value(), 1);
    assert_eq!(Category::StraightFlush.value(), 9);
}
