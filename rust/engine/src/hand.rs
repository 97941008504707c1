use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories, weakest first. Discriminants start at 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl Category {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strength of a five-card hand.
///
/// `primary` holds the ranks that define the category (the quad rank, the
/// trips and pair of a full house, both pairs high first, a straight's top
/// card). `kickers` only matter once category and primary ranks tie.
///
/// Ordering compares category, then `primary` element-wise, then `kickers`
/// element-wise. A list that is a strict prefix of the other loses, although
/// list lengths are fixed per category.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    pub primary: Vec<Rank>,
    pub kickers: Vec<Rank>,
}

impl HandResult {
    pub fn name(&self) -> &'static str {
        self.category.name()
    }
}

impl Ord for HandResult {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.primary.as_slice().cmp(other.primary.as_slice()))
            .then_with(|| self.kickers.as_slice().cmp(other.kickers.as_slice()))
    }
}

impl PartialOrd for HandResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.cmp(b)
}

/// Classifies exactly five cards, checking categories from strongest to weakest.
pub fn classify_five(cards: &[Card; 5]) -> HandResult {
    let mut ranks: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));

    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight = straight_high(&ranks);
    let groups = group_ranks(&ranks);

    if let (true, Some(high)) = (flush, straight) {
        return result(Category::StraightFlush, vec![high], vec![]);
    }
    if groups[0].0 == 4 {
        return result(Category::FourOfAKind, vec![groups[0].1], vec![groups[1].1]);
    }
    if groups[0].0 == 3 && groups[1].0 == 2 {
        return result(Category::FullHouse, vec![groups[0].1, groups[1].1], vec![]);
    }
    if flush {
        return result(Category::Flush, vec![], ranks);
    }
    if let Some(high) = straight {
        return result(Category::Straight, vec![high], vec![]);
    }
    if groups[0].0 == 3 {
        return result(Category::ThreeOfAKind, vec![groups[0].1], singles(&groups));
    }
    if groups[0].0 == 2 && groups[1].0 == 2 {
        return result(
            Category::TwoPair,
            vec![groups[0].1, groups[1].1],
            singles(&groups),
        );
    }
    if groups[0].0 == 2 {
        return result(Category::OnePair, vec![groups[0].1], singles(&groups));
    }
    result(Category::HighCard, vec![], ranks)
}

/// Every five-card subset of `cards`, in lexicographic index order.
/// Seven cards yield 21 subsets.
pub fn five_card_subsets(cards: &[Card]) -> Vec<[Card; 5]> {
    let n = cards.len();
    let mut out = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        out.push([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                    }
                }
            }
        }
    }
    out
}

/// Best hand over every five-card subset, together with the five cards that make it.
/// Returns `None` for fewer than five cards.
pub fn try_best_five(cards: &[Card]) -> Option<([Card; 5], HandResult)> {
    let mut best: Option<([Card; 5], HandResult)> = None;
    for five in five_card_subsets(cards) {
        let hr = classify_five(&five);
        let better = match &best {
            Some((_, cur)) => hr > *cur,
            None => true,
        };
        if better {
            best = Some((five, hr));
        }
    }
    best
}

pub fn try_best_hand(cards: &[Card]) -> Option<HandResult> {
    try_best_five(cards).map(|(_, hr)| hr)
}

/// Ranks the best five-card hand available in `cards` (normally 2 hole + 5 board).
///
/// # Panics
///
/// Panics when fewer than five cards are supplied.
pub fn best_hand(cards: &[Card]) -> HandResult {
    assert!(
        cards.len() >= 5,
        "hand evaluation needs at least 5 cards, got {}",
        cards.len()
    );
    match try_best_hand(cards) {
        Some(hr) => hr,
        None => unreachable!("five or more cards always have a subset"),
    }
}

pub fn evaluate_hand(cards: &[Card; 7]) -> HandResult {
    best_hand(cards)
}

fn result(category: Category, primary: Vec<Rank>, kickers: Vec<Rank>) -> HandResult {
    HandResult {
        category,
        primary,
        kickers,
    }
}

// ranks sorted high -> low; the wheel A-2-3-4-5 plays as a five-high straight
fn straight_high(ranks: &[Rank]) -> Option<Rank> {
    let v: Vec<u8> = ranks.iter().map(|r| r.value()).collect();
    if v.len() != 5 {
        return None;
    }
    if v == [14, 5, 4, 3, 2] {
        return Some(Rank::Five);
    }
    if v.windows(2).all(|w| w[0] == w[1] + 1) {
        return Some(ranks[0]);
    }
    None
}

// (count, rank) ordered by count, then rank, both descending
fn group_ranks(ranks: &[Rank]) -> Vec<(u8, Rank)> {
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(5);
    for &r in ranks {
        match groups.iter_mut().find(|(_, g)| *g == r) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, r)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}

fn singles(groups: &[(u8, Rank)]) -> Vec<Rank> {
    groups
        .iter()
        .filter(|(count, _)| *count == 1)
        .map(|(_, r)| *r)
        .collect()
}
