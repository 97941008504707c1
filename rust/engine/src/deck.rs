use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// The 52-card dealing source owned by the engine.
///
/// Cards are handed out from the head of the current order; the number of
/// remaining cards strictly shrinks until the next [`Deck::shuffle`].
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
    stacked: Option<Vec<Card>>,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
            stacked: None,
        }
    }

    /// Builds a deck that always deals `prefix` first, followed by the remaining
    /// cards in canonical order. Shuffling restores this order instead of
    /// randomizing it, so a whole hand can be scripted.
    ///
    /// # Panics
    ///
    /// Panics if `prefix` contains the same card twice.
    pub fn stacked(prefix: Vec<Card>) -> Self {
        let mut seen = HashSet::with_capacity(prefix.len());
        for c in &prefix {
            assert!(seen.insert(*c), "stacked deck repeats card {}", c);
        }
        let mut order = prefix;
        order.extend(full_deck().into_iter().filter(|c| !seen.contains(c)));
        Self {
            cards: order.clone(),
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
            stacked: Some(order),
        }
    }

    pub fn shuffle(&mut self) {
        match &self.stacked {
            Some(order) => self.cards = order.clone(),
            None => {
                self.cards = full_deck();
                self.cards.shuffle(&mut self.rng);
            }
        }
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Deals the next card.
    ///
    /// # Panics
    ///
    /// Panics when the deck is exhausted. A hand never needs more than
    /// 2 cards per seat plus 5 community cards, so this only fires when the
    /// caller forgot to shuffle between hands.
    pub fn deal(&mut self) -> Card {
        match self.deal_card() {
            Some(c) => c,
            None => panic!("dealt from an empty deck"),
        }
    }

    pub fn reset(&mut self) {
        self.cards = match &self.stacked {
            Some(order) => order.clone(),
            None => full_deck(),
        };
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
