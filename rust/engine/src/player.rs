use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// An action request for the seat whose turn it is.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (no bet, only valid when nothing is owed)
    Check,
    /// Match the table's current bet
    Call,
    /// Raise so this street's total bet becomes the given amount
    RaiseTo(u32),
}

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// Betting state of one seat.
/// `chips + current_bet` is conserved by [`Player::bet`]; chips only leave the
/// seat through the engine's pot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    automated: bool,
    chips: u32,
    hole: Vec<Card>,
    current_bet: u32,
    folded: bool,
    all_in: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32, automated: bool) -> Self {
        Self {
            name: name.into(),
            automated,
            chips,
            hole: Vec::with_capacity(2),
            current_bet: 0,
            folded: false,
            all_in: false,
        }
    }

    pub fn human(name: impl Into<String>, chips: u32) -> Self {
        Self::new(name, chips, false)
    }

    pub fn automated(name: impl Into<String>, chips: u32) -> Self {
        Self::new(name, chips, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn is_automated(&self) -> bool {
        self.automated
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }

    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }

    /// Can still put chips in: not folded and holding chips.
    pub fn is_eligible(&self) -> bool {
        !self.folded && self.chips > 0
    }

    /// # Panics
    ///
    /// Panics when the seat already holds two cards.
    pub fn receive_card(&mut self, c: Card) {
        assert!(self.hole.len() < 2, "{} already holds two cards", self.name);
        self.hole.push(c);
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Moves up to `amount` chips into this street's bet and returns how many moved.
    /// Asking for more than the stack commits the whole stack and marks the seat all-in.
    pub fn bet(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.chips);
        if moved == 0 {
            return 0;
        }
        self.chips -= moved;
        self.current_bet += moved;
        if self.chips == 0 {
            self.all_in = true;
        }
        moved
    }

    pub fn reset_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Clears cards and flags for a new hand. A seat without chips sits the hand out folded.
    pub fn reset_for_new_hand(&mut self) {
        self.hole.clear();
        self.current_bet = 0;
        self.all_in = false;
        self.folded = self.chips == 0;
    }
}
