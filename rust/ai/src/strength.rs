//! Hand-strength policy.
//!
//! Rates the seat's holding on a 0-10 scale, from a starting-hand table
//! before the flop and from the evaluator once community cards are out, then
//! maps strength, price and stack to an action. Fully deterministic.

use holdem_engine::cards::{Card, Rank};
use holdem_engine::hand::{Category, try_best_hand};
use holdem_engine::player::PlayerAction;

use crate::{DecisionContext, DecisionPolicy};

/// Smallest opening bet the policy makes.
const MIN_BET: u32 = 20;

#[derive(Debug, Clone, Default)]
pub struct StrengthPolicy;

impl StrengthPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Starting-hand strength on a 0-10 scale:
    /// - 9-10: premium pairs and AKs
    /// - 7-8: strong pairs and broadway aces
    /// - 5-6: middle pairs, suited broadway, high suited connectors
    /// - 3-4: small pairs, weak aces, suited connectors
    /// - 0-2: everything else
    pub fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank.value();
        let r2 = hole[1].rank.value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        let bonus = |on: u8, off: u8| if suited { on } else { off };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => bonus(10, 8),
            (14, 12) => bonus(8, 7),
            (14, 11) => bonus(7, 6),
            (14, 10) => bonus(6, 5),
            (14, _) => bonus(5, 4),
            (13, 12) => bonus(7, 6),
            (13, 11) => bonus(6, 5),
            (13, 10) => bonus(5, 4),
            (12, 11) => bonus(6, 5),
            (12, 10) => bonus(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Strength once the board is out, or `None` before the flop.
    pub fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let result = try_best_hand(&cards)?;

        let base = match result.category {
            Category::HighCard => 1,
            Category::OnePair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush => 10,
        };
        // high-ranked holdings edge up within their category
        let top = result.primary.first().or(result.kickers.first());
        let boost = u8::from(top.is_some_and(|r| *r >= Rank::Queen));
        Some((base + boost).min(10))
    }

    /// Share of the final pot the seat would own after calling.
    pub fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    fn strength(ctx: &DecisionContext) -> Option<u8> {
        let hole: [Card; 2] = ctx.hole.as_slice().try_into().ok()?;
        Some(
            Self::postflop_strength(hole, &ctx.community)
                .unwrap_or_else(|| Self::preflop_strength(hole)),
        )
    }

    fn unopened(strength: u8, ctx: &DecisionContext) -> PlayerAction {
        let size = match strength {
            9..=10 => ctx.pot * 2 / 3,
            7..=8 => ctx.pot / 2,
            _ => return PlayerAction::Check,
        };
        if ctx.chips == 0 {
            return PlayerAction::Check;
        }
        let target = ctx.current_bet + size.max(MIN_BET).min(ctx.chips);
        PlayerAction::RaiseTo(target.max(ctx.min_raise_to()))
    }

    fn facing_bet(strength: u8, ctx: &DecisionContext) -> PlayerAction {
        let to_call = ctx.to_call();
        if to_call >= ctx.chips {
            // the call is an all-in
            return if strength >= 7 {
                PlayerAction::Call
            } else {
                PlayerAction::Fold
            };
        }
        let odds = Self::pot_odds(ctx.pot, to_call);
        match strength {
            9..=10 => {
                let raise = (ctx.pot / 2).max(to_call).max(MIN_BET);
                if ctx.chips >= to_call + raise {
                    PlayerAction::RaiseTo(ctx.current_bet + raise)
                } else {
                    PlayerAction::Call
                }
            }
            7..=8 => PlayerAction::Call,
            5..=6 if odds >= 0.3 || to_call <= ctx.pot / 4 => PlayerAction::Call,
            3..=4 if odds >= 0.4 || to_call <= ctx.pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }
}

impl DecisionPolicy for StrengthPolicy {
    fn decide(&mut self, ctx: &DecisionContext) -> PlayerAction {
        let Some(strength) = Self::strength(ctx) else {
            return ctx.passive();
        };
        if ctx.can_check() {
            Self::unopened(strength, ctx)
        } else {
            Self::facing_bet(strength, ctx)
        }
    }

    fn name(&self) -> &str {
        "strength"
    }
}
