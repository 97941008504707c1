//! Seeded probabilistic policy.
//!
//! With nothing owed it checks most of the time and otherwise raises. Facing a
//! bet it weighs the call against its stack: large calls are folded more often,
//! small ones are always called.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use holdem_engine::player::PlayerAction;

use crate::{DecisionContext, DecisionPolicy};

/// Probabilities and raise sizing for [`RandomPolicy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomPolicyConfig {
    /// Chance to check when nothing is owed; the rest are raises.
    pub check_probability: f64,
    /// Call-to-stack ratio above which the policy may fold outright.
    pub expensive_ratio: f64,
    pub expensive_fold_probability: f64,
    /// Call-to-stack ratio below which the policy always calls.
    pub cheap_ratio: f64,
    pub call_probability: f64,
    /// Smallest raise-to target, and the floor for doubling the current bet.
    pub min_raise_to: u32,
    /// Width of the random range added above the minimum target.
    pub raise_spread: u32,
}

impl Default for RandomPolicyConfig {
    fn default() -> Self {
        Self {
            check_probability: 0.7,
            expensive_ratio: 0.5,
            expensive_fold_probability: 0.4,
            cheap_ratio: 0.2,
            call_probability: 0.7,
            min_raise_to: 40,
            raise_spread: 100,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RandomPolicy {
    config: RandomPolicyConfig,
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, RandomPolicyConfig::default())
    }

    pub fn with_config(seed: u64, config: RandomPolicyConfig) -> Self {
        Self {
            config,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &RandomPolicyConfig {
        &self.config
    }

    /// Raise-to target: twice the current bet (at least the configured floor),
    /// plus a random amount bounded by the spread and the stack.
    fn raise_target(&mut self, ctx: &DecisionContext) -> u32 {
        let low = ctx
            .current_bet
            .saturating_mul(2)
            .max(self.config.min_raise_to)
            .max(ctx.min_raise_to());
        let stack_total = ctx.player_bet.saturating_add(ctx.chips);
        let high = low.saturating_add(self.config.raise_spread).min(stack_total);
        if high > low {
            self.rng.random_range(low..high)
        } else {
            low
        }
    }
}

impl DecisionPolicy for RandomPolicy {
    fn decide(&mut self, ctx: &DecisionContext) -> PlayerAction {
        if ctx.can_check() {
            if self.rng.random_bool(self.config.check_probability) {
                return PlayerAction::Check;
            }
            return PlayerAction::RaiseTo(self.raise_target(ctx));
        }

        if ctx.chips == 0 {
            return PlayerAction::Call;
        }
        let ratio = f64::from(ctx.to_call()) / f64::from(ctx.chips);
        if ratio > self.config.expensive_ratio
            && self.rng.random_bool(self.config.expensive_fold_probability)
        {
            PlayerAction::Fold
        } else if ratio < self.config.cheap_ratio
            || self.rng.random_bool(self.config.call_probability)
        {
            PlayerAction::Call
        } else {
            PlayerAction::Fold
        }
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::engine::RoundPhase;

    fn ctx(current_bet: u32, player_bet: u32, chips: u32) -> DecisionContext {
        DecisionContext {
            seat: 1,
            phase: RoundPhase::Flop,
            hole: Vec::new(),
            community: Vec::new(),
            pot: 100,
            current_bet,
            player_bet,
            chips,
        }
    }

    #[test]
    fn never_folds_when_checking_is_free() {
        let mut policy = RandomPolicy::new(3);
        for _ in 0..500 {
            match policy.decide(&ctx(0, 0, 1000)) {
                PlayerAction::Check => {}
                PlayerAction::RaiseTo(target) => assert!((40..140).contains(&target)),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn cheap_calls_are_always_made() {
        let mut policy = RandomPolicy::new(5);
        for _ in 0..500 {
            assert_eq!(policy.decide(&ctx(20, 0, 1000)), PlayerAction::Call);
        }
    }

    #[test]
    fn raise_target_doubles_the_current_bet() {
        let config = RandomPolicyConfig {
            check_probability: 0.0,
            ..RandomPolicyConfig::default()
        };
        let mut policy = RandomPolicy::with_config(9, config);
        for _ in 0..200 {
            match policy.decide(&ctx(0, 0, 1000)) {
                PlayerAction::RaiseTo(target) => assert!(target >= 40),
                other => panic!("unexpected {:?}", other),
            }
        }
        // nothing owed after matching 60, so a raise targets at least 120
        match policy.decide(&ctx(60, 60, 1000)) {
            PlayerAction::RaiseTo(target) => assert!((120..220).contains(&target)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn short_stack_raise_stays_at_the_floor() {
        let config = RandomPolicyConfig {
            check_probability: 0.0,
            ..RandomPolicyConfig::default()
        };
        let mut policy = RandomPolicy::with_config(1, config);
        assert_eq!(policy.decide(&ctx(0, 0, 30)), PlayerAction::RaiseTo(40));
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = RandomPolicy::new(11);
        let mut b = RandomPolicy::new(11);
        for bet in [0, 20, 300, 700, 0, 900] {
            assert_eq!(a.decide(&ctx(bet, 0, 1000)), b.decide(&ctx(bet, 0, 1000)));
        }
    }

    #[test]
    fn expensive_calls_fold_sometimes() {
        let mut policy = RandomPolicy::new(21);
        let folds = (0..1000)
            .filter(|_| policy.decide(&ctx(800, 0, 1000)) == PlayerAction::Fold)
            .count();
        // 0.4 + 0.6 * 0.3 = 0.58 expected
        assert!((450..700).contains(&folds), "folds = {}", folds);
    }
}
