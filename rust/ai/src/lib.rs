//! # holdem-ai: Decision Policies for Automated Seats
//!
//! The engine never decides for a seat. A presentation layer that sees an
//! automated seat's turn builds a [`DecisionContext`], asks a
//! [`DecisionPolicy`] for an action and submits it like any other request.
//!
//! ## Core Components
//!
//! - [`DecisionPolicy`] - Trait for choosing an action from a read-only view of the table
//! - [`random`] - Seeded probabilistic policy
//! - [`strength`] - Hand-strength policy built on the evaluator
//! - [`scripted`] - Replays a fixed list of actions
//! - [`create_policy`] - Factory by name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_policy, DecisionContext};
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::engine::Engine;
//!
//! let mut engine = Engine::heads_up(TableConfig::default(), Some(42)).unwrap();
//! engine.start_hand().unwrap();
//!
//! let mut policy = create_policy("random", 7).expect("known policy");
//! let seat = engine.current_seat().expect("a seat is to act");
//! let ctx = DecisionContext::for_seat(&engine, seat).expect("seat exists");
//! let action = policy.decide(&ctx);
//! engine.submit_action(action).expect("policies only pick legal actions");
//! ```

use holdem_engine::cards::Card;
use holdem_engine::engine::{Engine, RoundPhase};
use holdem_engine::player::PlayerAction;
use holdem_engine::rules;

pub mod random;
pub mod scripted;
pub mod strength;

/// Names accepted by [`create_policy`].
pub const POLICY_NAMES: [&str; 3] = ["random", "strength", "scripted"];

/// What a seat can see when it is asked to act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionContext {
    pub seat: usize,
    pub phase: RoundPhase,
    pub hole: Vec<Card>,
    pub community: Vec<Card>,
    pub pot: u32,
    /// Highest street bet at the table.
    pub current_bet: u32,
    /// What this seat already put in on this street.
    pub player_bet: u32,
    pub chips: u32,
}

impl DecisionContext {
    /// Snapshot of the table from `seat`'s point of view.
    /// Returns `None` for a seat that does not exist.
    pub fn for_seat(engine: &Engine, seat: usize) -> Option<Self> {
        let player = engine.player(seat)?;
        Some(Self {
            seat,
            phase: engine.phase(),
            hole: player.hole_cards().to_vec(),
            community: engine.community_cards().to_vec(),
            pot: engine.pot(),
            current_bet: engine.current_bet(),
            player_bet: player.current_bet(),
            chips: player.chips(),
        })
    }

    pub fn to_call(&self) -> u32 {
        rules::to_call(self.current_bet, self.player_bet)
    }

    pub fn can_check(&self) -> bool {
        self.to_call() == 0
    }

    pub fn min_raise_to(&self) -> u32 {
        rules::min_raise_to(self.current_bet)
    }

    /// Check when nothing is owed, otherwise fold.
    pub fn passive(&self) -> PlayerAction {
        if self.can_check() {
            PlayerAction::Check
        } else {
            PlayerAction::Fold
        }
    }
}

/// Chooses actions for an automated seat.
///
/// Implementations should only return actions the engine accepts for the
/// given context: no check while a call is owed, and raise targets above
/// `ctx.current_bet`. Amounts beyond the stack are fine; the engine clamps
/// them into an all-in.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::{DecisionContext, DecisionPolicy};
/// use holdem_engine::player::PlayerAction;
///
/// struct CallingStation;
///
/// impl DecisionPolicy for CallingStation {
///     fn decide(&mut self, ctx: &DecisionContext) -> PlayerAction {
///         if ctx.can_check() { PlayerAction::Check } else { PlayerAction::Call }
///     }
///
///     fn name(&self) -> &str {
///         "calling-station"
///     }
/// }
/// ```
pub trait DecisionPolicy: Send {
    fn decide(&mut self, ctx: &DecisionContext) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Builds a policy by name; `seed` drives any randomness it uses.
///
/// # Supported Policies
///
/// - `"random"` - [`random::RandomPolicy`] with the default probabilities
/// - `"strength"` - [`strength::StrengthPolicy`]
/// - `"scripted"` - an empty [`scripted::ScriptedPolicy`], which checks or folds
///
/// # Example
///
/// ```rust
/// use holdem_ai::create_policy;
///
/// let policy = create_policy("strength", 1).unwrap();
/// assert_eq!(policy.name(), "strength");
/// assert!(create_policy("telepathic", 1).is_none());
/// ```
pub fn create_policy(name: &str, seed: u64) -> Option<Box<dyn DecisionPolicy>> {
    match name {
        "random" => Some(Box::new(random::RandomPolicy::new(seed))),
        "strength" => Some(Box::new(strength::StrengthPolicy::new())),
        "scripted" => Some(Box::new(scripted::ScriptedPolicy::default())),
        _ => None,
    }
}
