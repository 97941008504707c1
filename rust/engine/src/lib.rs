//! # holdem-engine: Texas Hold'em Betting Engine
//!
//! A two-party (and small multi-seat) Texas Hold'em engine: a seeded deck,
//! a combinatorial 7-card hand evaluator, per-seat betting state and the
//! phase state machine that runs blinds, betting rounds, showdown and pot
//! splitting. Presentation, login and opponent strategy live outside this crate.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Best-of-21 hand evaluation and strength comparison
//! - [`player`] - Seat state, actions, and chip movement
//! - [`pot`] - Pot accounting, uncalled-bet refunds and exact splitting
//! - [`rules`] - Action validation
//! - [`engine`] - The betting-round state machine
//! - [`events`] - Change notifications for the presentation layer
//! - [`config`] - Blinds, stacks and seating
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::StraightFlush);
//! ```
//!
//! ## Driving a Hand
//!
//! ```rust
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::engine::{ActionOutcome, Engine};
//! use holdem_engine::events::Resolution;
//! use holdem_engine::player::PlayerAction;
//!
//! let mut engine = Engine::heads_up(TableConfig::default(), Some(42)).unwrap();
//! engine.start_hand().unwrap();
//!
//! match engine.submit_action(PlayerAction::Fold).unwrap() {
//!     ActionOutcome::HandComplete(summary) => {
//!         assert_eq!(summary.resolution, Resolution::FoldOut);
//!         assert_eq!(summary.total_awarded(), 30);
//!     }
//!     other => panic!("unexpected outcome {:?}", other),
//! }
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod hand;
pub mod player;
pub mod pot;
pub mod rules;
