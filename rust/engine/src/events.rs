use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::RoundPhase;
use crate::hand::{Category, HandResult};

// Events kept for `take_events` when nobody polls; the oldest are dropped first.
const EVENT_LOG_CAPACITY: usize = 1024;

/// Change notifications for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// Something visible changed; re-read the engine state.
    StateChanged,
    TurnChanged { seat: usize, name: String },
    PhaseChanged { phase: RoundPhase },
    RoundEnded(HandSummary),
}

/// How a hand was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// Everyone else folded.
    FoldOut,
    /// One best hand at showdown.
    Showdown { category: Category },
    /// Several seats tied for the best hand.
    Split { category: Category },
}

impl Resolution {
    pub fn category_name(&self) -> Option<&'static str> {
        match self {
            Resolution::FoldOut => None,
            Resolution::Showdown { category } | Resolution::Split { category } => {
                Some(category.name())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub seat: usize,
    pub name: String,
    pub amount: u32,
}

/// A hand revealed at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShownHand {
    pub seat: usize,
    pub hole: Vec<Card>,
    pub best_five: Vec<Card>,
    pub result: HandResult,
}

/// Outcome carried by [`EngineEvent::RoundEnded`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub hand_number: u64,
    pub resolution: Resolution,
    /// Pot before any refund.
    pub pot: u32,
    /// Winners in seat order; amounts add up to `pot` minus `refund`.
    pub awards: Vec<Award>,
    /// Part of a bet nobody could match, returned to the bettor.
    #[serde(default)]
    pub refund: Option<Award>,
    #[serde(default)]
    pub shown: Vec<ShownHand>,
}

impl HandSummary {
    pub fn winners(&self) -> Vec<usize> {
        self.awards.iter().map(|a| a.seat).collect()
    }

    pub fn total_awarded(&self) -> u32 {
        self.awards.iter().map(|a| a.amount).sum()
    }
}

/// Buffers events while the engine mutates and publishes them afterwards.
#[derive(Debug, Default)]
pub struct EventBus {
    subscribers: Vec<Sender<EngineEvent>>,
    pending: Vec<EngineEvent>,
    log: VecDeque<EngineEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Receiver<EngineEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        tracing::debug!(
            subscriber_count = self.subscribers.len(),
            "subscribed to engine events"
        );
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn emit(&mut self, event: EngineEvent) {
        self.pending.push(event);
    }

    /// Delivers everything emitted since the last flush.
    pub(crate) fn flush(&mut self) {
        for event in std::mem::take(&mut self.pending) {
            let before = self.subscribers.len();
            self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
            if self.subscribers.len() < before {
                tracing::debug!(
                    dropped = before - self.subscribers.len(),
                    "dropped disconnected event subscribers"
                );
            }
            if self.log.len() == EVENT_LOG_CAPACITY {
                self.log.pop_front();
            }
            self.log.push_back(event);
        }
    }

    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        self.log.drain(..).collect()
    }
}
