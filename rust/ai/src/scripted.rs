//! Replays a fixed sequence of actions, for tests and demos.

use std::collections::VecDeque;

use holdem_engine::player::PlayerAction;

use crate::{DecisionContext, DecisionPolicy};

/// Plays queued actions in order. Once the queue is empty it checks when
/// nothing is owed and folds otherwise.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPolicy {
    queue: VecDeque<PlayerAction>,
}

impl ScriptedPolicy {
    pub fn new(actions: impl IntoIterator<Item = PlayerAction>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }

    pub fn push(&mut self, action: PlayerAction) {
        self.queue.push_back(action);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn decide(&mut self, ctx: &DecisionContext) -> PlayerAction {
        self.queue.pop_front().unwrap_or_else(|| ctx.passive())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
