use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::STARTING_STACK;

pub const SMALL_BLIND: u32 = 10;
pub const BIG_BLIND: u32 = 20;

/// Stakes and seating for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    /// Seat holding the dealer button for the first hand.
    pub initial_dealer: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: SMALL_BLIND,
            big_blind: BIG_BLIND,
            starting_stack: STARTING_STACK,
            initial_dealer: 1,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 {
            return Err(GameError::InvalidConfig("small_blind must be >0".into()));
        }
        if self.big_blind < self.small_blind {
            return Err(GameError::InvalidConfig(
                "big_blind must be >= small_blind".into(),
            ));
        }
        if self.starting_stack == 0 {
            return Err(GameError::InvalidConfig("starting_stack must be >0".into()));
        }
        Ok(())
    }
}
