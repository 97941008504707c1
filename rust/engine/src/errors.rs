use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Cannot check: {to_call} chips are owed to call")]
    CheckNotAllowed { to_call: u32 },
    #[error("Raise must exceed the current bet of {current_bet} (got {amount})")]
    RaiseTooSmall { amount: u32, current_bet: u32 },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already in progress")]
    HandInProgress,
    #[error("Need at least 2 seats with chips to start a hand, found {funded}")]
    NotEnoughPlayers { funded: usize },
    #[error("Invalid table configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Fatal errors mean the table cannot continue as configured; everything
    /// else is a rejected request the caller may retry with a different action.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::NotEnoughPlayers { .. } | GameError::InvalidConfig(_)
        )
    }
}
