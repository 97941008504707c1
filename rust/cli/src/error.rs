//! Error types for the CLI application.

use holdem_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// stdout/stderr writes and file reads
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Only fatal engine errors reach this far; rejected actions are re-prompted.
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    /// Chips appeared or vanished during a simulation
    #[error("Chip conservation violated: {0}")]
    Conservation(String),

    #[error("Interrupted: {0}")]
    Interrupted(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Interrupted(_) => crate::exit_code::INTERRUPTED,
            _ => crate::exit_code::ERROR,
        }
    }
}
