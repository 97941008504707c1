//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Heads-up Texas Hold'em against an automated opponent"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands against an automated seat, reading actions from stdin
    Play {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Opponent policy: random, strength or scripted
        #[arg(long)]
        bot: Option<String>,
        /// Pause before each automated action, in milliseconds
        #[arg(long = "delay-ms")]
        delay_ms: Option<u64>,
        #[arg(long)]
        stack: Option<u32>,
        #[arg(long, default_value = "Player")]
        name: String,
    },
    /// Run two automated seats against each other
    Sim {
        #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
        hands: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Policy for seat 0; defaults to the configured bot
        #[arg(long = "bot-a")]
        bot_a: Option<String>,
        /// Policy for seat 1; defaults to the configured bot
        #[arg(long = "bot-b")]
        bot_b: Option<String>,
        #[arg(long)]
        stack: Option<u32>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
