//! Simulation command: two automated seats play each other.
//!
//! Plays up to `hands` hands without delays, stops early once a seat is out of
//! chips, and checks after every action that the chips on the table plus the
//! pot still add up to what the seats started with.
//!
//! # Examples
//!
//! ```no_run
//! use holdem_cli::commands::sim::handle_sim_command;
//! use holdem_cli::config::Overrides;
//! use std::io;
//!
//! let overrides = Overrides { seed: Some(42), ..Overrides::default() };
//! handle_sim_command(500, None, None, &overrides, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;

use holdem_ai::{DecisionPolicy, POLICY_NAMES, create_policy};
use holdem_engine::config::TableConfig;
use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::player::Player;

use crate::commands::play::act_for_bot;
use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::ui;

/// Totals for one seat after a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatTally {
    pub name: String,
    pub policy: String,
    pub chips: u32,
    pub hands_won: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimReport {
    pub seed: u64,
    pub hands_played: u32,
    pub seats: Vec<SeatTally>,
}

pub fn handle_sim_command(
    hands: u32,
    bot_a: Option<String>,
    bot_b: Option<String>,
    overrides: &Overrides,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_overrides(overrides)?.config;
    let bot_a = bot_a.unwrap_or_else(|| cfg.bot.clone());
    let bot_b = bot_b.unwrap_or_else(|| cfg.bot.clone());
    for name in [&bot_a, &bot_b] {
        if !POLICY_NAMES.contains(&name.as_str()) {
            let msg = format!(
                "unknown bot '{}' (expected one of: {})",
                name,
                POLICY_NAMES.join(", ")
            );
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    }

    let seed = cfg.seed.unwrap_or_else(rand::random);
    writeln!(
        out,
        "sim: hands={} seed={} bots={} vs {}",
        hands, seed, bot_a, bot_b
    )?;
    let report = run_simulation(hands, seed, &bot_a, &bot_b, cfg.table())?;

    for seat in &report.seats {
        writeln!(
            out,
            "{} ({}): {} chips, {} hands won",
            seat.name, seat.policy, seat.chips, seat.hands_won
        )?;
    }
    writeln!(out, "Hands played: {}", report.hands_played)?;
    if report.hands_played < hands {
        ui::display_warning(
            err,
            &format!(
                "stopped after {} of {} hands: a seat is out of chips",
                report.hands_played, hands
            ),
        )?;
    }
    writeln!(out, "Chip conservation: ok")?;
    Ok(())
}

/// Plays the simulation and returns the per-seat totals.
pub fn run_simulation(
    hands: u32,
    seed: u64,
    bot_a: &str,
    bot_b: &str,
    table: TableConfig,
) -> Result<SimReport, CliError> {
    let stack = table.starting_stack;
    let mut policies: Vec<Box<dyn DecisionPolicy>> = Vec::with_capacity(2);
    for (i, name) in [bot_a, bot_b].into_iter().enumerate() {
        let policy = create_policy(name, seed.wrapping_add(i as u64 + 1))
            .ok_or_else(|| CliError::InvalidInput(format!("unknown bot '{}'", name)))?;
        policies.push(policy);
    }
    let players = vec![
        Player::automated("Bot A", stack),
        Player::automated("Bot B", stack),
    ];
    let mut engine = Engine::new(players, table, Some(seed))?;
    let expected_total: u32 = engine.players().iter().map(|p| p.chips()).sum();
    let mut hands_won = [0u32; 2];
    let mut played = 0;

    for _ in 0..hands {
        match engine.start_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers { funded }) => {
                tracing::info!(played, funded, "simulation stopped: a seat is out of chips");
                break;
            }
            Err(e) => return Err(e.into()),
        }
        while let Some(seat) = engine.current_seat() {
            act_for_bot(&mut engine, seat, policies[seat].as_mut())?;
            check_conservation(&engine, expected_total)?;
        }
        if let Some(summary) = engine.last_summary() {
            for winner in summary.winners() {
                hands_won[winner] += 1;
            }
            tracing::debug!(
                hand = summary.hand_number,
                pot = summary.pot,
                winners = ?summary.winners(),
                "simulated hand complete"
            );
        }
        played += 1;
    }

    let seats = engine
        .players()
        .iter()
        .zip(&policies)
        .zip(hands_won)
        .map(|((p, policy), won)| SeatTally {
            name: p.name().to_string(),
            policy: policy.name().to_string(),
            chips: p.chips(),
            hands_won: won,
        })
        .collect();
    Ok(SimReport {
        seed,
        hands_played: played,
        seats,
    })
}

fn check_conservation(engine: &Engine, expected: u32) -> Result<(), CliError> {
    let on_table: u32 = engine.players().iter().map(|p| p.chips()).sum();
    let total = on_table + engine.pot();
    if total != expected {
        tracing::error!(total, expected, hand = engine.hand_number(), "chip total drifted");
        return Err(CliError::Conservation(format!(
            "hand {}: expected {} chips, found {}",
            engine.hand_number(),
            expected,
            total
        )));
    }
    Ok(())
}
