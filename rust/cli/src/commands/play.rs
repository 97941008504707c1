//! # Play Command
//!
//! Interactive heads-up play against an automated seat.
//!
//! Street changes and hand results are printed from the engine's event
//! stream as they arrive; after each batch the engine's current seat decides
//! who acts next. Human actions are read from the injected input stream; the
//! automated seat waits on a [`BotTimer`] before it acts.
//!
//! Input: `fold`/`f`, `check`/`k`, `call`/`c`, `raise <to>`/`r <to>`, `q`/`quit`.

use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;

use holdem_ai::{DecisionContext, DecisionPolicy, create_policy};
use holdem_engine::engine::{Engine, RoundPhase};
use holdem_engine::errors::GameError;
use holdem_engine::events::EngineEvent;
use holdem_engine::player::{Player, PlayerAction};

use crate::config::{self, Config, Overrides};
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_summary};
use crate::io_utils::read_stdin_line;
use crate::pacing::{BotTimer, TimerOutcome};
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

/// Name of the automated seat.
pub const BOT_NAME: &str = "Bot";

// Keeps the bot's decisions independent of the deck shuffle for the same seed.
const BOT_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Handle the play command.
///
/// Resolves the layered configuration with `overrides` on top, then plays up
/// to `hands` hands. Quitting (`q` or end of input) is a normal exit.
pub fn handle_play_command(
    hands: u32,
    name: &str,
    overrides: &Overrides,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".into()));
    }
    let resolved = config::load_with_overrides(overrides)?;
    let mut timer = BotTimer::from_millis(resolved.config.bot_delay_ms);
    play_session(&resolved.config, hands, name, &mut timer, stdin, out, err)
}

/// Runs a session with an explicit timer, so callers can cancel a pending bot turn.
pub fn play_session(
    cfg: &Config,
    hands: u32,
    name: &str,
    timer: &mut BotTimer,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut policy = create_policy(&cfg.bot, seed ^ BOT_SEED_SALT)
        .ok_or_else(|| CliError::InvalidInput(format!("unknown bot '{}'", cfg.bot)))?;
    let players = vec![
        Player::human(name, cfg.starting_stack),
        Player::automated(BOT_NAME, cfg.starting_stack),
    ];
    let mut engine = Engine::new(players, cfg.table(), Some(seed))?;
    let events = engine.subscribe();
    // cancellations left over from an earlier session do not apply here
    timer.reset();

    writeln!(
        out,
        "play: vs={} hands={} seed={}",
        policy.name(),
        hands,
        seed
    )?;
    tracing::info!(
        seed,
        hands,
        bot = policy.name(),
        delay_ms = timer.delay().as_millis() as u64,
        "play session started"
    );

    let mut played = 0u32;
    for _ in 0..hands {
        match engine.start_hand() {
            Ok(()) => {}
            Err(GameError::NotEnoughPlayers { .. }) => {
                writeln!(out, "Game over: a player is out of chips")?;
                break;
            }
            Err(e) => return Err(e.into()),
        }
        ui::render_hand_header(out, &engine)?;
        match play_hand(
            &mut engine,
            &events,
            policy.as_mut(),
            timer,
            stdin,
            out,
            err,
        )? {
            HandEnd::Finished => played += 1,
            HandEnd::Quit => {
                writeln!(out, "Quitting.")?;
                break;
            }
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    for p in engine.players() {
        writeln!(out, "{}: {} chips", p.name(), p.chips())?;
    }
    Ok(())
}

enum HandEnd {
    Finished,
    Quit,
}

fn play_hand(
    engine: &mut Engine,
    events: &Receiver<EngineEvent>,
    policy: &mut dyn DecisionPolicy,
    timer: &mut BotTimer,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<HandEnd, CliError> {
    loop {
        for event in events.try_iter() {
            match event {
                EngineEvent::PhaseChanged { phase } if phase != RoundPhase::PreFlop => {
                    let board = engine.community_cards();
                    let shown = board_len(phase).min(board.len());
                    writeln!(out, "--- {} {}", phase, format_board(&board[..shown]))?;
                }
                EngineEvent::RoundEnded(summary) => {
                    for line in format_summary(&summary) {
                        writeln!(out, "{}", line)?;
                    }
                }
                _ => {}
            }
        }
        // the engine only reports a current seat while the hand is running
        let Some(seat) = engine.current_seat() else {
            return Ok(HandEnd::Finished);
        };

        if engine.is_current_actor_automated() {
            if timer.wait() == TimerOutcome::Cancelled {
                return Err(CliError::Interrupted("bot turn cancelled".into()));
            }
            let action = act_for_bot(engine, seat, policy)?;
            let bot = engine.player(seat).map(|p| p.name()).unwrap_or(BOT_NAME);
            writeln!(out, "{}: {}", bot, format_action(&action))?;
            continue;
        }

        ui::render_table(out, engine, seat)?;
        ui::render_prompt(out, engine, seat)?;
        out.flush()?;
        let Some(line) = read_stdin_line(stdin) else {
            writeln!(out)?;
            return Ok(HandEnd::Quit);
        };
        match parse_player_action(&line) {
            ParseResult::Quit => return Ok(HandEnd::Quit),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Action(action) => match engine.submit_action(action) {
                Ok(_) => {
                    let who = engine.player(seat).map(|p| p.name()).unwrap_or("?");
                    writeln!(out, "{}: {}", who, format_action(&action))?;
                }
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => ui::write_error(err, &e.to_string())?,
            },
        }
    }
}

/// Asks the policy for an action and submits it. A rejected choice is
/// replaced by a check or fold so the hand always moves on.
pub(crate) fn act_for_bot(
    engine: &mut Engine,
    seat: usize,
    policy: &mut dyn DecisionPolicy,
) -> Result<PlayerAction, CliError> {
    let ctx = DecisionContext::for_seat(engine, seat)
        .ok_or_else(|| CliError::InvalidInput(format!("no player in seat {}", seat)))?;
    let chosen = policy.decide(&ctx);
    match engine.submit_action(chosen) {
        Ok(_) => Ok(chosen),
        Err(e) if e.is_fatal() => Err(e.into()),
        Err(e) => {
            tracing::warn!(seat, policy = policy.name(), error = %e, "policy action rejected");
            let fallback = ctx.passive();
            engine.submit_action(fallback)?;
            Ok(fallback)
        }
    }
}

fn board_len(phase: RoundPhase) -> usize {
    match phase {
        RoundPhase::PreFlop => 0,
        RoundPhase::Flop => 3,
        RoundPhase::Turn => 4,
        RoundPhase::River | RoundPhase::Showdown => 5,
    }
}
