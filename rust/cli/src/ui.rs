//! Terminal rendering of the engine's read-only state.

use std::io::Write;

use holdem_engine::engine::Engine;

use crate::formatters::{format_board, format_card};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Header printed when a hand starts.
pub fn render_hand_header(out: &mut dyn Write, engine: &Engine) -> std::io::Result<()> {
    let config = engine.config();
    let dealer = engine
        .player(engine.dealer())
        .map(|p| p.name())
        .unwrap_or("?");
    writeln!(out, "Hand {}", engine.hand_number())?;
    writeln!(
        out,
        "Blinds: SB={} BB={} (dealer: {})",
        config.small_blind, config.big_blind, dealer
    )
}

/// The table as `seat` sees it: board, pot, stacks and its own hole cards.
pub fn render_table(out: &mut dyn Write, engine: &Engine, seat: usize) -> std::io::Result<()> {
    writeln!(
        out,
        "{}: board {} pot {} bet {}",
        engine.phase(),
        format_board(engine.community_cards()),
        engine.pot(),
        engine.current_bet()
    )?;
    for (i, p) in engine.players().iter().enumerate() {
        let marker = if engine.current_seat() == Some(i) { ">" } else { " " };
        let status = if p.is_folded() {
            " folded"
        } else if p.is_all_in() {
            " all-in"
        } else {
            ""
        };
        writeln!(
            out,
            "{} {} chips {} bet {}{}",
            marker,
            p.name(),
            p.chips(),
            p.current_bet(),
            status
        )?;
    }
    if let Some(p) = engine.player(seat) {
        let hole: Vec<String> = p.hole_cards().iter().map(format_card).collect();
        writeln!(out, "Your cards: {}", hole.join(" "))?;
    }
    Ok(())
}

/// Prompt listing what the seat may do right now.
pub fn render_prompt(out: &mut dyn Write, engine: &Engine, seat: usize) -> std::io::Result<()> {
    let owed = engine.to_call(seat);
    if owed == 0 {
        write!(
            out,
            "Action (fold | check | raise <{}+> | q): ",
            engine.min_raise_to()
        )?;
    } else {
        write!(
            out,
            "To call {}. Action (fold | call | raise <{}+> | q): ",
            owed,
            engine.min_raise_to()
        )?;
    }
    out.flush()
}
