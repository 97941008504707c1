//! Terminal formatting for cards, actions and hand results.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal supports Unicode and fall back
//! to the short `h d c s` notation otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::events::{HandSummary, Resolution};
use holdem_engine::player::PlayerAction;

/// Unicode suits are assumed everywhere except plain Windows consoles.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn suit_symbol(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
        Suit::Spades => "♠",
    }
}

pub fn format_card(card: &Card) -> String {
    let short = card.to_string();
    if !supports_unicode() {
        return short;
    }
    // short notation is rank symbol followed by one suit letter
    let rank = &short[..short.len() - 1];
    format!("{}{}", rank, suit_symbol(card.suit))
}

/// Cards in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// # Example
///
/// ```rust
/// use holdem_engine::player::PlayerAction;
/// # use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::RaiseTo(60)), "raise to 60");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::RaiseTo(amount) => format!("raise to {}", amount),
    }
}

/// One line per award, plus the refund and the hands shown, if any.
pub fn format_summary(summary: &HandSummary) -> Vec<String> {
    let how = match (&summary.resolution, summary.resolution.category_name()) {
        (Resolution::Split { .. }, Some(name)) => format!("split pot, {}", name),
        (_, Some(name)) => format!("showdown with {}", name),
        (_, None) => "everyone else folded".to_string(),
    };
    let mut lines = Vec::new();
    if let Some(refund) = &summary.refund {
        lines.push(format!("{} takes back {} uncalled", refund.name, refund.amount));
    }
    for shown in &summary.shown {
        lines.push(format!(
            "Seat {} shows {} -> {} {}",
            shown.seat,
            format_board(&shown.hole),
            shown.result.name(),
            format_board(&shown.best_five)
        ));
    }
    for award in &summary.awards {
        lines.push(format!("{} wins {} ({})", award.name, award.amount, how));
    }
    lines
}
