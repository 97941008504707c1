use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// A legal action with the chip movement it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// `amount` chips move from the stack into the street bet.
    Call { amount: u32, all_in: bool },
    /// The street bet becomes `total` after moving `amount` chips.
    RaiseTo { total: u32, amount: u32, all_in: bool },
}

pub fn to_call(current_bet: u32, player_bet: u32) -> u32 {
    current_bet.saturating_sub(player_bet)
}

/// Smallest legal raise-to target.
pub fn min_raise_to(current_bet: u32) -> u32 {
    current_bet.saturating_add(1)
}

/// Validates an action for a seat and resolves how many chips it moves.
///
/// # Arguments
///
/// * `current_bet` - Highest street bet at the table
/// * `player_bet` - What the acting seat already put in this street
/// * `chips` - The acting seat's remaining stack
/// * `action` - The requested action
///
/// # Errors
///
/// - [`GameError::CheckNotAllowed`] - checking while a call is owed
/// - [`GameError::RaiseTooSmall`] - a raise-to target that does not exceed `current_bet`
///
/// Asking to move more chips than the stack holds is not an error: the amount
/// is clamped to the stack and the result is flagged all-in.
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// let v = validate_action(20, 10, 500, PlayerAction::Call);
/// assert_eq!(v, Ok(ValidatedAction::Call { amount: 10, all_in: false }));
///
/// // short stack: the call is clamped and becomes all-in
/// let v = validate_action(100, 0, 60, PlayerAction::Call);
/// assert_eq!(v, Ok(ValidatedAction::Call { amount: 60, all_in: true }));
/// ```
///
/// ```
/// use holdem_engine::rules::validate_action;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::errors::GameError;
///
/// let v = validate_action(20, 0, 500, PlayerAction::Check);
/// assert_eq!(v, Err(GameError::CheckNotAllowed { to_call: 20 }));
///
/// let v = validate_action(20, 0, 500, PlayerAction::RaiseTo(20));
/// assert!(matches!(v, Err(GameError::RaiseTooSmall { .. })));
/// ```
pub fn validate_action(
    current_bet: u32,
    player_bet: u32,
    chips: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let owed = to_call(current_bet, player_bet);
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if owed == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(GameError::CheckNotAllowed { to_call: owed })
            }
        }
        A::Call => {
            let amount = owed.min(chips);
            Ok(ValidatedAction::Call {
                amount,
                all_in: amount > 0 && amount == chips,
            })
        }
        A::RaiseTo(target) => {
            if target <= current_bet {
                return Err(GameError::RaiseTooSmall {
                    amount: target,
                    current_bet,
                });
            }
            let amount = (target - player_bet).min(chips);
            Ok(ValidatedAction::RaiseTo {
                total: player_bet + amount,
                amount,
                all_in: amount == chips,
            })
        }
    }
}
