use serde::{Deserialize, Serialize};

use crate::errors::{ActionViolation, GameError};
use crate::player::PlayerAction as A;

/// The kinds of action a seat may take, without amounts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl From<&A> for ActionKind {
    fn from(action: &A) -> Self {
        match action {
            A::Fold => ActionKind::Fold,
            A::Check => ActionKind::Check,
            A::Call => ActionKind::Call,
            A::Raise(_) => ActionKind::Raise,
            A::AllIn => ActionKind::AllIn,
        }
    }
}

/// What the seat to act may do right now. Handed to action providers.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct LegalActions {
    pub actions: Vec<ActionKind>,
    /// Chips a call would commit (already capped at the stack)
    pub to_call: u32,
    /// Smallest legal raise increment unless the raise is all-in
    pub min_raise: u32,
    /// Street bet the seat reaches with a minimum raise
    pub min_raise_total: u32,
    /// Largest increment the stack allows (0 if raising is not legal)
    pub max_raise: u32,
    pub current_bet: u32,
    pub pot: u32,
    pub stack: u32,
}

impl LegalActions {
    pub fn allows(&self, kind: ActionKind) -> bool {
        self.actions.contains(&kind)
    }

    /// True when `action` would pass [`validate_action`] as-is.
    pub fn permits(&self, action: &A) -> bool {
        if !self.allows(ActionKind::from(action)) {
            return false;
        }
        match *action {
            A::Raise(inc) => inc >= 1 && inc <= self.max_raise && (inc >= self.min_raise || inc == self.max_raise),
            _ => true,
        }
    }
}

/// Computes the legal-action descriptor for a seat.
///
/// # Arguments
///
/// * `stack` - Seat's remaining chips
/// * `street_bet` - What the seat has already put in this street
/// * `current_bet` - Highest street bet at the table
/// * `min_raise` - Current minimum raise increment
/// * `pot` - Total chips in the middle
///
/// # Examples
///
/// ```
/// use referee_engine::rules::{legal_actions, ActionKind};
///
/// // facing a 20 bet with 10 already in, 500 behind
/// let legal = legal_actions(500, 10, 20, 20, 30);
/// assert_eq!(legal.to_call, 10);
/// assert!(legal.allows(ActionKind::Call));
/// assert!(!legal.allows(ActionKind::Check));
/// assert_eq!(legal.min_raise_total, 40);
/// assert_eq!(legal.max_raise, 490);
/// ```
pub fn legal_actions(
    stack: u32,
    street_bet: u32,
    current_bet: u32,
    min_raise: u32,
    pot: u32,
) -> LegalActions {
    let owed = current_bet.saturating_sub(street_bet);
    let mut actions = vec![ActionKind::Fold];
    if owed == 0 {
        actions.push(ActionKind::Check);
    } else {
        actions.push(ActionKind::Call);
    }
    let can_raise = stack > owed;
    if can_raise {
        actions.push(ActionKind::Raise);
    }
    if stack > 0 {
        actions.push(ActionKind::AllIn);
    }
    LegalActions {
        actions,
        to_call: owed.min(stack),
        min_raise,
        min_raise_total: current_bet.saturating_add(min_raise),
        max_raise: if can_raise { stack - owed } else { 0 },
        current_bet,
        pot,
        stack,
    }
}

/// An action that passed validation, with the chips it commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips paid, possibly less than owed when the stack is short
    Call(u32),
    Raise { increment: u32, total: u32 },
    AllIn(u32),
}

/// Validates a player action according to betting rules and stack size.
///
/// Pure: nothing is mutated, so a table can reject an action before touching
/// its own state.
///
/// # Arguments
///
/// * `stack` - Player's remaining chip stack
/// * `to_call` - Amount needed to match the current bet (uncapped)
/// * `min_raise` - Minimum raise increment
/// * `action` - The action the player wishes to perform
///
/// # Errors
///
/// [`GameError::IllegalAction`] when checking while chips are owed, calling
/// with nothing owed, raising below the minimum without going all-in, or
/// committing more than the stack.
///
/// # Examples
///
/// ```
/// use referee_engine::rules::{validate_action, ValidatedAction};
/// use referee_engine::player::PlayerAction;
///
/// // Short stack calls for less
/// let result = validate_action(30, 50, 100, PlayerAction::Call);
/// assert!(matches!(result, Ok(ValidatedAction::Call(30))));
///
/// // A raise below the minimum is fine when it puts the seat all-in
/// let result = validate_action(80, 50, 100, PlayerAction::Raise(30));
/// assert!(matches!(result, Ok(ValidatedAction::Raise { increment: 30, total: 80 })));
/// ```
///
/// ```
/// use referee_engine::rules::validate_action;
/// use referee_engine::player::PlayerAction;
/// use referee_engine::errors::{ActionViolation, GameError};
///
/// let result = validate_action(1000, 50, 100, PlayerAction::Check);
/// assert!(matches!(
///     result,
///     Err(GameError::IllegalAction(ActionViolation::CannotCheck { to_call: 50 }))
/// ));
///
/// let result = validate_action(1000, 50, 100, PlayerAction::Raise(50));
/// assert!(matches!(
///     result,
///     Err(GameError::IllegalAction(ActionViolation::RaiseTooSmall { .. }))
/// ));
/// ```
pub fn validate_action(
    stack: u32,
    to_call: u32,
    min_raise: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else {
                Err(ActionViolation::CannotCheck { to_call }.into())
            }
        }
        A::Call => {
            if to_call == 0 {
                Err(ActionViolation::NothingToCall.into())
            } else {
                Ok(ValidatedAction::Call(to_call.min(stack)))
            }
        }
        A::Raise(increment) => {
            if increment == 0 {
                return Err(ActionViolation::RaiseTooSmall {
                    amount: 0,
                    minimum: min_raise,
                }
                .into());
            }
            let total = to_call.saturating_add(increment);
            if total > stack {
                return Err(ActionViolation::InsufficientChips {
                    required: total,
                    stack,
                }
                .into());
            }
            if increment < min_raise && total < stack {
                return Err(ActionViolation::RaiseTooSmall {
                    amount: increment,
                    minimum: min_raise,
                }
                .into());
            }
            Ok(ValidatedAction::Raise { increment, total })
        }
        A::AllIn => {
            if stack == 0 {
                Err(ActionViolation::NothingToCommit.into())
            } else {
                Ok(ValidatedAction::AllIn(stack))
            }
        }
    }
}
