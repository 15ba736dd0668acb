use thiserror::Error;

use crate::player::PlayerId;

/// Every way a table, deck or evaluator call can be rejected.
///
/// All variants are local and recoverable: the rejected call has not touched
/// any state, so the caller may inspect the error and retry with a corrected input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal action: {0}")]
    IllegalAction(#[from] ActionViolation),
    #[error("Insufficient cards: requested {requested}, available {available}")]
    InsufficientCards { requested: usize, available: usize },
    #[error("Invalid card notation: {0:?}")]
    InvalidCardNotation(String),
    #[error("Need at least 2 players with chips, found {available}")]
    InsufficientPlayers { available: usize },
    #[error("Seating error: {0}")]
    SeatingError(String),
}

/// Why an action was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionViolation {
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("it's not {actual}'s turn (expected {expected})")]
    NotPlayersTurn { expected: PlayerId, actual: PlayerId },
    #[error("player {0} is not seated at this table")]
    UnknownPlayer(PlayerId),
    #[error("cannot check while {to_call} is owed")]
    CannotCheck { to_call: u32 },
    #[error("nothing to call")]
    NothingToCall,
    #[error("raise of {amount} is below the minimum of {minimum}")]
    RaiseTooSmall { amount: u32, minimum: u32 },
    #[error("committing {required} exceeds the stack of {stack}")]
    InsufficientChips { required: u32, stack: u32 },
    #[error("no chips left to commit")]
    NothingToCommit,
}
