use serde::{Deserialize, Serialize};

use crate::logger::Street;

/// Lifecycle of a table between and during hands.
///
/// `Idle` is the state before the first hand; `HandComplete` doubles as the
/// ready-for-next-hand state once a hand has been settled.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    HandComplete,
}

impl Stage {
    /// The betting street for this stage, if any.
    pub fn street(self) -> Option<Street> {
        match self {
            Stage::Preflop => Some(Street::Preflop),
            Stage::Flop => Some(Street::Flop),
            Stage::Turn => Some(Street::Turn),
            Stage::River => Some(Street::River),
            Stage::Idle | Stage::Showdown | Stage::HandComplete => None,
        }
    }

    pub fn is_betting(self) -> bool {
        self.street().is_some()
    }

    /// Stages in which seats may change and a new hand may start.
    pub fn between_hands(self) -> bool {
        matches!(self, Stage::Idle | Stage::HandComplete)
    }

    /// Stages in which every live hand is shown.
    pub fn reveals_hands(self) -> bool {
        matches!(self, Stage::Showdown | Stage::HandComplete)
    }
}

impl From<Street> for Stage {
    fn from(street: Street) -> Self {
        match street {
            Street::Preflop => Stage::Preflop,
            Street::Flop => Stage::Flop,
            Street::Turn => Stage::Turn,
            Street::River => Stage::River,
        }
    }
}

/// Walks the seating order clockwise starting just after `from` and returns
/// the first seat satisfying `eligible`. `from` itself is checked last, so a
/// lone eligible seat is always found. Returns `None` only when no seat
/// qualifies, which bounds the walk to one lap.
pub fn next_eligible_seat<T>(
    seats: &[T],
    from: usize,
    eligible: impl Fn(&T) -> bool,
) -> Option<usize> {
    let n = seats.len();
    (1..=n)
        .map(|step| (from + step) % n)
        .find(|&idx| eligible(&seats[idx]))
}
