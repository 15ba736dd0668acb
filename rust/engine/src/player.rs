use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Opaque player identity, stable across hands.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Represents a player action during a betting round.
///
/// `Raise(n)` is the increment *above the call*, not the new total bet.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid if nothing is owed)
    Check,
    /// Call the current bet, capped at the remaining stack
    Call,
    /// Call, then add the given increment
    Raise(u32),
    /// Commit all remaining chips
    AllIn,
}

/// A seated player: chip stack, hole cards and the per-hand betting state.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    stack: u32,
    hole: Option<[Card; 2]>,
    /// Chips put in on the current street
    street_bet: u32,
    /// Chips put in over the whole hand, antes included
    committed: u32,
    folded: bool,
    all_in: bool,
    /// Had chips when the current hand started
    active: bool,
    /// Acted since the last full raise on this street
    acted: bool,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, stack: u32) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            hole: None,
            street_bet: 0,
            committed: 0,
            folded: false,
            all_in: false,
            active: false,
            acted: false,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }
    pub fn street_bet(&self) -> u32 {
        self.street_bet
    }
    pub fn committed(&self) -> u32 {
        self.committed
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Still holding cards this hand.
    pub fn in_hand(&self) -> bool {
        self.active && !self.folded
    }

    /// Able to take a betting decision.
    pub fn can_act(&self) -> bool {
        self.active && !self.folded && !self.all_in
    }

    pub(crate) fn has_acted(&self) -> bool {
        self.acted
    }

    /// Clears everything left over from the previous hand.
    pub(crate) fn reset_for_hand(&mut self) {
        self.hole = None;
        self.street_bet = 0;
        self.committed = 0;
        self.folded = false;
        self.all_in = false;
        self.acted = false;
        self.active = self.stack > 0;
    }

    pub(crate) fn reset_for_street(&mut self) {
        self.street_bet = 0;
        self.acted = false;
    }

    pub(crate) fn give_cards(&mut self, cards: [Card; 2]) {
        self.hole = Some(cards);
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Moves up to `amount` chips into the street bet and returns what was
    /// actually moved. Emptying the stack marks the player all-in.
    pub(crate) fn commit(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.street_bet += paid;
        self.committed += paid;
        if self.stack == 0 {
            self.all_in = true;
        }
        paid
    }

    /// Like [`Player::commit`] but the chips are dead money: they count
    /// toward the hand total, not toward the street bet.
    pub(crate) fn commit_dead(&mut self, amount: u32) -> u32 {
        let paid = amount.min(self.stack);
        self.stack -= paid;
        self.committed += paid;
        if self.stack == 0 {
            self.all_in = true;
        }
        paid
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
        self.acted = true;
    }

    pub(crate) fn mark_acted(&mut self, acted: bool) {
        self.acted = acted;
    }
}
