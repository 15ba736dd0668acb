use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Stage;
use crate::logger::{HandRecord, Street};
use crate::player::{PlayerAction, PlayerId};

/// Seat summary carried by [`TableEvent::HandStarted`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatInfo {
    pub id: PlayerId,
    pub name: String,
    /// Stack after blinds and antes were posted
    pub stack: u32,
    pub hole_cards: Vec<Card>,
}

/// Driver-facing notifications, queued by the table in the order they happen
/// and collected with [`crate::engine::Table::drain_events`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TableEvent {
    HandStarted {
        hand_number: u64,
        button: PlayerId,
        players: Vec<SeatInfo>,
        small_blind: (PlayerId, u32),
        big_blind: (PlayerId, u32),
        pot: u32,
    },
    StreetChanged {
        street: Street,
        community_cards: Vec<Card>,
        pot: u32,
    },
    ActionApplied {
        player_id: PlayerId,
        action: PlayerAction,
        amount: u32,
        pot: u32,
        stage: Stage,
    },
    HandEnded(Box<HandRecord>),
}
