use serde::{Deserialize, Serialize};

use crate::game::Stage;
use crate::player::PlayerId;

/// Placeholder shown in place of a hidden hole card.
pub const HIDDEN_CARD: &str = "??";

/// What one seat looks like from a particular viewer's chair.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub stack: u32,
    pub street_bet: u32,
    pub folded: bool,
    pub all_in: bool,
    pub active: bool,
    /// 2-character notation, [`HIDDEN_CARD`] pairs when concealed, empty when no cards
    pub hole_cards: Vec<String>,
}

/// Redacted projection of a table, safe to hand to an action provider.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableView {
    pub hand_number: u64,
    pub stage: Stage,
    pub pot: u32,
    pub community_cards: Vec<String>,
    pub current_bet: u32,
    pub min_raise: u32,
    pub current_player: Option<PlayerId>,
    pub button: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub players: Vec<PlayerView>,
}

impl TableView {
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerView> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Seat index of `id`, in table order.
    pub fn seat_of(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }
}
