use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Category;
use crate::player::{PlayerAction, PlayerId};

/// Represents a betting street in Texas Hold'em poker.
/// Defines the four stages of a poker hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Street {
    /// Before flop (hole cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }

    /// Community cards dealt when this street opens.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }
}

/// Records a single player action during a hand.
/// Associates the action with the player and the street when it occurred.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player_id: PlayerId,
    /// The betting street when this action occurred
    pub street: Street,
    /// The action as submitted
    pub action: PlayerAction,
    /// Chips the action moved from the stack into the pot
    pub amount: u32,
    /// Pot total after the action
    pub pot_after: u32,
}

/// A player's state when the hand was settled.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    /// Final stack, winnings included
    pub stack: u32,
    pub hole_cards: Vec<Card>,
    pub folded: bool,
    /// Total chips put in during the hand
    pub committed: u32,
}

/// A hand shown down.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub player_id: PlayerId,
    pub category: Category,
    pub name: String,
    pub cards: Vec<Card>,
}

/// One settled pot layer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotResult {
    pub amount: u32,
    pub eligible: Vec<PlayerId>,
    pub winners: Vec<PlayerId>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub player_id: PlayerId,
    pub amount: u32,
}

/// Immutable settlement record of one hand.
/// Serialized to JSONL format for hand history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Identifier, `YYYYMMDD-NNNNNN` when written by [`HandLogger`]
    pub hand_id: String,
    pub hand_number: u64,
    /// Seed of the per-hand shuffle (enables deterministic replay)
    pub seed: Option<u64>,
    pub button: PlayerId,
    /// Winners of the main pot, in payout order
    pub winners: Vec<PlayerId>,
    /// Total pot before distribution
    pub pot: u32,
    /// Community cards on the board (up to 5 cards)
    pub board: Vec<Card>,
    pub players: Vec<PlayerSnapshot>,
    /// Present only when the hand reached showdown
    #[serde(default)]
    pub showdown: Option<Vec<EvaluatedHand>>,
    #[serde(default)]
    pub pots: Vec<PotResult>,
    #[serde(default)]
    pub payouts: Vec<Payout>,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u64) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends hand records to a JSONL file, one record per line.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u64,
}

impl HandLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that only hands out ids and discards records.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Writes `record` under the next hand id, stamping `ts` if missing.
    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        rec.hand_id = self.next_id();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
