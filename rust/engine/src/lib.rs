//! # referee-engine: No-Limit Hold'em Rules Engine
//!
//! Authoritative rules for a multi-seat No-Limit Texas Hold'em table: dealing,
//! blinds and antes, betting-round legality, street progression, side pots,
//! showdown and chip settlement. Players (human or automated) submit actions;
//! the table validates them, applies them and reports what happened.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and 2-character notation
//! - [`deck`] - Ordered 52-card deck with seeded shuffling
//! - [`hand`] - Best-of-seven evaluation and multi-way ranking
//! - [`player`] - Player identity, actions and per-hand betting state
//! - [`rules`] - Legal actions and action validation
//! - [`game`] - Table stages and seat rotation
//! - [`pot`] - Main pot and side pot layering
//! - [`engine`] - The [`Table`](engine::Table) state machine
//! - [`view`] - Redacted per-viewer snapshots
//! - [`events`] - Notifications queued for drivers
//! - [`logger`] - HandRecord serialization and JSONL hand history
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use referee_engine::cards::parse_cards;
//! use referee_engine::hand::{evaluate, Category};
//!
//! let hole = parse_cards("Ah Kh").unwrap();
//! let board = parse_cards("Qh Jh Th 2c 3d").unwrap();
//!
//! let best = evaluate(&hole, &board).unwrap();
//! assert_eq!(best.category(), Category::RoyalFlush);
//! ```
//!
//! ## Running a Hand
//!
//! ```rust
//! use referee_engine::engine::{Table, TableConfig};
//! use referee_engine::game::Stage;
//! use referee_engine::player::PlayerAction;
//!
//! let mut table = Table::new(TableConfig { seed: Some(42), ..TableConfig::default() }).unwrap();
//! table.add_player("p1", "Ann", 1000).unwrap();
//! table.add_player("p2", "Ben", 1000).unwrap();
//! table.add_player("p3", "Cal", 1000).unwrap();
//! table.start_hand().unwrap();
//!
//! while let Some(actor) = table.current_player().cloned() {
//!     let legal = table.legal_actions().unwrap();
//!     let action = if legal.to_call == 0 { PlayerAction::Check } else { PlayerAction::Call };
//!     table.apply_action(&actor, action).unwrap();
//! }
//!
//! assert_eq!(table.stage(), Stage::HandComplete);
//! assert_eq!(table.total_chips(), 3000);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! A table built with a seed deals the same cards every time:
//!
//! ```rust
//! use referee_engine::deck::Deck;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let a = Deck::standard().shuffled(&mut ChaCha20Rng::seed_from_u64(42));
//! let b = Deck::standard().shuffled(&mut ChaCha20Rng::seed_from_u64(42));
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod view;
