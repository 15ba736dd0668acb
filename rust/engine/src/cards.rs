use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (c)
    Clubs,
    /// Diamonds suit (d)
    Diamonds,
    /// Hearts suit (h)
    Hearts,
    /// Spades suit (s)
    Spades,
}

impl Suit {
    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Case-insensitive inverse of [`Suit::to_char`].
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    /// Numeric value, 2 through 14.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> Option<Rank> {
        all_ranks()
            .into_iter()
            .find(|r| r.to_char() == c.to_ascii_uppercase())
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are the fundamental unit of the poker game, used in player hands, the board, and the deck.
///
/// On the wire a card is its 2-character notation (`"As"`, `"Td"`, `"2c"`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// Parses 2-character notation, rank first. Case-insensitive.
    ///
    /// ```
    /// use referee_engine::cards::{Card, Rank, Suit};
    ///
    /// let card = Card::parse("tD").unwrap();
    /// assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
    /// assert_eq!(card.to_string(), "Td");
    /// ```
    pub fn parse(text: &str) -> Result<Card, GameError> {
        let invalid = || GameError::InvalidCardNotation(text.to_string());
        let mut chars = text.trim().chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let rank = Rank::from_char(r).ok_or_else(invalid)?;
        let suit = Suit::from_char(s).ok_or_else(invalid)?;
        Ok(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::parse(s)
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

impl TryFrom<String> for Card {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Card::parse(&value)
    }
}

/// Parses whitespace- or comma-separated notation such as `"As Kd, 7h"`.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, GameError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(Card::parse)
        .collect()
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The 52 cards in canonical order: suit by suit, Two to Ace within a suit.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
