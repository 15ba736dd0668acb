use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered run of distinct cards, consumed strictly from the front.
///
/// Cards handed out by [`Deck::deal`] or [`Deck::burn`] are gone for good, so
/// nothing dealt within one hand can reappear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// The 52-card deck in canonical order.
    pub fn standard() -> Self {
        Self {
            cards: full_deck(),
            position: 0,
        }
    }

    /// A deck whose first cards are `top`, in order, followed by the rest of
    /// the standard deck in canonical order. Used to replay or script a hand.
    pub fn stacked(top: &[Card]) -> Result<Self, GameError> {
        let mut cards = Vec::with_capacity(52);
        for &c in top {
            if cards.contains(&c) {
                return Err(GameError::InvalidCardNotation(format!("duplicate card {c}")));
            }
            cards.push(c);
        }
        cards.extend(full_deck().into_iter().filter(|c| !top.contains(c)));
        Ok(Self { cards, position: 0 })
    }

    /// Returns a uniformly shuffled copy of the undealt cards (Fisher–Yates via
    /// [`SliceRandom::shuffle`]). `self` is left untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards[self.position..].to_vec();
        cards.shuffle(rng);
        Deck { cards, position: 0 }
    }

    /// Takes the next `n` cards. Fails without consuming anything when fewer
    /// than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let available = self.remaining();
        if n > available {
            return Err(GameError::InsufficientCards {
                requested: n,
                available,
            });
        }
        let dealt = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(dealt)
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Discards the top card face down.
    pub fn burn(&mut self) -> Result<Card, GameError> {
        self.deal_card().ok_or(GameError::InsufficientCards {
            requested: 1,
            available: 0,
        })
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// The undealt cards, next card first.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
