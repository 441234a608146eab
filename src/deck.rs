//! Deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DrawError, ShuffleError};

/// A single 52-card deck with a draw cursor.
///
/// Drawn cards stay in place behind the cursor, so `drawn() + remaining()`
/// accounts for every card the deck was built with at all times.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in draw order.
    cards: Vec<Card>,
    /// Index of the next card to draw.
    next: usize,
}

impl Deck {
    /// Creates a full deck in canonical order, all cards face-down.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards, next: 0 }
    }

    /// Creates a full deck shuffled into a uniform random order.
    #[must_use]
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    /// Creates a deck that draws the given cards in order.
    ///
    /// Intended for reproducible deals in tests; the caller is responsible
    /// for the 52-card invariants a canonical deck guarantees.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, next: 0 }
    }

    /// Shuffles the deck into a uniform random order.
    ///
    /// # Errors
    ///
    /// Returns an error if any card has already been drawn; a deck is
    /// shuffled once, before play.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) -> Result<(), ShuffleError> {
        if self.next > 0 {
            return Err(ShuffleError::AlreadyDrawn);
        }

        self.cards.shuffle(rng);
        Ok(())
    }

    /// Returns the next card in draw order and advances the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if no cards remain.
    pub fn draw_top(&mut self) -> Result<Card, DrawError> {
        let card = self
            .cards
            .get(self.next)
            .copied()
            .ok_or(DrawError::EmptyDeck)?;
        self.next += 1;
        Ok(card)
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Returns the number of cards drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.next
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
