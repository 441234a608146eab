//! Hand storage and scoring.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Highest score a hand can hold without busting.
pub const MAX_HAND_SCORE: u8 = 21;

/// Scores a hand of cards.
///
/// Every non-ace card is worth its pip value. At most one ace is ever worth
/// 11, and only when that keeps the hand within [`MAX_HAND_SCORE`]; every
/// other ace is worth 1. The result does not depend on card order.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let mut sum: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        } else {
            sum = sum.saturating_add(card.rank.pip_value());
        }
    }

    // Only one ace can ever count as 11.
    if aces > 1 {
        sum = sum.saturating_add(aces - 1);
        aces = 1;
    }

    if aces > 0 {
        if sum <= MAX_HAND_SCORE - 11 {
            sum += 11;
        } else {
            sum = sum.saturating_add(1);
        }
    }

    sum
}

/// Returns whether a hand of cards scores over [`MAX_HAND_SCORE`].
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > MAX_HAND_SCORE
}

/// An ordered hand of cards.
///
/// Order is deal order; it matters for display, never for scoring. A hand
/// only grows within a round.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Turns every card in the hand face-up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.face_up = true;
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
