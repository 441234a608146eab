//! Read-only round views for rendering layers.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::outcome::Outcome;

/// A read-only copy of everything a rendering layer needs to draw a round.
///
/// Card lists are in deal order and carry each card's face-up flag. Scores
/// are valid in every state; `outcome` is populated only once the round has
/// reached [`RoundState::DisplayingResults`](crate::RoundState::DisplayingResults).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The player's cards, in deal order.
    pub player_hand: Vec<Card>,
    /// The dealer's cards, in deal order.
    pub dealer_hand: Vec<Card>,
    /// The player's current score.
    pub player_score: u8,
    /// The dealer's current score.
    pub dealer_score: u8,
    /// The outcome, once the round has been resolved.
    pub outcome: Option<Outcome>,
}

impl Snapshot {
    /// Returns the outcome display text, once the round has been resolved.
    #[must_use]
    pub fn outcome_text(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::as_str)
    }
}
