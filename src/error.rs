//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when shuffling a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// Cards have already been drawn from this deck.
    #[error("cards have already been drawn from this deck")]
    AlreadyDrawn,
}

/// Errors that can occur when drawing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}
