//! Round state and intent types.

/// Round state.
///
/// `PlayerHitting`, `WaitingForDealer`, `DealerHitting`, and
/// `CheckingHandOver` are automatic: [`Round::submit`](crate::Round::submit)
/// runs them to completion before returning, so a round at rest is always in
/// `WaitingForPlayer`, `DisplayingResults`, or `Exiting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the player to hit or stand.
    WaitingForPlayer,
    /// The player takes a card.
    PlayerHitting,
    /// The dealer decides whether to take a card.
    WaitingForDealer,
    /// The dealer takes a card.
    DealerHitting,
    /// The finished turn cycle is checked for a resolved round.
    CheckingHandOver,
    /// The round is resolved and results can be shown.
    DisplayingResults,
    /// The round has been quit.
    Exiting,
}

/// An action submitted by the external input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Take one more card.
    Hit,
    /// Take no more cards this cycle.
    Stand,
    /// Leave a resolved round.
    Quit,
}
