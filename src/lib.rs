//! A single-round heads-up twenty-one game engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that owns a shuffled deck and the two
//! hands, runs the hit/stand turn cycle, and resolves a winner. A rendering
//! or input layer drives it by submitting [`Intent`]s and reading
//! [`Snapshot`]s; the engine itself does no I/O.
//!
//! # Example
//!
//! ```
//! use headsup21::{Intent, Round, RoundState};
//!
//! let mut round = Round::new(42);
//! assert_eq!(round.state(), RoundState::WaitingForPlayer);
//!
//! round.submit(Intent::Hit)?;
//! let snapshot = round.snapshot();
//! let _ = snapshot.player_score;
//! # Ok::<(), headsup21::DrawError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod outcome;
pub mod round;
pub mod snapshot;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{DrawError, ShuffleError};
pub use hand::{Hand, MAX_HAND_SCORE, is_bust, score};
pub use outcome::Outcome;
pub use round::{DEALER_HIT_MAX, Intent, Round, RoundState};
pub use snapshot::Snapshot;
