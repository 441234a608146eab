//! Round outcome types.

use core::fmt;

/// The winner of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player won.
    PlayerWins,
    /// The dealer won.
    DealerWins,
    /// The round was a tie.
    Tie,
}

impl Outcome {
    /// Returns the display text for this outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use headsup21::Outcome;
    ///
    /// assert_eq!(Outcome::PlayerWins.as_str(), "Player Wins!");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayerWins => "Player Wins!",
            Self::DealerWins => "Dealer Wins!",
            Self::Tie => "Tie!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
