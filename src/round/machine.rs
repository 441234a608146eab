use crate::error::DrawError;
use crate::outcome::Outcome;

use super::{DEALER_HIT_MAX, Round, RoundState, Seat};

impl Round {
    /// Runs the automatic states until the round is back at rest.
    pub(super) fn run_to_rest(&mut self) -> Result<(), DrawError> {
        loop {
            match self.state {
                RoundState::PlayerHitting => {
                    self.deal_to(Seat::Player, true)?;
                    self.player_has_hit = true;
                    self.state = RoundState::WaitingForDealer;
                }
                RoundState::WaitingForDealer => {
                    self.state = if self.dealer.score() <= DEALER_HIT_MAX {
                        RoundState::DealerHitting
                    } else {
                        RoundState::CheckingHandOver
                    };
                }
                RoundState::DealerHitting => {
                    self.deal_to(Seat::Dealer, true)?;
                    self.dealer_has_hit = true;
                    self.state = RoundState::CheckingHandOver;
                }
                RoundState::CheckingHandOver => self.check_hand_over(),
                RoundState::WaitingForPlayer
                | RoundState::DisplayingResults
                | RoundState::Exiting => return Ok(()),
            }
        }
    }

    /// Decides whether the finished turn cycle ends the round.
    fn check_hand_over(&mut self) {
        if !self.player_has_hit && !self.dealer_has_hit {
            // Natural comparison. A bust cannot reach this branch: opening
            // two-card hands cap at 21, and a bust on a later cycle ends the
            // round before the flags are cleared.
            debug_assert!(!self.player.is_bust() && !self.dealer.is_bust());

            let outcome = if self.player.score() > self.dealer.score() {
                Outcome::PlayerWins
            } else if self.player.score() == self.dealer.score() {
                Outcome::Tie
            } else {
                Outcome::DealerWins
            };
            self.resolve(outcome);
        } else if self.player_has_hit && self.player.is_bust() {
            // Checked before the dealer's bust: when both sides bust in the
            // same cycle, the round goes to the dealer.
            self.resolve(Outcome::DealerWins);
        } else if self.dealer_has_hit && self.dealer.is_bust() {
            self.resolve(Outcome::PlayerWins);
        } else {
            self.player_has_hit = false;
            self.dealer_has_hit = false;
            self.state = RoundState::WaitingForPlayer;
        }
    }

    /// Ends the round: reveals the dealer's hole card, records the outcome,
    /// and freezes further hits.
    fn resolve(&mut self, outcome: Outcome) {
        self.dealer.reveal_all();
        self.outcome = Some(outcome);
        self.state = RoundState::DisplayingResults;
    }
}
