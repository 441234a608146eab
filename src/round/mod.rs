//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DrawError;
use crate::hand::Hand;
use crate::outcome::Outcome;
use crate::snapshot::Snapshot;

mod machine;
pub mod state;

pub use state::{Intent, RoundState};

/// Highest score at which the dealer still takes a card.
pub const DEALER_HIT_MAX: u8 = 16;

/// Which side a card is dealt to.
#[derive(Clone, Copy)]
enum Seat {
    Player,
    Dealer,
}

/// A single round of heads-up twenty-one.
///
/// The round owns the deck, both hands, and the state machine; mutation
/// happens only through [`Round::submit`]. Every transition runs to
/// completion inside `submit`, so the round is at rest between calls.
///
/// A new round is a new `Round` value; nothing carries over.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// Current round state.
    state: RoundState,
    /// Whether the player hit this cycle.
    player_has_hit: bool,
    /// Whether the dealer hit this cycle.
    dealer_has_hit: bool,
    /// Outcome, recorded when the round resolves.
    outcome: Option<Outcome>,
}

impl Round {
    /// Creates a round from a freshly shuffled deck and deals the opening
    /// hands.
    ///
    /// # Example
    ///
    /// ```
    /// use headsup21::{Round, RoundState};
    ///
    /// let round = Round::new(42);
    /// assert_eq!(round.state(), RoundState::WaitingForPlayer);
    /// assert_eq!(round.player_hand().len(), 2);
    /// ```
    #[expect(
        clippy::missing_panics_doc,
        reason = "a full deck always covers the opening deal"
    )]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self::with_deck(deck).expect("a full deck always covers the opening deal")
    }

    /// Creates a round that deals from the given deck, in its current order.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover the four-card opening deal.
    pub fn with_deck(deck: Deck) -> Result<Self, DrawError> {
        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            state: RoundState::WaitingForPlayer,
            player_has_hit: false,
            dealer_has_hit: false,
            outcome: None,
        };
        round.deal_opening()?;

        Ok(round)
    }

    /// Deals the fixed opening hands: player card face-up, dealer hole card
    /// face-down, player card face-up, dealer card face-up.
    fn deal_opening(&mut self) -> Result<(), DrawError> {
        self.deal_to(Seat::Player, true)?;
        self.deal_to(Seat::Dealer, false)?;
        self.deal_to(Seat::Player, true)?;
        self.deal_to(Seat::Dealer, true)?;
        Ok(())
    }

    /// Draws the top card and gives it to the given seat.
    fn deal_to(&mut self, seat: Seat, face_up: bool) -> Result<(), DrawError> {
        let mut card = self.deck.draw_top()?;
        card.face_up = face_up;

        match seat {
            Seat::Player => self.player.add_card(card),
            Seat::Dealer => self.dealer.add_card(card),
        }

        Ok(())
    }

    /// Submits an intent from the input layer.
    ///
    /// An intent the current state does not recognize is ignored: the legal
    /// pairs are hit or stand while waiting for the player, and quit once
    /// results are displayed. After the intent is applied, the automatic
    /// states run to completion, so on return the round is back at rest.
    ///
    /// # Errors
    ///
    /// Returns an error if a hit needs a card and the deck is exhausted —
    /// not reachable when dealing from a full deck. The round then stays in
    /// the hitting state and ignores all further intents; start a new round.
    ///
    /// # Example
    ///
    /// ```
    /// use headsup21::{Card, Deck, Intent, Outcome, Rank, Round, RoundState, Suit};
    ///
    /// let deck = Deck::from_cards(vec![
    ///     Card::new(Suit::Hearts, Rank::King),    // player
    ///     Card::new(Suit::Clubs, Rank::Nine),     // dealer hole
    ///     Card::new(Suit::Spades, Rank::Queen),   // player
    ///     Card::new(Suit::Diamonds, Rank::Eight), // dealer
    /// ]);
    /// let mut round = Round::with_deck(deck)?;
    ///
    /// // 20 against 17 with nobody hitting: standing resolves the round.
    /// round.submit(Intent::Stand)?;
    /// assert_eq!(round.state(), RoundState::DisplayingResults);
    /// assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
    ///
    /// round.submit(Intent::Quit)?;
    /// assert_eq!(round.state(), RoundState::Exiting);
    /// # Ok::<(), headsup21::DrawError>(())
    /// ```
    pub fn submit(&mut self, intent: Intent) -> Result<(), DrawError> {
        match (self.state, intent) {
            (RoundState::WaitingForPlayer, Intent::Hit) => {
                self.state = RoundState::PlayerHitting;
            }
            (RoundState::WaitingForPlayer, Intent::Stand) => {
                self.state = RoundState::WaitingForDealer;
            }
            (RoundState::DisplayingResults, Intent::Quit) => {
                self.state = RoundState::Exiting;
            }
            // Unrecognized intents are no-ops by contract.
            _ => return Ok(()),
        }

        self.run_to_rest()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's current score.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.score()
    }

    /// Returns the dealer's current score.
    ///
    /// This is the full score including the hole card; what to show before
    /// the reveal is the rendering layer's call.
    #[must_use]
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    /// Returns the outcome, once the round has been resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns a read-only snapshot for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player_hand: self.player.cards().to_vec(),
            dealer_hand: self.dealer.cards().to_vec(),
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
            outcome: self.outcome,
        }
    }
}
