//! Scoring and deck tests.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use headsup21::{
    Card, DECK_SIZE, Deck, DrawError, MAX_HAND_SCORE, Rank, ShuffleError, Suit, is_bust, score,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn courts_and_tens_score_ten() {
    let hand = [
        card(Suit::Hearts, Rank::Jack),
        card(Suit::Clubs, Rank::Queen),
    ];
    assert_eq!(score(&hand), 20);
}

#[test]
fn single_ace_takes_the_better_value() {
    let soft = [card(Suit::Hearts, Rank::Ace), card(Suit::Clubs, Rank::Six)];
    assert_eq!(score(&soft), 17);

    let hard = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Spades, Rank::Nine),
    ];
    assert_eq!(score(&hard), 16);
}

#[test]
fn two_aces_score_twelve() {
    let hand = [card(Suit::Hearts, Rank::Ace), card(Suit::Spades, Rank::Ace)];
    assert_eq!(score(&hand), 12);
}

#[test]
fn four_aces_score_fourteen() {
    let hand = [
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
    ];
    assert_eq!(score(&hand), 14);
}

#[test]
fn last_ace_degrades_when_eleven_busts() {
    // A ten under four aces: 10 + 1 + 1 + 1 + 1.
    let hand = [
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Spades, Rank::Ace),
    ];
    assert_eq!(score(&hand), 14);
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(score(&[]), 0);
    assert!(!is_bust(&[]));
}

#[test]
fn full_deck_holds_52_distinct_cards() {
    let mut deck = Deck::new();
    let mut seen = HashSet::new();

    while let Ok(c) = deck.draw_top() {
        seen.insert((c.suit, c.rank));
    }

    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn shuffling_preserves_the_card_multiset() {
    let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(11));
    let mut seen = HashSet::new();

    while let Ok(c) = deck.draw_top() {
        seen.insert((c.suit, c.rank));
    }

    assert_eq!(seen.len(), DECK_SIZE);
}

#[test]
fn drawn_plus_remaining_is_constant() {
    let mut deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(9));

    for drawn in 1..=DECK_SIZE {
        deck.draw_top().unwrap();
        assert_eq!(deck.drawn(), drawn);
        assert_eq!(deck.drawn() + deck.remaining(), DECK_SIZE);
    }

    assert_eq!(deck.draw_top().unwrap_err(), DrawError::EmptyDeck);
}

#[test]
fn shuffle_is_rejected_after_a_draw() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();

    deck.shuffle(&mut rng).unwrap();
    deck.draw_top().unwrap();

    assert_eq!(
        deck.shuffle(&mut rng).unwrap_err(),
        ShuffleError::AlreadyDrawn
    );
}

fn arb_card() -> impl Strategy<Value = Card> {
    ((0usize..4), (0usize..13)).prop_map(|(s, r)| Card::new(Suit::ALL[s], Rank::ALL[r]))
}

proptest! {
    #[test]
    fn score_is_order_independent(
        hand in prop::collection::vec(arb_card(), 0..12),
        seed in any::<u64>(),
    ) {
        let mut shuffled = hand.clone();
        shuffled.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(score(&shuffled), score(&hand));
    }

    #[test]
    fn ace_free_hands_score_the_pip_sum(hand in prop::collection::vec(arb_card(), 0..12)) {
        let no_aces: Vec<Card> = hand.into_iter().filter(|c| c.rank != Rank::Ace).collect();
        let pips: u32 = no_aces.iter().map(|c| u32::from(c.rank.pip_value())).sum();

        prop_assert_eq!(u32::from(score(&no_aces)), pips);
    }

    #[test]
    fn one_ace_scores_the_better_value(hand in prop::collection::vec(arb_card(), 0..8)) {
        let mut cards: Vec<Card> = hand.into_iter().filter(|c| c.rank != Rank::Ace).collect();
        let others: u8 = cards.iter().map(|c| c.rank.pip_value()).sum();
        cards.push(Card::new(Suit::Spades, Rank::Ace));

        let expected = if others + 11 <= MAX_HAND_SCORE {
            others + 11
        } else {
            others + 1
        };
        prop_assert_eq!(score(&cards), expected);
    }

    #[test]
    fn bust_is_score_above_21(hand in prop::collection::vec(arb_card(), 0..12)) {
        prop_assert_eq!(is_bust(&hand), score(&hand) > MAX_HAND_SCORE);
    }
}
