// Proptest generators for domain types.
// These generators ensure unique cards and valid game settings for property-based testing.

use proptest::prelude::*;

use crate::domain::{Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Clubs),
        Just(Suit::Diamonds),
        Just(Suit::Hearts),
        Just(Suit::Spades),
    ]
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    (0u8..13).prop_map(|i| Rank::ALL[i as usize])
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// Generate a vector of N unique cards
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = crate::domain::deck::deck();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a vector of 0 to max_count unique cards
pub fn unique_cards_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (0..=max_count).prop_flat_map(unique_cards)
}

/// Hand plus an optional top card, all distinct.
pub fn hand_and_top() -> impl Strategy<Value = (Vec<Card>, Option<Card>)> {
    (1usize..=14, any::<bool>()).prop_flat_map(|(n, with_top)| {
        unique_cards(n).prop_map(move |mut cards| {
            let top = if with_top { cards.pop() } else { None };
            (cards, top)
        })
    })
}

/// Hand rich in cards sharing a rank with the top card, for permutation coverage.
pub fn hand_matching_top() -> impl Strategy<Value = (Vec<Card>, Card)> {
    (rank(), unique_cards_up_to(6), proptest::sample::subsequence(Suit::ALL.to_vec(), 1..=4))
        .prop_map(|(rank, others, suits)| {
            let top = Card::new(rank, suits[0]);
            let mut hand: Vec<Card> = suits[1..].iter().map(|s| Card::new(rank, *s)).collect();
            for card in others {
                if card != top && !hand.contains(&card) {
                    hand.push(card);
                }
            }
            (hand, top)
        })
}

/// Generate a player count (2..=4)
pub fn num_players() -> impl Strategy<Value = usize> {
    2usize..=4
}

/// Generate a game seed
pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
