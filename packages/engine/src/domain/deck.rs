//! Canonical deck template and deterministic shuffling.

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::rules::DECK_SIZE;
use crate::errors::domain::DomainError;

/// All cards in id order. Built once, never mutated.
static CANONICAL_DECK: Lazy<[Card; DECK_SIZE]> = Lazy::new(|| {
    let mut deck = [Card::new(Rank::Two, Suit::Clubs); DECK_SIZE];
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let card = Card::new(rank, suit);
            deck[card.id() as usize] = card;
        }
    }
    deck
});

/// Shared immutable view of the canonical deck.
pub fn canonical_deck() -> &'static [Card; DECK_SIZE] {
    &CANONICAL_DECK
}

/// Fresh owned copy of the canonical deck, in id order.
pub fn deck() -> Vec<Card> {
    CANONICAL_DECK.to_vec()
}

/// Constant-time lookup of the canonical card for `id`.
pub fn card_by_id(id: u8) -> Result<Card, DomainError> {
    CANONICAL_DECK
        .get(id as usize)
        .copied()
        .ok_or(DomainError::InvalidCardId(id))
}

/// Independent shuffled copy of the deck. Same seed, same order.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut cards = deck();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    cards.shuffle(&mut rng);
    cards
}
