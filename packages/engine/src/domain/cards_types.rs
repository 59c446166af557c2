//! Core card-related types: Card, Rank, Suit

use crate::domain::rules::{self, RANKS, SUITS};
use crate::errors::domain::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; SUITS] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(DomainError::InvalidSuit(index))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; RANKS] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, DomainError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(DomainError::InvalidRank(index))
    }
}

/// Immutable card identity. `id()` is dense over `[0, DECK_SIZE)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    /// `rank * SUITS + suit`
    #[inline]
    pub const fn id(self) -> u8 {
        self.rank.index() * SUITS as u8 + self.suit.index()
    }

    pub fn from_id(id: u8) -> Result<Self, DomainError> {
        let rank = Rank::from_index(id / SUITS as u8).map_err(|_| DomainError::InvalidCardId(id))?;
        let suit = Suit::from_index(id % SUITS as u8)?;
        Ok(Self { suit, rank })
    }

    #[inline]
    pub fn is_wild_suit_request(self) -> bool {
        rules::is_wild_suit_request(self.rank)
    }

    #[inline]
    pub fn is_wild_draw_stack(self) -> bool {
        rules::is_wild_draw_stack(self.rank)
    }

    #[inline]
    pub fn is_hand_exit(self) -> bool {
        rules::is_hand_exit(self.rank)
    }
}

// Ordering follows the card id (rank major, then suit) so sorted hands
// enumerate in id order.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id().cmp(&other.id())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
