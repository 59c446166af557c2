//! Fixed rule constants and rank classification.

use crate::domain::cards_types::Rank;

pub const SUITS: usize = 4;
pub const RANKS: usize = 13;
pub const DECK_SIZE: usize = SUITS * RANKS;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Rank that lets its player demand the suit to be matched next.
pub const WILD_SUIT_REQUEST: Rank = Rank::Eight;
/// Rank that forces the next player to draw two unless they stack it.
pub const WILD_DRAW_STACK: Rank = Rank::Ace;
/// Rank with the turn-skip and last-card reclamation rules.
pub const HAND_EXIT: Rank = Rank::Queen;

/// Cards drawn when answering a stacked wild-draw card.
pub const STACKED_DRAW_COUNT: usize = 2;

/// A hand-exit finish may reclaim a card when the table holds more than this
/// many cards, even if they are all hand-exit cards.
pub const HAND_EXIT_RECLAIM_TABLE_LEN: usize = 3;

pub const DEFAULT_INITIAL_HAND_SIZE: usize = 8;
pub const DEFAULT_POINT_LIMIT: i32 = 151;
pub const DEFAULT_SUCCESSIVE_ZERO_BONUS: i32 = -10;
pub const DEFAULT_MOVE_CEILING: u32 = 512;

/// Per-rank card weights, indexed Two..=Ace.
pub const DEFAULT_RANK_WEIGHTS: [i32; RANKS] = [
    2,  // Two
    3,  // Three
    4,  // Four
    5,  // Five
    6,  // Six
    7,  // Seven
    20, // Eight
    9,  // Nine
    10, // Ten
    2,  // Jack
    3,  // Queen
    4,  // King
    11, // Ace
];

#[inline]
pub fn is_wild_suit_request(rank: Rank) -> bool {
    rank == WILD_SUIT_REQUEST
}

#[inline]
pub fn is_wild_draw_stack(rank: Rank) -> bool {
    rank == WILD_DRAW_STACK
}

#[inline]
pub fn is_hand_exit(rank: Rank) -> bool {
    rank == HAND_EXIT
}

/// Largest hand every seat can be dealt from one deck.
pub fn max_hand_size(num_players: usize) -> usize {
    DECK_SIZE / num_players.max(1)
}
