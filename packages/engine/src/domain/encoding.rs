//! Bijection between moves and integer action ids.
//!
//! The action space is split into disjoint bands:
//!
//! | ids          | move                                     |
//! |--------------|------------------------------------------|
//! | `0..832`     | play: 13 rank slots of 64 ordered suit lists |
//! | `832`        | draw                                     |
//! | `833`        | pass                                     |
//! | `834..838`   | ask for suit `k`                         |
//!
//! Inside a rank slot an ordered list of `d` distinct suits sits at
//! `LENGTH_OFFSETS[d - 1] + lehmer(suits)`. The Lehmer code is mixed-radix
//! over (4, 3, 2, 1): each digit is the suit's position among the suits not
//! yet used. Different orderings of the same cards get different ids.

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::moves::Move;
use crate::domain::rules::{RANKS, SUITS};
use crate::errors::domain::DomainError;

pub type ActionId = u16;

/// Ids per rank slot: 4 + 12 + 24 + 24 ordered suit lists.
pub const RANK_SLOT_WIDTH: ActionId = 64;
/// Start of the sub-band for suit lists of length `d` is `LENGTH_OFFSETS[d - 1]`.
pub const LENGTH_OFFSETS: [ActionId; SUITS] = [0, 4, 16, 40];
pub const PLAY_ACTIONS: ActionId = RANK_SLOT_WIDTH * RANKS as ActionId;
pub const DRAW_ACTION: ActionId = PLAY_ACTIONS;
pub const PASS_ACTION: ActionId = DRAW_ACTION + 1;
pub const ASK_ACTION_START: ActionId = PASS_ACTION + 1;
pub const ACTION_SPACE_SIZE: ActionId = ASK_ACTION_START + SUITS as ActionId;

/// Suits not yet used, as a bitmask over suit indices.
const ALL_SUITS_MASK: u8 = (1 << SUITS) - 1;

fn suits_are_encodable(suits: &[Suit]) -> bool {
    if suits.is_empty() || suits.len() > SUITS {
        return false;
    }
    let mut seen = 0u8;
    for suit in suits {
        let bit = 1 << suit.index();
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

fn lehmer_code(suits: &[Suit]) -> ActionId {
    let mut remaining = ALL_SUITS_MASK;
    let mut code: ActionId = 0;
    for (i, suit) in suits.iter().enumerate() {
        let radix = (SUITS - i) as ActionId;
        let below = remaining & ((1 << suit.index()) - 1);
        code = code * radix + below.count_ones() as ActionId;
        remaining &= !(1 << suit.index());
    }
    code
}

fn lehmer_decode(mut code: ActionId, len: usize) -> Vec<Suit> {
    let mut digits = vec![0usize; len];
    for i in (0..len).rev() {
        let radix = (SUITS - i) as ActionId;
        digits[i] = (code % radix) as usize;
        code /= radix;
    }
    let mut remaining: Vec<Suit> = Suit::ALL.to_vec();
    digits
        .into_iter()
        .map(|digit| remaining.remove(digit))
        .collect()
}

/// Play id for `suits` of one `rank`, laid down in the given order.
///
/// `suits` must be non-empty and distinct; moves built from a hand always are.
pub(crate) fn play_action_id(rank: Rank, suits: &[Suit]) -> ActionId {
    debug_assert!(suits_are_encodable(suits));
    rank.index() as ActionId * RANK_SLOT_WIDTH
        + LENGTH_OFFSETS[suits.len() - 1]
        + lehmer_code(suits)
}

#[inline]
pub(crate) fn ask_action_id(suit: Suit) -> ActionId {
    ASK_ACTION_START + suit.index() as ActionId
}

/// Play id for `cards`, which must share one rank and have distinct suits.
pub fn encode_play(cards: &[Card]) -> Result<ActionId, DomainError> {
    let Some(first) = cards.first() else {
        return Err(DomainError::unencodable("empty play"));
    };
    if cards.iter().any(|c| c.rank != first.rank) {
        return Err(DomainError::unencodable(format!(
            "mixed ranks in play {cards:?}"
        )));
    }
    let suits: Vec<Suit> = cards.iter().map(|c| c.suit).collect();
    if !suits_are_encodable(&suits) {
        return Err(DomainError::unencodable(format!(
            "repeated suit in play {cards:?}"
        )));
    }
    Ok(play_action_id(first.rank, &suits))
}

pub fn encode(mv: &Move) -> Result<ActionId, DomainError> {
    match mv {
        Move::Draw => Ok(DRAW_ACTION),
        Move::Pass => Ok(PASS_ACTION),
        Move::AskSuit(suit) => Ok(ask_action_id(*suit)),
        Move::PlayCards(cards) => encode_play(cards),
    }
}

pub fn decode(id: ActionId) -> Result<Move, DomainError> {
    match id {
        DRAW_ACTION => Ok(Move::Draw),
        PASS_ACTION => Ok(Move::Pass),
        id if (ASK_ACTION_START..ACTION_SPACE_SIZE).contains(&id) => {
            Ok(Move::AskSuit(Suit::from_index((id - ASK_ACTION_START) as u8)?))
        }
        id if id < PLAY_ACTIONS => {
            let rank = Rank::from_index((id / RANK_SLOT_WIDTH) as u8)?;
            let offset = id % RANK_SLOT_WIDTH;
            let len = LENGTH_OFFSETS
                .iter()
                .rposition(|start| offset >= *start)
                .map(|i| i + 1)
                .ok_or(DomainError::InvalidActionId(id))?;
            let suits = lehmer_decode(offset - LENGTH_OFFSETS[len - 1], len);
            Ok(Move::PlayCards(
                suits.into_iter().map(|s| Card::new(rank, s)).collect(),
            ))
        }
        _ => Err(DomainError::InvalidActionId(id)),
    }
}
