//! End-of-hand scoring: residual hand weight with the successive-zero rule.

use crate::domain::cards_types::Card;
use crate::domain::rules::RANKS;

/// Weight of a single card under `rank_weights` (indexed Two..=Ace).
#[inline]
pub fn card_weight(card: Card, rank_weights: &[i32; RANKS]) -> i32 {
    rank_weights[card.rank.index() as usize]
}

/// Sum of card weights in `hand`.
pub fn hand_weight(hand: &[Card], rank_weights: &[i32; RANKS]) -> i32 {
    hand.iter().map(|c| card_weight(*c, rank_weights)).sum()
}

/// Score appended for a hand of residual weight `weight`.
///
/// A zero weight becomes `successive_zero_bonus` when the previous two hands
/// were also scored zero.
pub fn hand_score(previous: &[i32], weight: i32, successive_zero_bonus: Option<i32>) -> i32 {
    let Some(bonus) = successive_zero_bonus else {
        return weight;
    };
    let last_two_zero = previous.len() >= 2
        && previous[previous.len() - 2..]
            .iter()
            .map(|p| p.abs())
            .sum::<i32>()
            == 0;
    if last_two_zero && weight == 0 {
        bonus
    } else {
        weight
    }
}
