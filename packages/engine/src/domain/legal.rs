//! Legal action generation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::encoding::{ask_action_id, play_action_id, ActionId, DRAW_ACTION, PASS_ACTION};

/// When a player may answer with a Draw/Pass call instead of playing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallPolicy {
    /// Draw/Pass is offered whenever the top card calls for it.
    #[default]
    Always,
    /// Draw/Pass is offered only when no card can be played.
    WhenNoPlay,
}

impl CallPolicy {
    /// Call to append after the plays, if any.
    pub fn call_for(self, ctx: &LegalContext<'_>, has_play: bool) -> Option<ActionId> {
        let top = ctx.top_card?;
        if top.is_wild_suit_request() && ctx.asked.is_none() {
            return None;
        }
        if self == CallPolicy::WhenNoPlay && has_play {
            return None;
        }
        Some(if ctx.took { PASS_ACTION } else { DRAW_ACTION })
    }
}

/// Everything the generator looks at.
#[derive(Debug, Clone, Copy)]
pub struct LegalContext<'a> {
    pub hand: &'a [Card],
    pub top_card: Option<Card>,
    pub asked: Option<Suit>,
    /// A draw has already been taken this turn.
    pub took: bool,
}

/// All legal action ids, deterministic for a given context.
///
/// Plays come first in enumeration order over the hand sorted by card id,
/// then the call (if any).
pub fn legal_actions(ctx: &LegalContext<'_>, policy: CallPolicy) -> Vec<ActionId> {
    let mut actions = enumerate_plays(ctx);
    if let Some(call) = policy.call_for(ctx, !actions.is_empty()) {
        actions.push(call);
    }
    actions
}

/// Card-play and ask ids without the call augmentation.
pub fn enumerate_plays(ctx: &LegalContext<'_>) -> Vec<ActionId> {
    let mut hand = ctx.hand.to_vec();
    hand.sort();
    let (eights, others): (Vec<Card>, Vec<Card>) =
        hand.iter().partition(|c| c.is_wild_suit_request());

    let mut out = Ordered::default();
    match ctx.top_card {
        None => {
            for card in &others {
                out.push(play_action_id(card.rank, &[card.suit]));
            }
            push_subsets(&mut out, &eights);
        }
        Some(top) if top.is_wild_suit_request() => match ctx.asked {
            None => {
                for suit in Suit::ALL {
                    out.push(ask_action_id(suit));
                }
            }
            Some(asked) => {
                for card in others.iter().filter(|c| c.suit == asked) {
                    out.push(play_action_id(card.rank, &[card.suit]));
                }
                push_subsets(&mut out, &eights);
            }
        },
        Some(top) => {
            if !top.is_wild_draw_stack() {
                for card in others.iter().filter(|c| c.suit == top.suit) {
                    out.push(play_action_id(card.rank, &[card.suit]));
                }
            }
            let same_rank: Vec<Card> = hand.iter().copied().filter(|c| c.rank == top.rank).collect();
            for size in 1..=same_rank.len() {
                for subset in combinations(&same_rank, size) {
                    for ordered in permutations(&subset) {
                        out.push(suit_list_id(&ordered));
                    }
                }
            }
            push_subsets(&mut out, &eights);
        }
    }
    out.into_vec()
}

/// Every non-empty subset of `cards`, by size ascending, each in id order.
fn push_subsets(out: &mut Ordered, cards: &[Card]) {
    for size in 1..=cards.len() {
        for subset in combinations(cards, size) {
            out.push(suit_list_id(&subset));
        }
    }
}

fn suit_list_id(cards: &[Card]) -> ActionId {
    let suits: Vec<Suit> = cards.iter().map(|c| c.suit).collect();
    play_action_id(cards[0].rank, &suits)
}

/// `k`-element subsets of `items` in lexicographic index order.
pub(crate) fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k == 0 || k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut idx: Vec<usize> = (0..k).collect();
    loop {
        out.push(idx.iter().map(|&i| items[i]).collect());
        // rightmost index that can still move
        let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
            return out;
        };
        idx[i] += 1;
        for j in i + 1..k {
            idx[j] = idx[j - 1] + 1;
        }
    }
}

/// All orderings of `items` in lexicographic index order.
pub(crate) fn permutations<T: Copy>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for (i, &head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

/// Insertion-ordered id set.
#[derive(Default)]
struct Ordered {
    seen: BTreeSet<ActionId>,
    ids: Vec<ActionId>,
}

impl Ordered {
    fn push(&mut self, id: ActionId) {
        if self.seen.insert(id) {
            self.ids.push(id);
        }
    }

    fn into_vec(self) -> Vec<ActionId> {
        self.ids
    }
}
