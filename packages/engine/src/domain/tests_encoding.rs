use std::collections::HashSet;

use crate::domain::encoding::{
    decode, encode, ActionId, ACTION_SPACE_SIZE, ASK_ACTION_START, DRAW_ACTION, PASS_ACTION,
    PLAY_ACTIONS,
};
use crate::domain::legal::{combinations, permutations};
use crate::domain::{Card, Move, Rank, Suit};
use crate::errors::domain::DomainError;

#[test]
fn every_id_decodes_and_reencodes_to_itself() {
    for id in 0..ACTION_SPACE_SIZE {
        let mv = decode(id).unwrap_or_else(|e| panic!("id {id} failed to decode: {e}"));
        assert_eq!(encode(&mv).unwrap(), id, "id {id} decoded to {mv}");
    }
}

#[test]
fn every_ordered_same_rank_play_has_a_unique_id() {
    let mut seen = HashSet::new();
    for rank in Rank::ALL {
        for size in 1..=4 {
            for subset in combinations(&Suit::ALL, size) {
                for ordered in permutations(&subset) {
                    let cards: Vec<Card> = ordered.iter().map(|s| Card::new(rank, *s)).collect();
                    let id = encode(&Move::PlayCards(cards)).unwrap();
                    assert!(id < PLAY_ACTIONS);
                    assert!(seen.insert(id), "duplicate id {id}");
                }
            }
        }
    }
    // 13 ranks x (4 + 12 + 24 + 24) ordered suit lists fill the play band
    assert_eq!(seen.len(), PLAY_ACTIONS as usize);
}

#[test]
fn calls_occupy_their_own_ids() {
    assert_eq!(encode(&Move::Draw).unwrap(), DRAW_ACTION);
    assert_eq!(encode(&Move::Pass).unwrap(), PASS_ACTION);
    let asks: Vec<ActionId> = Suit::ALL
        .into_iter()
        .map(|s| encode(&Move::AskSuit(s)).unwrap())
        .collect();
    assert_eq!(asks, vec![ASK_ACTION_START, 835, 836, 837]);
}

#[test]
fn decoded_plays_share_a_rank_and_never_repeat_a_suit() {
    for id in 0..PLAY_ACTIONS {
        let Move::PlayCards(cards) = decode(id).unwrap() else {
            panic!("id {id} should decode to a play");
        };
        assert!(!cards.is_empty() && cards.len() <= 4);
        assert!(cards.iter().all(|c| c.rank == cards[0].rank));
        let suits: HashSet<Suit> = cards.iter().map(|c| c.suit).collect();
        assert_eq!(suits.len(), cards.len());
    }
}

#[test]
fn four_card_play_ids() {
    // all four queens in suit order sit at the start of the length-4 sub-band
    let queens: Vec<Card> = Suit::ALL.iter().map(|s| Card::new(Rank::Queen, *s)).collect();
    assert_eq!(
        encode(&Move::PlayCards(queens.clone())).unwrap(),
        10 * 64 + 40
    );
    let reversed: Vec<Card> = queens.into_iter().rev().collect();
    assert_eq!(
        encode(&Move::PlayCards(reversed)).unwrap(),
        10 * 64 + 63
    );
}

#[test]
fn out_of_space_ids_are_fatal() {
    for id in [ACTION_SPACE_SIZE, 1000, ActionId::MAX] {
        let err = decode(id).unwrap_err();
        assert_eq!(err, DomainError::InvalidActionId(id));
        assert!(err.is_fatal());
    }
}
