/// Property-based tests for the legal action generator
use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::encoding::{decode, ACTION_SPACE_SIZE, ASK_ACTION_START, DRAW_ACTION, PASS_ACTION};
use crate::domain::legal::{enumerate_plays, legal_actions, CallPolicy, LegalContext};
use crate::domain::{test_gens, test_prelude, Card, Move};

fn context(hand: &[Card], top: Option<Card>, asked: Option<crate::domain::Suit>, took: bool) -> LegalContext<'_> {
    LegalContext {
        hand,
        top_card: top,
        asked,
        took,
    }
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: ids are in range, unique, and every play only uses cards in hand.
    #[test]
    fn prop_actions_are_well_formed(
        (hand, top) in test_gens::hand_and_top(),
        asked in proptest::option::of(test_gens::suit()),
        took in any::<bool>(),
    ) {
        let ctx = context(&hand, top, asked, took);
        let actions = legal_actions(&ctx, CallPolicy::Always);
        let unique: HashSet<_> = actions.iter().copied().collect();
        prop_assert_eq!(unique.len(), actions.len(), "duplicate ids in {:?}", actions);

        for id in &actions {
            prop_assert!(*id < ACTION_SPACE_SIZE);
            let mv = decode(*id).unwrap();
            prop_assert_eq!(mv.action_id().unwrap(), *id);
            if let Move::PlayCards(cards) = mv {
                for card in &cards {
                    prop_assert!(hand.contains(card), "{} not in hand", card);
                }
            }
        }
    }

    /// Property: with no top card, one id per non-eight plus one per non-empty
    /// subset of eights, and no call.
    #[test]
    fn prop_opening_count(hand in test_gens::unique_cards_up_to(13)) {
        let ctx = context(&hand, None, None, false);
        let eights = hand.iter().filter(|c| c.is_wild_suit_request()).count();
        let others = hand.len() - eights;
        let actions = legal_actions(&ctx, CallPolicy::Always);
        prop_assert_eq!(actions.len(), others + (1usize << eights) - 1);
        prop_assert!(!actions.contains(&DRAW_ACTION) && !actions.contains(&PASS_ACTION));
    }

    /// Property: an unanswered eight allows exactly the four suit requests.
    #[test]
    fn prop_unanswered_eight(
        hand in test_gens::unique_cards_up_to(13),
        suit in test_gens::suit(),
        took in any::<bool>(),
    ) {
        let top = Card::new(crate::domain::Rank::Eight, suit);
        let hand: Vec<Card> = hand.into_iter().filter(|c| *c != top).collect();
        let ctx = context(&hand, Some(top), None, took);
        let expected: Vec<_> = (ASK_ACTION_START..ACTION_SPACE_SIZE).collect();
        prop_assert_eq!(legal_actions(&ctx, CallPolicy::Always), expected.clone());
        prop_assert_eq!(legal_actions(&ctx, CallPolicy::WhenNoPlay), expected);
    }

    /// Property: every single-card play matches the top card by suit or rank,
    /// the requested suit, or is an eight.
    #[test]
    fn prop_plays_follow_the_top_card(
        (hand, top) in test_gens::hand_matching_top(),
    ) {
        let ctx = context(&hand, Some(top), None, false);
        for id in enumerate_plays(&ctx) {
            let Move::PlayCards(cards) = decode(id).unwrap() else { continue };
            let first = cards[0];
            let ok = first.is_wild_suit_request()
                || first.rank == top.rank
                || (first.suit == top.suit && !top.is_wild_draw_stack());
            prop_assert!(ok, "{} does not follow {}", first, top);
            if cards.len() > 1 {
                prop_assert!(
                    first.is_wild_suit_request() || first.rank == top.rank,
                    "multi-card play must be eights or match the top rank"
                );
            }
        }
    }

    /// Property: same-rank matches appear in every ordering.
    #[test]
    fn prop_same_rank_permutations_complete(
        (hand, top) in test_gens::hand_matching_top(),
    ) {
        prop_assume!(!top.is_wild_suit_request());
        let ctx = context(&hand, Some(top), None, false);
        let same = hand.iter().filter(|c| c.rank == top.rank).count();
        let expected: usize = (1..=same)
            .map(|k| (same - k + 1..=same).product::<usize>())
            .sum();
        let rank_plays = enumerate_plays(&ctx)
            .into_iter()
            .filter(|id| matches!(decode(*id).unwrap(), Move::PlayCards(c) if c[0].rank == top.rank))
            .count();
        prop_assert_eq!(rank_plays, expected);
    }

    /// Property: the strict policy differs from the default only by the call,
    /// and only when a play exists.
    #[test]
    fn prop_strict_policy_is_a_restriction(
        (hand, top) in test_gens::hand_and_top(),
        took in any::<bool>(),
    ) {
        let ctx = context(&hand, top, None, took);
        let always = legal_actions(&ctx, CallPolicy::Always);
        let strict = legal_actions(&ctx, CallPolicy::WhenNoPlay);
        let plays = enumerate_plays(&ctx);
        prop_assert!(strict.iter().all(|id| always.contains(id)));
        if plays.is_empty() {
            prop_assert_eq!(strict, always);
        } else {
            prop_assert_eq!(strict, plays);
        }
    }
}
