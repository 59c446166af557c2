use crate::domain::encoding::{ASK_ACTION_START, DRAW_ACTION, PASS_ACTION};
use crate::domain::legal::{legal_actions, CallPolicy, LegalContext};
use crate::domain::test_state_helpers::{cards, play_id};
use crate::domain::Suit;

fn ctx<'a>(hand: &'a [crate::domain::Card], top: Option<&str>) -> LegalContext<'a> {
    LegalContext {
        hand,
        top_card: top.map(|t| t.parse().unwrap()),
        asked: None,
        took: false,
    }
}

#[test]
fn opening_move_plays_singles_and_eight_subsets() {
    let hand = cards(&["KD", "8S", "2C", "8H"]);
    let actions = legal_actions(&ctx(&hand, None), CallPolicy::Always);
    assert_eq!(
        actions,
        vec![
            play_id(&["2C"]),
            play_id(&["KD"]),
            play_id(&["8H"]),
            play_id(&["8S"]),
            play_id(&["8H", "8S"]),
        ]
    );
    assert_eq!(actions, vec![0, 705, 386, 387, 396]);
}

#[test]
fn opening_move_with_eight_cards_and_no_eights() {
    let hand = cards(&["2C", "3D", "4H", "5S", "9C", "TD", "JH", "KS"]);
    let actions = legal_actions(&ctx(&hand, None), CallPolicy::Always);
    assert_eq!(actions.len(), 8);
    assert!(!actions.contains(&DRAW_ACTION));
}

#[test]
fn unanswered_eight_only_allows_suit_requests() {
    let hand = cards(&["8D", "2C", "9C", "AS"]);
    let top = ctx(&hand, Some("8C"));
    let expected: Vec<_> = (ASK_ACTION_START..ASK_ACTION_START + 4).collect();
    assert_eq!(legal_actions(&top, CallPolicy::Always), expected);
    assert_eq!(legal_actions(&top, CallPolicy::WhenNoPlay), expected);

    let empty: Vec<crate::domain::Card> = Vec::new();
    assert_eq!(
        legal_actions(&ctx(&empty, Some("8C")), CallPolicy::Always),
        expected
    );
}

#[test]
fn answered_eight_follows_requested_suit() {
    let hand = cards(&["2H", "5S", "8D", "KH"]);
    let mut c = ctx(&hand, Some("8C"));
    c.asked = Some(Suit::Hearts);
    assert_eq!(
        legal_actions(&c, CallPolicy::Always),
        vec![play_id(&["2H"]), play_id(&["KH"]), play_id(&["8D"]), DRAW_ACTION]
    );
}

#[test]
fn ordinary_top_matches_suit_rank_permutations_and_eights() {
    let hand = cards(&["KD", "7H", "3S", "8D", "7C"]);
    let actions = legal_actions(&ctx(&hand, Some("7S")), CallPolicy::Always);
    assert_eq!(
        actions,
        vec![
            play_id(&["3S"]),
            play_id(&["7C"]),
            play_id(&["7H"]),
            play_id(&["7C", "7H"]),
            play_id(&["7H", "7C"]),
            play_id(&["8D"]),
            DRAW_ACTION,
        ]
    );
    assert_eq!(actions, vec![67, 320, 322, 325, 330, 385, 832]);
}

#[test]
fn three_of_a_rank_yields_every_ordering() {
    let hand = cards(&["5C", "5D", "5H"]);
    let actions = legal_actions(&ctx(&hand, Some("5S")), CallPolicy::Always);
    // 3 singles + 6 ordered pairs + 6 ordered triples + draw
    assert_eq!(actions.len(), 3 + 6 + 6 + 1);
    assert!(actions.contains(&play_id(&["5H", "5C", "5D"])));
    assert!(actions.contains(&play_id(&["5D", "5H", "5C"])));
}

#[test]
fn stacked_ace_suppresses_suit_matches() {
    let hand = cards(&["2S", "AH", "8C", "KS"]);
    assert_eq!(
        legal_actions(&ctx(&hand, Some("AS")), CallPolicy::Always),
        vec![play_id(&["AH"]), play_id(&["8C"]), DRAW_ACTION]
    );
}

#[test]
fn took_turns_draw_into_pass() {
    let hand = cards(&["2C"]);
    let mut c = ctx(&hand, Some("9H"));
    c.took = true;
    assert_eq!(legal_actions(&c, CallPolicy::Always), vec![PASS_ACTION]);
}

#[test]
fn strict_policy_only_calls_without_a_play() {
    let no_play = cards(&["2C"]);
    assert_eq!(
        legal_actions(&ctx(&no_play, Some("9H")), CallPolicy::WhenNoPlay),
        vec![DRAW_ACTION]
    );
    let with_play = cards(&["2C", "3H"]);
    assert_eq!(
        legal_actions(&ctx(&with_play, Some("9H")), CallPolicy::WhenNoPlay),
        vec![play_id(&["3H"])]
    );
    assert_eq!(
        legal_actions(&ctx(&with_play, Some("9H")), CallPolicy::Always),
        vec![play_id(&["3H"]), DRAW_ACTION]
    );
}

#[test]
fn output_is_deterministic_regardless_of_hand_order() {
    let a = cards(&["7C", "KD", "8D", "7H", "3S"]);
    let b = cards(&["3S", "7H", "8D", "KD", "7C"]);
    assert_eq!(
        legal_actions(&ctx(&a, Some("7S")), CallPolicy::Always),
        legal_actions(&ctx(&b, Some("7S")), CallPolicy::Always)
    );
}
