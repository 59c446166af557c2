//! Random self-play helpers.

use std::collections::HashSet;

use i151_engine::domain::rules::DECK_SIZE;
use i151_engine::{Game, PlayerId};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Every card sits in exactly one pile.
pub fn assert_partition(game: &Game) {
    let piles = game.round().piles();
    assert_eq!(piles.total_cards(), DECK_SIZE);
    let ids: HashSet<u8> = piles.all_cards().map(|c| c.id()).collect();
    assert_eq!(ids.len(), DECK_SIZE, "a card is duplicated or missing");
}

/// Plays the current round to its end with uniformly random legal actions.
///
/// Returns the sequence of players who acted.
pub fn play_round(game: &mut Game, rng: &mut StdRng) -> Vec<PlayerId> {
    let ceiling = game.config().move_ceiling;
    let mut actors = Vec::new();
    while !game.is_over() {
        let legal = game.legal_actions();
        let action = *legal
            .choose(rng)
            .expect("a live round always offers a legal action");
        actors.push(game.current_player_id());
        game.apply_action(action)
            .unwrap_or_else(|e| panic!("legal action {action} rejected: {e}"));
        assert_partition(game);
        assert!(actors.len() as u32 <= ceiling + 1, "round did not terminate");
    }
    actors
}

/// Plays rounds until at most one player is left or `max_rounds` is reached.
///
/// Returns the per-round actor sequences.
pub fn play_game(game: &mut Game, rng: &mut StdRng, max_rounds: usize) -> Vec<Vec<PlayerId>> {
    let mut rounds = vec![play_round(game, rng)];
    while !game.is_finished() && rounds.len() < max_rounds {
        game.next_round().expect("next round after a finished one");
        rounds.push(play_round(game, rng));
    }
    rounds
}
