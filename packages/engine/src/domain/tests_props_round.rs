/// Property-based tests for whole rounds driven by random legal actions
use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::config::{CallPolicy, GameConfig};
use crate::domain::rules::DECK_SIZE;
use crate::domain::{test_gens, test_prelude, Game, MoveRecord};

fn assert_partition(game: &Game) -> Result<(), TestCaseError> {
    let piles = game.round().piles();
    prop_assert_eq!(piles.total_cards(), DECK_SIZE);
    let ids: HashSet<u8> = piles.all_cards().map(|c| c.id()).collect();
    prop_assert_eq!(ids.len(), DECK_SIZE, "a card is duplicated or missing");
    Ok(())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: random legal play keeps the deck partitioned, never hits an
    /// illegal action, and terminates within the move ceiling.
    #[test]
    fn prop_random_round_is_sound(
        seed in test_gens::seed(),
        num_players in test_gens::num_players(),
        hand_size in 1usize..=13,
        strict in any::<bool>(),
    ) {
        let config = GameConfig {
            num_players,
            initial_hand_size: hand_size,
            call_policy: if strict { CallPolicy::WhenNoPlay } else { CallPolicy::Always },
            ..GameConfig::default()
        };
        let ceiling = config.move_ceiling;
        let mut game = Game::new(config, seed).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        assert_partition(&game)?;

        let mut steps = 0u32;
        while !game.is_over() {
            let legal = game.legal_actions();
            prop_assert!(!legal.is_empty(), "live round without legal actions");
            let action = *legal.choose(&mut rng).unwrap();
            let player = game.current_player_id();
            let result = game.apply_action(action);
            prop_assert!(result.is_ok(), "player {} action {} failed: {:?}", player, action, result);
            assert_partition(&game)?;
            steps += 1;
            prop_assert!(steps <= ceiling + 1, "round did not terminate");
        }

        let round = game.round();
        prop_assert!(round.is_scored());
        prop_assert!(matches!(round.move_sheet()[0], MoveRecord::Deal { .. }), "first move-sheet record must be Deal");
        prop_assert_eq!(round.move_sheet().len() as u32, steps + 1);
        for player in round.players() {
            prop_assert_eq!(player.points.len(), 1);
        }
    }

    /// Property: the same seed and the same choices replay identically.
    #[test]
    fn prop_games_are_deterministic(seed in test_gens::seed(), num_players in test_gens::num_players()) {
        let play = |seed: u64| {
            let mut game = Game::new(GameConfig::with_players(num_players), seed).unwrap();
            let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
            while !game.is_over() {
                let action = *game.legal_actions().choose(&mut rng).unwrap();
                game.apply_action(action).unwrap();
            }
            (game.round().move_sheet().to_vec(), game.scores())
        };
        prop_assert_eq!(play(seed), play(seed));
    }
}
