//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Every round of a game gets its own dealing and dealer-selection seed,
//! derived from the single game seed so a whole game replays exactly.

/// Derive a seed for shuffling the deck of a round.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed of the game
/// * `round_no` - Zero-based round number within the game
pub fn derive_dealing_seed(game_seed: u64, round_no: u32) -> u64 {
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from dealer seed
}

/// Derive a seed for choosing the first actor of a round.
pub fn derive_dealer_seed(game_seed: u64, round_no: u32) -> u64 {
    // Different multiplier from dealing to keep the two streams apart
    game_seed
        .wrapping_add((round_no as u64).wrapping_mul(10_000))
        .wrapping_add(1)
}
