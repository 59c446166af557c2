//! Game configuration handling.
//!
//! Provides a typed, serde-backed configuration for a game. Every field has
//! a default, so a partial JSON document only overrides what it names.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub use crate::domain::legal::CallPolicy;
use crate::domain::rules::{
    max_hand_size, DEFAULT_INITIAL_HAND_SIZE, DEFAULT_MOVE_CEILING, DEFAULT_POINT_LIMIT,
    DEFAULT_RANK_WEIGHTS, DEFAULT_SUCCESSIVE_ZERO_BONUS, MAX_PLAYERS, MIN_PLAYERS, RANKS,
};
use crate::errors::domain::DomainError;

/// Rules and limits for one game.
///
/// # Example JSON Config
///
/// Three players, strict calls, everything else default:
/// ```json
/// {
///   "num_players": 3,
///   "call_policy": "when_no_play"
/// }
/// ```
///
/// # Usage
///
/// ```rust,ignore
/// let config = GameConfig::from_json(r#"{"num_players": 3}"#)?;
/// let game = Game::new(config, 42)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seats at the table, `2..=4`.
    pub num_players: usize,

    /// Cards dealt to each active player. Clamped to what one deck allows
    /// (see [`GameConfig::effective_hand_size`]).
    pub initial_hand_size: usize,

    /// A player whose cumulative score reaches this is eliminated.
    pub point_limit: i32,

    /// Score given instead of zero for a third zero-weight hand in a row.
    ///
    /// - `Some(bonus)`: the rule applies (default `-10`)
    /// - `None`: zero-weight hands always score zero
    pub successive_zero_bonus: Option<i32>,

    /// Moves after which a round is ended even if no hand is empty.
    pub move_ceiling: u32,

    pub call_policy: CallPolicy,

    /// Card weights per rank, Two..=Ace.
    pub rank_weights: [i32; RANKS],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: MIN_PLAYERS,
            initial_hand_size: DEFAULT_INITIAL_HAND_SIZE,
            point_limit: DEFAULT_POINT_LIMIT,
            successive_zero_bonus: Some(DEFAULT_SUCCESSIVE_ZERO_BONUS),
            move_ceiling: DEFAULT_MOVE_CEILING,
            call_policy: CallPolicy::Always,
            rank_weights: DEFAULT_RANK_WEIGHTS,
        }
    }
}

impl GameConfig {
    pub fn with_players(num_players: usize) -> Self {
        Self {
            num_players,
            ..Self::default()
        }
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DomainError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`GameConfig::from_json`] for an already-parsed value.
    pub fn from_value(value: &JsonValue) -> Result<Self, DomainError> {
        let config: Self = serde_json::from_value(value.clone())
            .map_err(|e| DomainError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.num_players) {
            return Err(DomainError::config(format!(
                "num_players must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {}",
                self.num_players
            )));
        }
        if self.initial_hand_size == 0 {
            return Err(DomainError::config("initial_hand_size must be positive"));
        }
        if self.move_ceiling == 0 {
            return Err(DomainError::config("move_ceiling must be positive"));
        }
        if self.point_limit <= 0 {
            return Err(DomainError::config(format!(
                "point_limit must be positive, got {}",
                self.point_limit
            )));
        }
        Ok(())
    }

    /// Hand size actually dealt: never more than `⌊52 / num_players⌋`.
    pub fn effective_hand_size(&self) -> usize {
        self.initial_hand_size.min(max_hand_size(self.num_players))
    }
}
