#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for the I151 shedding card game: round state machine,
//! legal-move generation and the move/action-id bijection.

pub mod config;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use config::GameConfig;
pub use domain::{
    decode, encode, init_round, ActionId, Card, CallPolicy, Game, Move, MoveRecord,
    PerfectInformation, PlayerId, PlayerState, Rank, Round, RoundPhase, Suit, ACTION_SPACE_SIZE,
};
pub use errors::DomainError;
