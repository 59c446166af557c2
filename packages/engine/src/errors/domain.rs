//! Domain-level error type used across the engine.
//!
//! Every fallible engine operation returns `Result<T, DomainError>`. The
//! variants fall into three groups:
//!
//! - precondition violations (bad ids, acting on a finished round, invalid
//!   configuration): the caller has a bug, nothing is retried;
//! - [`DomainError::IllegalAction`]: a well-formed action that is not legal
//!   right now; the caller should have consulted the legal action set;
//! - [`DomainError::Invariant`]: a rule interaction the engine believed
//!   unreachable.
//!
//! Use [`DomainError::is_fatal`] to tell the recoverable case apart.

use thiserror::Error;

use crate::domain::encoding::ActionId;
use crate::domain::state::PlayerId;

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("card id {0} is outside the deck")]
    InvalidCardId(u8),
    #[error("suit index {0} is out of range")]
    InvalidSuit(u8),
    #[error("rank index {0} is out of range")]
    InvalidRank(u8),
    #[error("action id {0} does not belong to any action band")]
    InvalidActionId(ActionId),
    #[error("move cannot be encoded: {0}")]
    Unencodable(String),
    #[error("action {action} is not legal for player {player}")]
    IllegalAction { action: ActionId, player: PlayerId },
    #[error("round is already over")]
    RoundOver,
    #[error("round is still in progress")]
    RoundInProgress,
    #[error("game is finished: at most one player remains active")]
    GameFinished,
    #[error("player {0} is not seated in this game")]
    InvalidPlayer(PlayerId),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn unencodable(detail: impl Into<String>) -> Self {
        Self::Unencodable(detail.into())
    }

    /// True for everything except a rejected-but-well-formed action or an
    /// unparsable card token.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            DomainError::IllegalAction { .. } | DomainError::ParseCard(_)
        )
    }
}
