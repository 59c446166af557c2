//! Public snapshot API for observing round state without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::encoding::ActionId;
use crate::domain::round::{Round, RoundPhase};
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

/// Full state including every hand. For debugging and spectators only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerfectInformation {
    pub move_count: usize,
    pub current_player_id: PlayerId,
    pub round_phase: RoundPhase,
    pub took: bool,
    pub take_two: bool,
    pub asked: Option<Suit>,
    pub hands: Vec<Vec<Card>>,
    pub table: Vec<Card>,
    pub stock_len: usize,
}

/// What a single player is allowed to see.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player_id: PlayerId,
    pub current_player: PlayerId,
    pub hand: Vec<Card>,
    pub table: Vec<Card>,
    pub top_card: Option<Card>,
    pub asked: Option<Suit>,
    pub took: bool,
    pub take_two: bool,
    pub num_players: usize,
    /// Card count per seat, indexed by player id.
    pub hand_sizes: Vec<usize>,
    /// Only filled in for the player whose turn it is.
    pub legal_actions: Vec<ActionId>,
}

pub fn perfect_information(round: &Round) -> PerfectInformation {
    let piles = round.piles();
    PerfectInformation {
        move_count: round.move_sheet().len(),
        current_player_id: round.current_player_id(),
        round_phase: round.round_phase(),
        took: round.took(),
        take_two: round.take_two(),
        asked: round.asked(),
        hands: piles.hands().to_vec(),
        table: piles.table().to_vec(),
        stock_len: piles.stock().len(),
    }
}

pub fn player_state(round: &Round, observer: PlayerId) -> Result<PlayerState, DomainError> {
    let piles = round.piles();
    let hand = piles.hand(observer)?.to_vec();
    let current = round.current_player_id();
    let legal_actions = if observer == current {
        round.legal_actions()
    } else {
        Vec::new()
    };
    Ok(PlayerState {
        player_id: observer,
        current_player: current,
        hand,
        table: piles.table().to_vec(),
        top_card: piles.top_card(),
        asked: round.asked(),
        took: round.took(),
        take_two: round.take_two(),
        num_players: piles.hands().len(),
        hand_sizes: piles.hands().iter().map(Vec::len).collect(),
        legal_actions,
    })
}
