use serde::{Deserialize, Serialize};

use crate::domain::rules::MAX_PLAYERS;

pub type PlayerId = u8; // 0..num_players

/// Seated player. Hands live in [`Piles`](crate::domain::piles::Piles);
/// a player only carries identity and score history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    /// Per-hand scores, append-only.
    pub points: Vec<i32>,
}

impl Player {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            points: Vec::new(),
        }
    }

    /// Cumulative score.
    pub fn point(&self) -> i32 {
        self.points.iter().sum()
    }

    /// Eliminated once the cumulative score reaches `limit`.
    pub fn is_out(&self, limit: i32) -> bool {
        self.point() >= limit
    }
}

/// Fresh players `0..num_players`.
pub fn seat_players(num_players: usize) -> Vec<Player> {
    (0..num_players.min(MAX_PLAYERS))
        .map(|id| Player::new(id as PlayerId))
        .collect()
}

/// Next seat after `from` (cyclic over all seats) whose `active` flag is set.
///
/// Returns `None` when fewer than two seats are active.
pub fn next_active(from: PlayerId, active: &[bool]) -> Option<PlayerId> {
    let n = active.len();
    if active.iter().filter(|a| **a).count() <= 1 {
        return None;
    }
    (1..=n)
        .map(|step| (from as usize + step) % n)
        .find(|&seat| active[seat])
        .map(|seat| seat as PlayerId)
}
