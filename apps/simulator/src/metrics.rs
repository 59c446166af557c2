//! Metrics collection and output for simulation results.

use i151_engine::{GameConfig, PlayerId};
use serde::Serialize;

use crate::simulator::{GameResult, RoundSummary};

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<i32>,
    pub winner: Option<PlayerId>,
    pub rounds_played: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub dealer: PlayerId,
    pub moves: u32,
    pub ceiling_hit: bool,
    pub scores: Vec<Option<i32>>,
    pub plays: u32,
    pub multi_card_plays: u32,
    pub draws: u32,
    pub double_draws: u32,
    pub asks: u32,
    pub passes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: PlayerId,
    pub total_score: i32,
    /// Rounds in which this seat scored zero or less.
    pub rounds_won: u32,
    pub rounds_played: u32,
    pub avg_round_score: f64,
}

pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    config: &GameConfig,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let rounds: Vec<RoundMetrics> = result.rounds.iter().map(build_round_metrics).collect();

    let player_metrics = result
        .final_scores
        .iter()
        .enumerate()
        .map(|(seat, &total)| build_player_metrics(seat as PlayerId, total, &result.rounds))
        .collect();

    GameMetrics {
        game_id,
        seed,
        timestamp,
        config: config.clone(),
        result: GameResultMetrics {
            final_scores: result.final_scores.clone(),
            winner: result.winner,
            rounds_played: result.rounds.len(),
            duration_ms,
        },
        rounds,
        player_metrics,
    }
}

fn build_round_metrics(round: &RoundSummary) -> RoundMetrics {
    RoundMetrics {
        round_no: round.round_no,
        dealer: round.dealer,
        moves: round.moves,
        ceiling_hit: round.ceiling_hit,
        scores: round.scores.clone(),
        plays: round.plays,
        multi_card_plays: round.multi_card_plays,
        draws: round.draws,
        double_draws: round.double_draws,
        asks: round.asks,
        passes: round.passes,
    }
}

fn build_player_metrics(seat: PlayerId, total_score: i32, rounds: &[RoundSummary]) -> PlayerMetrics {
    let scored: Vec<i32> = rounds
        .iter()
        .filter_map(|r| r.scores.get(seat as usize).copied().flatten())
        .collect();
    let rounds_played = scored.len() as u32;
    let avg_round_score = if scored.is_empty() {
        0.0
    } else {
        scored.iter().map(|&s| f64::from(s)).sum::<f64>() / scored.len() as f64
    };
    PlayerMetrics {
        seat,
        total_score,
        rounds_won: scored.iter().filter(|&&s| s <= 0).count() as u32,
        rounds_played,
        avg_round_score,
    }
}

/// Flat CSV row; seats beyond the table size are left empty.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub num_players: usize,
    pub winner: Option<PlayerId>,
    pub rounds_played: usize,
    pub total_moves: u32,
    pub seat0_score: Option<i32>,
    pub seat1_score: Option<i32>,
    pub seat2_score: Option<i32>,
    pub seat3_score: Option<i32>,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let score = |seat: usize| metrics.result.final_scores.get(seat).copied();
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            num_players: metrics.config.num_players,
            winner: metrics.result.winner,
            rounds_played: metrics.result.rounds_played,
            total_moves: metrics.rounds.iter().map(|r| r.moves).sum(),
            seat0_score: score(0),
            seat1_score: score(1),
            seat2_score: score(2),
            seat3_score: score(3),
        }
    }
}
