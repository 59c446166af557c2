//! In-memory self-play driver.
//!
//! Runs complete games with every seat choosing uniformly among its legal
//! actions. There is no strategy here; the point is to push the engine
//! through as many reachable states as possible.

use i151_engine::{DomainError, Game, GameConfig, MoveRecord, PlayerId};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, warn};

/// Per-round tallies.
#[derive(Debug, Clone, Default)]
pub struct RoundSummary {
    pub round_no: u32,
    pub dealer: PlayerId,
    pub moves: u32,
    pub ceiling_hit: bool,
    /// Score appended this round, `None` for players already out.
    pub scores: Vec<Option<i32>>,
    pub plays: u32,
    pub multi_card_plays: u32,
    pub draws: u32,
    pub double_draws: u32,
    pub asks: u32,
    pub passes: u32,
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub final_scores: Vec<i32>,
    /// Last player standing, if the game ran to completion.
    pub winner: Option<PlayerId>,
    pub rounds: Vec<RoundSummary>,
}

pub struct Simulator {
    game: Game,
    rng: StdRng,
    max_rounds: u32,
}

impl Simulator {
    /// `game_seed` drives dealing; choices use a separate stream from `policy_seed`.
    pub fn new(
        config: GameConfig,
        game_seed: u64,
        policy_seed: u64,
        max_rounds: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            game: Game::new(config, game_seed)?,
            rng: StdRng::seed_from_u64(policy_seed),
            max_rounds,
        })
    }

    pub fn simulate_game(mut self) -> Result<GameResult, DomainError> {
        let mut rounds = vec![self.play_round()?];
        while !self.game.is_finished() && (rounds.len() as u32) < self.max_rounds {
            self.game.next_round()?;
            rounds.push(self.play_round()?);
        }
        if !self.game.is_finished() {
            warn!(
                rounds = rounds.len(),
                "Round limit reached before a single player remained"
            );
        }

        let winner = if self.game.is_finished() {
            let limit = self.game.config().point_limit;
            self.game
                .round()
                .players()
                .iter()
                .find(|p| !p.is_out(limit))
                .map(|p| p.player_id)
        } else {
            None
        };

        Ok(GameResult {
            final_scores: self.game.scores(),
            winner,
            rounds,
        })
    }

    fn play_round(&mut self) -> Result<RoundSummary, DomainError> {
        while !self.game.is_over() {
            let legal = self.game.legal_actions();
            let Some(&action) = legal.choose(&mut self.rng) else {
                return Err(DomainError::invariant("live round offered no legal action"));
            };
            self.game.apply_action(action)?;
        }
        let summary = summarize(&self.game);
        debug!(
            round_no = summary.round_no,
            moves = summary.moves,
            scores = ?summary.scores,
            "Round simulated"
        );
        Ok(summary)
    }
}

fn summarize(game: &Game) -> RoundSummary {
    let round = game.round();
    let mut summary = RoundSummary {
        round_no: game.round_no(),
        dealer: round.dealer_id(),
        moves: round.counter(),
        ceiling_hit: round.counter() > round.config().move_ceiling,
        scores: round
            .players()
            .iter()
            .map(|p| {
                if round.is_active(p.player_id) {
                    p.points.last().copied()
                } else {
                    None
                }
            })
            .collect(),
        ..RoundSummary::default()
    };
    for record in round.move_sheet() {
        match record {
            MoveRecord::Deal { .. } => {}
            MoveRecord::Play { cards, .. } => {
                summary.plays += 1;
                if cards.len() > 1 {
                    summary.multi_card_plays += 1;
                }
            }
            MoveRecord::Draw { .. } => summary.draws += 1,
            MoveRecord::DoubleDraw { .. } => summary.double_draws += 1,
            MoveRecord::Ask { .. } => summary.asks += 1,
            MoveRecord::Pass { .. } => summary.passes += 1,
        }
    }
    summary
}
