//! A game: consecutive rounds over the same seats until one player is left.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::domain::deck::shuffled_deck;
use crate::domain::encoding::{self, ActionId, ACTION_SPACE_SIZE};
use crate::domain::moves::Move;
use crate::domain::round::Round;
use crate::domain::seed_derivation::{derive_dealer_seed, derive_dealing_seed};
use crate::domain::snapshot::{perfect_information, player_state, PerfectInformation, PlayerState};
use crate::domain::state::{seat_players, Player, PlayerId};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    round_no: u32,
    round: Round,
}

impl Game {
    /// Seats fresh players and deals round 0.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, DomainError> {
        config.validate()?;
        let players = seat_players(config.num_players);
        let round = start_round(&config, seed, 0, players)?;
        Ok(Self {
            config,
            seed,
            round_no: 0,
            round,
        })
    }

    /// View of the player to act, and their id.
    pub fn init(&self) -> Result<(PlayerState, PlayerId), DomainError> {
        let current = self.round.current_player_id();
        Ok((self.state_snapshot(current)?, current))
    }

    /// Applies `action` and returns the view of the next player to act.
    pub fn apply_action(&mut self, action: ActionId) -> Result<(PlayerState, PlayerId), DomainError> {
        self.round.apply_action(action)?;
        let next = self.round.current_player_id();
        Ok((self.state_snapshot(next)?, next))
    }

    pub fn step(&mut self, mv: &Move) -> Result<(PlayerState, PlayerId), DomainError> {
        let action = encoding::encode(mv)?;
        self.apply_action(action)
    }

    pub fn legal_actions(&self) -> Vec<ActionId> {
        self.round.legal_actions()
    }

    pub fn legal_moves(&self) -> Result<Vec<Move>, DomainError> {
        self.legal_actions()
            .into_iter()
            .map(encoding::decode)
            .collect()
    }

    /// The current round is over.
    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    /// At most one player is still below the point limit.
    pub fn is_finished(&self) -> bool {
        self.round
            .players()
            .iter()
            .filter(|p| !p.is_out(self.config.point_limit))
            .count()
            <= 1
    }

    /// Deals the next round, carrying cumulative scores forward.
    pub fn next_round(&mut self) -> Result<(PlayerState, PlayerId), DomainError> {
        if !self.round.is_over() {
            return Err(DomainError::RoundInProgress);
        }
        if self.is_finished() {
            return Err(DomainError::GameFinished);
        }
        let players = self.round.players().to_vec();
        let round_no = self.round_no + 1;
        self.round = start_round(&self.config, self.seed, round_no, players)?;
        self.round_no = round_no;
        self.init()
    }

    pub fn perfect_information(&self) -> PerfectInformation {
        perfect_information(&self.round)
    }

    pub fn state_snapshot(&self, observer: PlayerId) -> Result<PlayerState, DomainError> {
        player_state(&self.round, observer)
    }

    pub fn payoffs(&self) -> Vec<i32> {
        self.round.payoffs()
    }

    pub fn binary_payoffs(&self) -> Vec<i32> {
        self.round.binary_payoffs()
    }

    /// Cumulative score per seat.
    pub fn scores(&self) -> Vec<i32> {
        self.round.players().iter().map(Player::point).collect()
    }

    pub const fn num_actions() -> usize {
        ACTION_SPACE_SIZE as usize
    }

    pub fn num_players(&self) -> usize {
        self.config.num_players
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.round.current_player_id()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

/// Starts a single-round game with default rules otherwise.
pub fn init_round(
    num_players: usize,
    initial_hand_size: usize,
    point_limit: i32,
    seed: u64,
) -> Result<(Game, PlayerState, PlayerId), DomainError> {
    let config = GameConfig {
        num_players,
        initial_hand_size,
        point_limit,
        ..GameConfig::default()
    };
    let game = Game::new(config, seed)?;
    let (state, current) = game.init()?;
    Ok((game, state, current))
}

fn start_round(
    config: &GameConfig,
    seed: u64,
    round_no: u32,
    players: Vec<Player>,
) -> Result<Round, DomainError> {
    let active: Vec<PlayerId> = players
        .iter()
        .filter(|p| !p.is_out(config.point_limit))
        .map(|p| p.player_id)
        .collect();
    let mut rng = ChaCha20Rng::seed_from_u64(derive_dealer_seed(seed, round_no));
    let dealer = *active.choose(&mut rng).ok_or(DomainError::GameFinished)?;
    debug!(round_no, dealer, active = active.len(), "Dealing round");
    Round::new(
        config,
        players,
        dealer,
        shuffled_deck(derive_dealing_seed(seed, round_no)),
    )
}
