//! Round state machine: one hand from the deal to end-of-hand scoring.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::domain::cards_types::{Card, Suit};
use crate::domain::encoding::{self, ActionId};
use crate::domain::legal::{self, LegalContext};
use crate::domain::moves::{Move, MoveRecord};
use crate::domain::piles::Piles;
use crate::domain::rules::{HAND_EXIT_RECLAIM_TABLE_LEN, STACKED_DRAW_COUNT};
use crate::domain::scoring::{hand_score, hand_weight};
use crate::domain::state::{next_active, Player, PlayerId};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    PlayCard,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Round {
    pub(crate) config: GameConfig,
    /// First player to act.
    pub(crate) dealer_id: PlayerId,
    pub(crate) current_player_id: PlayerId,
    pub(crate) players: Vec<Player>,
    /// Seats still below the point limit when the round started.
    pub(crate) active: Vec<bool>,
    pub(crate) piles: Piles,
    /// A draw has been taken this turn and may be closed out with Pass.
    pub(crate) took: bool,
    /// The top card is a stacked wild-draw card the current player must answer.
    pub(crate) take_two: bool,
    /// Suit demanded after a wild-suit-request card.
    pub(crate) asked: Option<Suit>,
    /// Set once end-of-hand scoring has run.
    pub(crate) game_over: bool,
    pub(crate) counter: u32,
    pub(crate) move_sheet: Vec<MoveRecord>,
}

impl Round {
    /// Deals a fresh round from `shuffled`.
    ///
    /// `players` carry their score history; eliminated players are seated but
    /// dealt nothing and never act. `dealer_id` must be active.
    pub fn new(
        config: &GameConfig,
        players: Vec<Player>,
        dealer_id: PlayerId,
        shuffled: Vec<Card>,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        if players.len() != config.num_players {
            return Err(DomainError::config(format!(
                "expected {} players, got {}",
                config.num_players,
                players.len()
            )));
        }
        let active: Vec<bool> = players
            .iter()
            .map(|p| !p.is_out(config.point_limit))
            .collect();
        if active.iter().filter(|a| **a).count() < 2 {
            return Err(DomainError::GameFinished);
        }
        match active.get(dealer_id as usize) {
            Some(true) => {}
            _ => return Err(DomainError::InvalidPlayer(dealer_id)),
        }

        let hand_size = config.effective_hand_size();
        let mut piles = Piles::new(shuffled.clone(), players.len());
        for (seat, is_active) in active.iter().enumerate() {
            if *is_active {
                piles.deal(seat as PlayerId, hand_size)?;
            }
        }

        info!(
            dealer = dealer_id,
            num_players = players.len(),
            hand_size,
            "Round started"
        );

        Ok(Self {
            config: config.clone(),
            dealer_id,
            current_player_id: dealer_id,
            players,
            active,
            piles,
            took: false,
            take_two: false,
            asked: None,
            game_over: false,
            counter: 0,
            move_sheet: vec![MoveRecord::Deal {
                dealer: dealer_id,
                shuffled_deck: shuffled,
            }],
        })
    }

    pub fn is_over(&self) -> bool {
        self.game_over || self.current_hand().is_empty() || self.counter > self.config.move_ceiling
    }

    pub fn round_phase(&self) -> RoundPhase {
        if self.is_over() {
            RoundPhase::GameOver
        } else {
            RoundPhase::PlayCard
        }
    }

    /// Legal action ids for the current player; empty once the round is over.
    pub fn legal_actions(&self) -> Vec<ActionId> {
        if self.is_over() {
            return Vec::new();
        }
        legal::legal_actions(&self.legal_context(), self.config.call_policy)
    }

    fn legal_context(&self) -> LegalContext<'_> {
        LegalContext {
            hand: self.current_hand(),
            top_card: self.piles.top_card(),
            asked: self.asked,
            took: self.took,
        }
    }

    /// Applies one action for the current player and, if that ends the
    /// round, scores it.
    pub fn apply_action(&mut self, action: ActionId) -> Result<(), DomainError> {
        if self.is_over() {
            return Err(DomainError::RoundOver);
        }
        let mv = encoding::decode(action)?;
        let player = self.current_player_id;
        if !self.legal_actions().contains(&action) {
            return Err(DomainError::IllegalAction { action, player });
        }
        debug!(player, action, %mv, "Applying action");

        self.counter += 1;
        match mv {
            Move::Pass => self.pass(),
            Move::Draw => self.draw()?,
            Move::AskSuit(suit) => self.ask(suit),
            Move::PlayCards(cards) => self.play_cards(&cards)?,
        }

        if self.is_over() {
            if self.counter > self.config.move_ceiling && !self.current_hand().is_empty() {
                warn!(
                    counter = self.counter,
                    ceiling = self.config.move_ceiling,
                    "Move ceiling reached, ending round"
                );
            }
            self.end_hand();
        }
        Ok(())
    }

    fn pass(&mut self) {
        let player = self.current_player_id;
        self.took = false;
        self.take_two = false;
        self.advance();
        self.move_sheet.push(MoveRecord::Pass { player });
    }

    fn draw(&mut self) -> Result<(), DomainError> {
        let player = self.current_player_id;
        let stacked = self.take_two;
        let wanted = if stacked { STACKED_DRAW_COUNT } else { 1 };
        let drawn = self.piles.draw(player, wanted)?;
        self.took = true;
        // A stacked draw, or one that ran out of cards, ends the turn.
        if stacked || drawn < wanted {
            self.advance();
            self.took = false;
            self.take_two = false;
        }
        self.move_sheet.push(if stacked {
            MoveRecord::DoubleDraw { player, drawn }
        } else {
            MoveRecord::Draw { player, drawn }
        });
        Ok(())
    }

    fn ask(&mut self, suit: Suit) {
        let player = self.current_player_id;
        self.asked = Some(suit);
        self.move_sheet.push(MoveRecord::Ask { player, suit });
        if !self.is_over() {
            self.advance();
        }
    }

    fn play_cards(&mut self, cards: &[Card]) -> Result<(), DomainError> {
        let player = self.current_player_id;
        self.move_sheet.push(MoveRecord::Play {
            player,
            cards: cards.to_vec(),
        });
        self.piles.play(player, cards)?;
        let top = self
            .piles
            .top_card()
            .ok_or_else(|| DomainError::invariant("table empty after a play"))?;
        self.take_two = top.is_wild_draw_stack();
        self.asked = None;
        self.took = false;

        if self.current_hand().is_empty() {
            if self.can_reclaim_after_exit(top) {
                self.piles.draw(player, 1)?;
                self.took = true;
            }
            // otherwise the empty hand ends the round
        } else {
            if top.is_hand_exit() {
                self.advance();
            }
            if !top.is_wild_suit_request() {
                self.advance();
            }
        }
        Ok(())
    }

    /// Heads-up, a hand-exit card played as the last card takes one card back
    /// when the table holds anything besides hand-exit cards, or enough of them.
    fn can_reclaim_after_exit(&self, top: Card) -> bool {
        if self.active_count() != 2 || !top.is_hand_exit() {
            return false;
        }
        let table = self.piles.table();
        table.len() > HAND_EXIT_RECLAIM_TABLE_LEN || table.iter().any(|c| !c.is_hand_exit())
    }

    fn advance(&mut self) {
        if let Some(next) = next_active(self.current_player_id, &self.active) {
            self.current_player_id = next;
        }
    }

    /// Appends each active player's score for this hand. Runs once.
    fn end_hand(&mut self) {
        if self.game_over {
            return;
        }
        let weights = &self.config.rank_weights;
        for (seat, player) in self.players.iter_mut().enumerate() {
            if !self.active[seat] {
                continue;
            }
            let weight = hand_weight(&self.piles.hands[seat], weights);
            let score = hand_score(&player.points, weight, self.config.successive_zero_bonus);
            player.points.push(score);
        }
        self.game_over = true;

        let scores: Vec<i32> = self
            .players
            .iter()
            .map(|p| p.points.last().copied().unwrap_or_default())
            .collect();
        info!(moves = self.counter, ?scores, "Round finished");
    }

    fn current_hand(&self) -> &[Card] {
        self.piles
            .hands
            .get(self.current_player_id as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    pub fn is_active(&self, player: PlayerId) -> bool {
        self.active.get(player as usize).copied().unwrap_or(false)
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.current_player_id
    }

    pub fn dealer_id(&self) -> PlayerId {
        self.dealer_id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn took(&self) -> bool {
        self.took
    }

    pub fn take_two(&self) -> bool {
        self.take_two
    }

    pub fn asked(&self) -> Option<Suit> {
        self.asked
    }

    pub fn is_scored(&self) -> bool {
        self.game_over
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn move_sheet(&self) -> &[MoveRecord] {
        &self.move_sheet
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Residual hand weight of `player`.
    pub fn weight(&self, player: PlayerId) -> Result<i32, DomainError> {
        Ok(hand_weight(
            self.piles.hand(player)?,
            &self.config.rank_weights,
        ))
    }

    /// Negated residual hand weight per seat.
    pub fn payoffs(&self) -> Vec<i32> {
        self.piles
            .hands
            .iter()
            .map(|hand| -hand_weight(hand, &self.config.rank_weights))
            .collect()
    }

    /// +1 for seats whose cumulative score is zero, -1 otherwise; all zero
    /// until the round has been scored.
    pub fn binary_payoffs(&self) -> Vec<i32> {
        self.players
            .iter()
            .map(|p| match (self.game_over, p.point() == 0) {
                (false, _) => 0,
                (true, true) => 1,
                (true, false) => -1,
            })
            .collect()
    }

    /// Hands the players (with this round's scores) to the next round.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    #[cfg(test)]
    pub(crate) fn from_parts(config: GameConfig, current: PlayerId, piles: Piles) -> Self {
        let players = crate::domain::state::seat_players(config.num_players);
        Self {
            active: vec![true; players.len()],
            config,
            dealer_id: current,
            current_player_id: current,
            players,
            piles,
            took: false,
            take_two: false,
            asked: None,
            game_over: false,
            counter: 0,
            move_sheet: Vec::new(),
        }
    }
}
