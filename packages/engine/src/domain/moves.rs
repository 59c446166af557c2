//! Moves an agent can choose, and the records a round keeps of them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Suit};
use crate::domain::encoding::{self, ActionId};
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

/// A decoded action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Move {
    Pass,
    /// Draw one card, or two when answering a stacked wild-draw card.
    Draw,
    /// Demand the suit to be matched after a wild-suit-request card.
    AskSuit(Suit),
    /// Same-rank cards, in the order they are laid down.
    PlayCards(Vec<Card>),
}

impl Move {
    pub fn action_id(&self) -> Result<ActionId, DomainError> {
        encoding::encode(self)
    }

    pub fn from_action_id(id: ActionId) -> Result<Self, DomainError> {
        encoding::decode(id)
    }

    pub fn is_call(&self) -> bool {
        !matches!(self, Move::PlayCards(_))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => f.write_str("pass"),
            Move::Draw => f.write_str("draw"),
            Move::AskSuit(suit) => write!(f, "ask:{suit}"),
            Move::PlayCards(cards) => match cards.as_slice() {
                [single] => write!(f, "{single}"),
                many => {
                    f.write_str("[")?;
                    for (i, card) in many.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{card}")?;
                    }
                    f.write_str("]")
                }
            },
        }
    }
}

/// Entry of a round's move sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveRecord {
    /// Always the first entry: the first actor and the deck before dealing.
    Deal {
        dealer: PlayerId,
        shuffled_deck: Vec<Card>,
    },
    Pass {
        player: PlayerId,
    },
    Draw {
        player: PlayerId,
        drawn: usize,
    },
    /// A draw resolved while a stacked wild-draw card was pending.
    DoubleDraw {
        player: PlayerId,
        drawn: usize,
    },
    Ask {
        player: PlayerId,
        suit: Suit,
    },
    Play {
        player: PlayerId,
        cards: Vec<Card>,
    },
}

impl MoveRecord {
    pub fn player(&self) -> PlayerId {
        match self {
            MoveRecord::Deal { dealer, .. } => *dealer,
            MoveRecord::Pass { player }
            | MoveRecord::Draw { player, .. }
            | MoveRecord::DoubleDraw { player, .. }
            | MoveRecord::Ask { player, .. }
            | MoveRecord::Play { player, .. } => *player,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRecord::Deal { dealer, .. } => write!(f, "player-{dealer} deals"),
            MoveRecord::Pass { player } => write!(f, "player-{player} passes"),
            MoveRecord::Draw { player, drawn } => write!(f, "player-{player} draws {drawn}"),
            MoveRecord::DoubleDraw { player, drawn } => {
                write!(f, "player-{player} double-draws {drawn}")
            }
            MoveRecord::Ask { player, suit } => write!(f, "player-{player} asks {suit}"),
            MoveRecord::Play { player, cards } => {
                write!(f, "player-{player} plays {}", Move::PlayCards(cards.clone()))
            }
        }
    }
}
