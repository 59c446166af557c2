//! Card containers owned by a round: the stock, the table and every hand.

use crate::domain::cards_types::Card;
use crate::domain::state::PlayerId;
use crate::errors::domain::DomainError;

/// Every card of the round lives in exactly one of these piles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piles {
    /// Draw pile; the last element is drawn first.
    pub(crate) stock: Vec<Card>,
    /// Discard table; the last element is the top card.
    pub(crate) table: Vec<Card>,
    pub(crate) hands: Vec<Vec<Card>>,
}

impl Piles {
    /// Empty hands and a table, with `shuffled` as the stock.
    pub fn new(shuffled: Vec<Card>, num_players: usize) -> Self {
        Self {
            stock: shuffled,
            table: Vec::new(),
            hands: vec![Vec::new(); num_players],
        }
    }

    fn hand_mut(&mut self, player: PlayerId) -> Result<&mut Vec<Card>, DomainError> {
        self.hands
            .get_mut(player as usize)
            .ok_or(DomainError::InvalidPlayer(player))
    }

    pub fn hand(&self, player: PlayerId) -> Result<&[Card], DomainError> {
        self.hands
            .get(player as usize)
            .map(Vec::as_slice)
            .ok_or(DomainError::InvalidPlayer(player))
    }

    pub fn hands(&self) -> &[Vec<Card>] {
        &self.hands
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn top_card(&self) -> Option<Card> {
        self.table.last().copied()
    }

    /// Moves `count` cards from the end of the stock into `player`'s hand.
    pub fn deal(&mut self, player: PlayerId, count: usize) -> Result<(), DomainError> {
        if count > self.stock.len() {
            return Err(DomainError::invariant(format!(
                "cannot deal {count} cards from a stock of {}",
                self.stock.len()
            )));
        }
        let at = self.stock.len() - count;
        let dealt: Vec<Card> = self.stock.drain(at..).rev().collect();
        self.hand_mut(player)?.extend(dealt);
        Ok(())
    }

    /// Table cards that may go back into play (all but the top card).
    pub fn reclaimable(&self) -> usize {
        self.table.len().saturating_sub(1)
    }

    /// Draws up to `count` cards for `player`: the stock first, then the
    /// oldest table cards, never the top card. Returns the number drawn.
    pub fn draw(&mut self, player: PlayerId, count: usize) -> Result<usize, DomainError> {
        if self.stock.is_empty() && self.table.is_empty() {
            return Err(DomainError::invariant(
                "draw requested with an empty stock and an empty table",
            ));
        }
        let mut drawn = Vec::with_capacity(count);
        while drawn.len() < count {
            match self.stock.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        while drawn.len() < count && self.table.len() > 1 {
            drawn.push(self.table.remove(0));
        }
        let n = drawn.len();
        self.hand_mut(player)?.extend(drawn);
        Ok(n)
    }

    /// Moves `cards` from `player`'s hand onto the table, in order.
    ///
    /// All-or-nothing: fails without touching any pile if a card is missing.
    pub fn play(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), DomainError> {
        let hand = self.hand_mut(player)?;
        let mut remaining = hand.clone();
        for card in cards {
            let pos = remaining
                .iter()
                .position(|c| c == card)
                .ok_or_else(|| {
                    DomainError::invariant(format!("player {player} does not hold {card}"))
                })?;
            remaining.remove(pos);
        }
        *hand = remaining;
        self.table.extend_from_slice(cards);
        Ok(())
    }

    pub fn total_cards(&self) -> usize {
        self.stock.len() + self.table.len() + self.hands.iter().map(Vec::len).sum::<usize>()
    }

    /// Every card currently in play, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.table.iter())
            .chain(self.hands.iter().flatten())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(stock: Vec<Card>, table: Vec<Card>, hands: Vec<Vec<Card>>) -> Self {
        Self {
            stock,
            table,
            hands,
        }
    }
}
