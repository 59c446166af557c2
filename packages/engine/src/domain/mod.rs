//! Domain layer: pure game logic types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod encoding;
pub mod game;
pub mod legal;
pub mod moves;
pub mod piles;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_encoding;
#[cfg(test)]
mod tests_legal;
#[cfg(test)]
mod tests_props_legality;
#[cfg(test)]
mod tests_props_round;

// Re-exports for ergonomics
pub use cards_parsing::{format_cards, try_parse_cards};
pub use cards_types::{Card, Rank, Suit};
pub use deck::{canonical_deck, card_by_id, deck, shuffled_deck};
pub use encoding::{decode, encode, encode_play, ActionId, ACTION_SPACE_SIZE};
pub use game::{init_round, Game};
pub use legal::{legal_actions, CallPolicy, LegalContext};
pub use moves::{Move, MoveRecord};
pub use piles::Piles;
pub use round::{Round, RoundPhase};
pub use seed_derivation::{derive_dealer_seed, derive_dealing_seed};
pub use snapshot::{PerfectInformation, PlayerState};
pub use state::{Player, PlayerId};
