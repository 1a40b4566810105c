//! Cards and melds.
//!
//! - `Card`: rank + suit, point values, text form
//! - `Meld`: a two-sided group of cards on the table
//! - `validation`: set/run predicates and the pickup gate

pub mod card;
pub mod meld;
pub mod validation;

pub use card::{cards_points, parse_cards, Card, ParseCardError, Rank, Suit};
pub use meld::Meld;
pub use validation::{can_meld_with_card, is_run, is_run_meld, is_valid_meld, pairs, MIN_MELD_SIZE};
