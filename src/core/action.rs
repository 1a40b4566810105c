//! Player intents.
//!
//! Actions are plain data: a caller builds one per player intent and hands
//! it to the dispatcher together with the current state. They carry no
//! player identity; the engine acts for whoever holds the turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::{Card, Meld};

/// Cards named by a meld action. Most melds are 3-4 cards.
pub type MeldCards = SmallVec<[Card; 4]>;

/// The closed set of player intents.
///
/// ## Example
///
/// ```
/// use rust_rummy::cards::parse_cards;
/// use rust_rummy::core::Action;
///
/// let draw = Action::Draw;
/// let take = Action::pickup(2);
/// let meld = Action::meld(parse_cards(["2H", "3H", "4H"]).unwrap());
/// let out = Action::go_out(Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take the front card of the deck.
    Draw,
    /// Take the discard at `index` (0 = top) and everything above it.
    Pickup { index: usize },
    /// Put a card from hand on top of the discard pile, ending the turn.
    Discard { card: Card },
    /// Start a new meld, or lay cards off onto `existing`.
    Meld {
        cards: MeldCards,
        existing: Option<Meld>,
    },
    /// End the round with an empty hand. `seed` drives the next deal.
    GoOut { seed: Option<u64> },
}

impl Action {
    /// Pick up from the discard pile at `index`.
    #[must_use]
    pub fn pickup(index: usize) -> Self {
        Action::Pickup { index }
    }

    /// Discard `card`.
    #[must_use]
    pub fn discard(card: Card) -> Self {
        Action::Discard { card }
    }

    /// Meld `cards` as a new meld.
    #[must_use]
    pub fn meld(cards: impl IntoIterator<Item = Card>) -> Self {
        Action::Meld {
            cards: cards.into_iter().collect(),
            existing: None,
        }
    }

    /// Lay `cards` off onto a meld already on the table.
    #[must_use]
    pub fn lay_off(cards: impl IntoIterator<Item = Card>, existing: Meld) -> Self {
        Action::Meld {
            cards: cards.into_iter().collect(),
            existing: Some(existing),
        }
    }

    /// Go out, seeding the next round's deal.
    #[must_use]
    pub fn go_out(seed: Option<u64>) -> Self {
        Action::GoOut { seed }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Draw => "draw",
            Action::Pickup { .. } => "pickup",
            Action::Discard { .. } => "discard",
            Action::Meld { .. } => "meld",
            Action::GoOut { .. } => "go_out",
        }
    }
}

/// An accepted action with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Auditing a hosted game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Sequence number across the whole game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
