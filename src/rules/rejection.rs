//! Why an action was refused.
//!
//! The dispatcher never fails: a refused action leaves the state unchanged.
//! Reducers still know *why* they refused, and hosts that want to tell a
//! player can get that reason from [`crate::rules::try_reduce`].

use thiserror::Error;

use crate::cards::Card;
use crate::core::{GamePhase, PlayerId};

/// Reason an action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("the game is complete")]
    GameComplete,

    #[error("action not allowed in the {0:?} phase")]
    WrongPhase(GamePhase),

    #[error("{0} is not in the active player's hand")]
    CardNotInHand(Card),

    #[error("cards do not form a valid meld")]
    InvalidMeld,

    #[error("meld names no cards")]
    EmptyMeld,

    #[error("{0} is named more than once")]
    DuplicateCard(Card),

    #[error("meld is not on the table")]
    UnknownMeld,

    #[error("picked-up {0} must be part of the meld")]
    MustMeldOmitted(Card),

    #[error("picked-up {0} must be melded before discarding")]
    MustMeldPending(Card),

    #[error("discard pile has no card at index {0}")]
    PickupOutOfRange(usize),

    #[error("{0} cannot be used in a meld")]
    CannotUsePickup(Card),

    #[error("hand still holds {0} card(s)")]
    HandNotEmpty(usize),

    #[error("deck and discard pile are exhausted")]
    DeckExhausted,

    #[error("{0} does not hold the turn")]
    NotYourTurn(PlayerId),
}
