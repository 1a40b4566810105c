//! # rust-rummy
//!
//! A deterministic rules engine for two-player 500 Rum.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: every action produces a new `GameState`.
//!    A refused action produces a state equal to its input.
//!
//! 2. **Closed vocabularies**: actions and phases are enums, so dispatch is
//!    an exhaustive match.
//!
//! 3. **Injected randomness**: deals take a seed or a `GameRng`; there is no
//!    global RNG, so every game is reproducible.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) snapshot clones via `im-rs`.
//!
//! - **Two-sided melds**: each meld records who contributed which cards, so
//!   lay-offs onto the opponent's melds score for the right player.
//!
//! ## Modules
//!
//! - `cards`: Card identity, point values, melds, meld validation
//! - `core`: Players, RNG, configuration, actions, state
//! - `rules`: Reducers, dispatcher, rejection reasons, host session
//!
//! ## Example
//!
//! ```
//! use rust_rummy::{reduce, Action, GamePhase, GameState};
//!
//! let state = GameState::initial(Some(1));
//! let state = reduce(&state, &Action::Draw);
//! assert_eq!(state.phase(), GamePhase::Play);
//!
//! let card = state.active_hand()[0];
//! let state = reduce(&state, &Action::discard(card));
//! assert_eq!(state.top_discard(), Some(card));
//! ```

pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{
    can_meld_with_card, is_run, is_valid_meld, pairs,
    Card, Meld, ParseCardError, Rank, Suit,
};

pub use crate::core::{
    Action, ActionRecord, GamePhase, GameRng, GameState,
    PlayerId, PlayerMap, RummyConfig, StateBuilder,
};

pub use crate::rules::{reduce, try_reduce, outcome, GameResult, Rejection, Table};
