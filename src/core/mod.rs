//! Core engine types: players, RNG, configuration, actions, state.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{RummyConfig, DECK_SIZE};
pub use action::{Action, ActionRecord, MeldCards};
pub use state::{GamePhase, GameState, StateBuilder};
