//! Rules engine.
//!
//! - `reducers`: one state transition per action
//! - `engine`: the dispatcher, outcome detection, and legality queries
//! - `rejection`: typed reasons for refused actions
//! - `table`: host-side session with turn checks and replayable history
//!
//! Reducers are pure: a refused action returns a snapshot equal to its
//! input and never panics.

pub mod engine;
pub mod reducers;
pub mod rejection;
pub mod table;

pub use engine::{can_discard, can_go_out, legal_pickups, outcome, reduce, try_reduce, GameResult};
pub use rejection::Rejection;
pub use table::Table;
