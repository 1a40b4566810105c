//! Host-side game session.
//!
//! The reducers only know whose turn it is; they cannot tell who sent an
//! action. A `Table` is what a host (a server arbitrating two remote
//! players, a local UI) keeps per game: the authoritative snapshot, a check
//! that the submitting player holds the turn, and the history of accepted
//! actions for replay.
//!
//! ## Deterministic replay
//!
//! A table is created from a seed, and every `GoOut` without a seed is
//! recorded with one derived from the table seed and the round number.
//! Replaying the recorded actions from the same seed rebuilds the same state.

use im::Vector;
use log::debug;

use super::engine::{outcome, try_reduce, GameResult};
use super::rejection::Rejection;
use crate::core::{Action, ActionRecord, GameRng, GameState, PlayerId, RummyConfig};

/// Golden-ratio increment used to spread per-round seeds.
const ROUND_SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// One game between two players, with history.
#[derive(Clone, Debug)]
pub struct Table {
    state: GameState,
    seed: u64,
    history: Vector<ActionRecord>,
}

impl Table {
    /// Open a table. `None` draws a fresh seed (see [`Table::seed`]).
    #[must_use]
    pub fn new(config: RummyConfig, seed: Option<u64>) -> Self {
        let mut rng = GameRng::from_seed(seed);
        let state = GameState::new(config, &mut rng);
        Self {
            state,
            seed: rng.seed(),
            history: Vector::new(),
        }
    }

    /// Rebuild a table by replaying recorded actions.
    ///
    /// Fails with the first rejection; a faithful history never fails.
    pub fn replay(
        config: RummyConfig,
        seed: u64,
        records: impl IntoIterator<Item = ActionRecord>,
    ) -> Result<Self, Rejection> {
        let mut table = Self::new(config, Some(seed));
        for record in records {
            table.submit(record.player, record.action)?;
        }
        Ok(table)
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed of the first deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Winner once the game is complete.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        outcome(&self.state)
    }

    /// Seed for the deal that follows the current round.
    fn round_seed(&self) -> u64 {
        self.seed
            .wrapping_add(u64::from(self.state.round()).wrapping_mul(ROUND_SEED_STEP))
    }

    /// Submit `action` on behalf of `player`.
    ///
    /// Rejected if `player` does not hold the turn or the reducer refuses
    /// the action; the table is unchanged in either case.
    pub fn submit(&mut self, player: PlayerId, action: Action) -> Result<&GameState, Rejection> {
        if player != self.state.active() {
            debug!("{} submitted {} out of turn", player, action.name());
            return Err(Rejection::NotYourTurn(player));
        }

        let action = match action {
            Action::GoOut { seed: None } => Action::go_out(Some(self.round_seed())),
            other => other,
        };
        let next = try_reduce(&self.state, &action)?;

        let sequence = self.history.len() as u32;
        self.history
            .push_back(ActionRecord::new(player, action, self.state.round(), sequence));
        self.state = next;
        Ok(&self.state)
    }
}
