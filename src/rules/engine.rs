//! Action dispatch and game outcome.
//!
//! `reduce` is the single entry point a presentation layer needs: it routes
//! an action to its reducer and returns the next snapshot. A refused action
//! returns a snapshot equal to the input, so callers detect rejection by
//! comparing the two.

use log::{debug, trace};

use super::reducers;
use super::rejection::Rejection;
use crate::cards::Card;
use crate::core::action::Action;
use crate::core::player::PlayerId;
use crate::core::state::{GamePhase, GameState};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal final scores.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Apply `action`, reporting why it was refused.
pub fn try_reduce(state: &GameState, action: &Action) -> Result<GameState, Rejection> {
    match action {
        Action::Draw => reducers::draw(state),
        Action::Pickup { index } => reducers::pickup(state, *index),
        Action::Discard { card } => reducers::discard(state, *card),
        Action::Meld { cards, existing } => reducers::meld(state, cards, existing.as_ref()),
        Action::GoOut { seed } => reducers::go_out(state, *seed),
    }
}

/// Apply `action` to `state`.
///
/// Never fails: a refused action yields an unchanged copy of `state`.
///
/// ```
/// use rust_rummy::core::{Action, GamePhase, GameState};
/// use rust_rummy::rules::reduce;
///
/// let state = GameState::initial(Some(0));
/// let next = reduce(&state, &Action::Draw);
/// assert_eq!(next.phase(), GamePhase::Play);
///
/// // Drawing twice is refused.
/// assert_eq!(reduce(&next, &Action::Draw), next);
/// ```
#[must_use]
pub fn reduce(state: &GameState, action: &Action) -> GameState {
    match try_reduce(state, action) {
        Ok(next) => {
            trace!("{} by {} accepted", action.name(), state.active());
            next
        }
        Err(reason) => {
            debug!("{} by {} rejected: {}", action.name(), state.active(), reason);
            state.clone()
        }
    }
}

/// Winner of a completed game, or `None` while play continues.
#[must_use]
pub fn outcome(state: &GameState) -> Option<GameResult> {
    if state.phase() != GamePhase::Complete {
        return None;
    }

    let one = state.score(PlayerId::One);
    let two = state.score(PlayerId::Two);
    Some(match one.cmp(&two) {
        std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::One),
        std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Two),
        std::cmp::Ordering::Equal => GameResult::Draw,
    })
}

/// Discard indices a pickup would currently accept.
#[must_use]
pub fn legal_pickups(state: &GameState) -> Vec<usize> {
    (0..state.discard().len())
        .filter(|&index| reducers::pickup(state, index).is_ok())
        .collect()
}

/// Can the active player go out right now?
#[must_use]
pub fn can_go_out(state: &GameState) -> bool {
    state.phase() == GamePhase::Play && state.active_hand().is_empty()
}

/// Would discarding `card` be accepted?
#[must_use]
pub fn can_discard(state: &GameState, card: Card) -> bool {
    state.phase() == GamePhase::Play
        && state.must_meld().is_none()
        && state.active_hand().contains(&card)
}
