//! One state transition per action.
//!
//! Each reducer takes a snapshot and returns either the next snapshot or the
//! reason the action was refused. Reducers work on a clone, so the input is
//! never touched; with `im` collections the clone is O(1).
//!
//! ## Transitions
//!
//! ```text
//! Draw  --draw/pickup--> Play
//! Play  --meld---------> Play   (same player, may chain)
//! Play  --discard------> Draw   (turn passes)
//! Play  --go_out-------> Draw of a new round, or Complete
//! ```

use im::Vector;
use log::info;
use rustc_hash::FxHashSet;

use super::rejection::Rejection;
use crate::cards::{can_meld_with_card, is_run_meld, is_valid_meld, Card, Meld, Rank};
use crate::core::{GamePhase, GameRng, GameState, PlayerId};

/// Result of a reducer.
pub type Transition = Result<GameState, Rejection>;

fn require_phase(state: &GameState, phase: GamePhase) -> Result<(), Rejection> {
    match state.phase {
        GamePhase::Complete => Err(Rejection::GameComplete),
        current if current == phase => Ok(()),
        current => Err(Rejection::WrongPhase(current)),
    }
}

/// Turn the discard pile over into a new deck.
///
/// The top discard stays behind as the new discard pile; the rest becomes
/// the deck with the oldest discard at the front.
fn reclaim_discard(state: &mut GameState) {
    let Some(top) = state.discard.pop_front() else {
        return;
    };
    let rest = std::mem::take(&mut state.discard);
    state.deck = rest.into_iter().rev().collect();
    state.discard = Vector::unit(top);
}

/// Draw the front card of the deck.
///
/// An empty deck is first replenished from the discard pile.
pub fn draw(state: &GameState) -> Transition {
    require_phase(state, GamePhase::Draw)?;

    let mut next = state.clone();
    if next.deck.is_empty() {
        reclaim_discard(&mut next);
    }
    let card = next.deck.pop_front().ok_or(Rejection::DeckExhausted)?;

    let active = next.active;
    next.hands[active].push_back(card);
    next.phase = GamePhase::Play;
    Ok(next)
}

/// Take the discard at `index` and every card above it.
///
/// Only allowed if the card at `index` can be melded right away; that card
/// becomes the must-meld card for the rest of the turn.
pub fn pickup(state: &GameState, index: usize) -> Transition {
    require_phase(state, GamePhase::Draw)?;

    let target = *state
        .discard
        .get(index)
        .ok_or(Rejection::PickupOutOfRange(index))?;
    let hand: Vec<Card> = state.active_hand().iter().copied().collect();
    if !can_meld_with_card(&hand, target, &state.melds) {
        return Err(Rejection::CannotUsePickup(target));
    }

    let mut next = state.clone();
    let below = next.discard.split_off(index + 1);
    let taken = std::mem::replace(&mut next.discard, below);

    // Target first, then the cards that were stacked on it.
    let active = next.active;
    next.hands[active].extend(taken.into_iter().rev());
    next.must_meld = Some(target);
    next.phase = GamePhase::Play;
    Ok(next)
}

/// Lay `cards` down as a new meld, or onto `existing`.
pub fn meld(state: &GameState, cards: &[Card], existing: Option<&Meld>) -> Transition {
    require_phase(state, GamePhase::Play)?;

    if cards.is_empty() {
        return Err(Rejection::EmptyMeld);
    }
    let mut named = FxHashSet::default();
    if let Some(&card) = cards.iter().find(|&&card| !named.insert(card)) {
        return Err(Rejection::DuplicateCard(card));
    }

    let active = state.active;
    let hand = state.active_hand();
    if let Some(&card) = cards.iter().find(|card| !hand.contains(card)) {
        return Err(Rejection::CardNotInHand(card));
    }
    if let Some(required) = state.must_meld {
        if !cards.contains(&required) {
            return Err(Rejection::MustMeldOmitted(required));
        }
    }

    let position = existing
        .map(|meld| state.melds.index_of(meld).ok_or(Rejection::UnknownMeld))
        .transpose()?;
    let mut candidate = existing
        .cloned()
        .unwrap_or_default()
        .with_added(active, cards.iter().copied());
    if !is_valid_meld(&candidate) {
        return Err(Rejection::InvalidMeld);
    }

    let mut next = state.clone();
    if let Some(position) = position {
        next.melds.remove(position);
    }
    next.must_meld = None;
    finalize_side(&mut candidate, active);
    next.melds.push_back(candidate);
    next.hands[active].retain(|card| !cards.contains(card));
    Ok(next)
}

/// Commit `player`'s side of a freshly validated meld.
///
/// In a run without a King any Ace is the low end, so it is rewritten to
/// the low-ace identity. The side is then sorted by rank.
fn finalize_side(meld: &mut Meld, player: PlayerId) {
    let low_ace = is_run_meld(meld) && !meld.cards().any(|card| card.rank == Rank::King);

    let side = meld.side_mut(player);
    let mut cards: Vec<Card> = side
        .iter()
        .map(|&card| if low_ace { card.as_low_ace() } else { card })
        .collect();
    cards.sort_by_key(|card| card.rank.number());
    *side = cards.into_iter().collect();
}

/// Put `card` on top of the discard pile and pass the turn.
pub fn discard(state: &GameState, card: Card) -> Transition {
    require_phase(state, GamePhase::Play)?;

    if let Some(required) = state.must_meld {
        return Err(Rejection::MustMeldPending(required));
    }
    let position = state
        .active_hand()
        .index_of(&card)
        .ok_or(Rejection::CardNotInHand(card))?;

    let mut next = state.clone();
    let active = next.active;
    next.hands[active].remove(position);
    next.discard.push_front(card);
    next.active = active.opponent();
    next.phase = GamePhase::Draw;
    Ok(next)
}

/// End the round once the active player has melded their whole hand.
///
/// Each player scores melded points minus points left in hand. A new round
/// is dealt from `seed`; if either cumulative score reaches the win
/// threshold the new state is marked complete.
pub fn go_out(state: &GameState, seed: Option<u64>) -> Transition {
    require_phase(state, GamePhase::Play)?;

    let held = state.active_hand().len();
    if held > 0 {
        return Err(Rejection::HandNotEmpty(held));
    }

    let mut rng = GameRng::from_seed(seed);
    let mut next = state.next_round(&mut rng);
    for player in PlayerId::ALL {
        next.scores[player] = state.scores[player] + state.round_delta(player);
    }
    info!(
        "round {} ended by {}: {} / {} (next deal seed {})",
        state.round,
        state.active,
        next.scores[PlayerId::One],
        next.scores[PlayerId::Two],
        rng.seed()
    );

    if next.scores.values().any(|&score| score >= state.config.win_threshold) {
        info!("game complete after round {}", state.round);
        next.phase = GamePhase::Complete;
    }
    Ok(next)
}
