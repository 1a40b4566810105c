//! Game state snapshot.
//!
//! ## GameState
//!
//! The complete picture of a game between two players:
//! - Deck (front = next card drawn)
//! - Both hands
//! - Discard pile (index 0 = top)
//! - Melds on the table
//! - Turn, phase, and the pending must-meld card
//! - Cumulative scores and round counter
//!
//! Uses `im` persistent data structures so every accepted action produces a
//! new snapshot cheaply while the previous one stays intact.
//!
//! ## Card conservation
//!
//! Deck, hands, discard pile, and meld sides always partition the 52
//! playable cards. `is_conserved` checks this (low aces count as their Ace).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::config::{RummyConfig, DECK_SIZE};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{cards_points, Card, Meld};

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// The active player must draw or pick up.
    Draw,
    /// The active player may meld, lay off, discard, or go out.
    Play,
    /// Terminal. No further actions apply.
    Complete,
}

/// Immutable snapshot of a game.
///
/// Created by [`GameState::initial`] / [`GameState::new`] and advanced only
/// by the reducers in [`crate::rules`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: RummyConfig,
    pub(crate) deck: Vector<Card>,
    pub(crate) hands: PlayerMap<Vector<Card>>,
    pub(crate) discard: Vector<Card>,
    pub(crate) melds: Vector<Meld>,
    pub(crate) active: PlayerId,
    pub(crate) first: PlayerId,
    pub(crate) phase: GamePhase,
    pub(crate) must_meld: Option<Card>,
    pub(crate) scores: PlayerMap<i64>,
    pub(crate) round: u32,
}

impl GameState {
    /// Start a game with the standard rules.
    ///
    /// Nine cards to each hand, one to the discard pile, player one to act.
    /// `None` draws a fresh seed.
    #[must_use]
    pub fn initial(seed: Option<u64>) -> Self {
        Self::new(RummyConfig::default(), &mut GameRng::from_seed(seed))
    }

    /// Start a game with `config`, dealing from `rng`.
    #[must_use]
    pub fn new(config: RummyConfig, rng: &mut GameRng) -> Self {
        Self::deal(config, PlayerId::One, PlayerMap::with_value(0), 1, rng)
    }

    /// Roll over to a new round.
    ///
    /// Keeps the configuration and cumulative scores, hands the first turn
    /// to the other player, and deals fresh cards.
    #[must_use]
    pub fn next_round(&self, rng: &mut GameRng) -> Self {
        Self::deal(
            self.config,
            self.first.opponent(),
            self.scores.clone(),
            self.round + 1,
            rng,
        )
    }

    fn deal(
        config: RummyConfig,
        first: PlayerId,
        scores: PlayerMap<i64>,
        round: u32,
        rng: &mut GameRng,
    ) -> Self {
        config.validate();
        let mut cards: Vec<Card> = Card::playable_deck().collect();
        rng.shuffle(&mut cards);

        let mut deck: Vector<Card> = cards.into_iter().collect();
        let mut hands = PlayerMap::with_value(Vector::new());
        for player in PlayerId::ALL {
            let rest = deck.split_off(config.hand_size);
            hands[player] = deck;
            deck = rest;
        }
        let rest = deck.split_off(config.initial_discard);
        let discard = deck;

        Self {
            config,
            deck: rest,
            hands,
            discard,
            melds: Vector::new(),
            active: first,
            first,
            phase: GamePhase::Draw,
            must_meld: None,
            scores,
            round,
        }
    }

    // === Accessors ===

    /// Rules in force.
    #[must_use]
    pub fn config(&self) -> &RummyConfig {
        &self.config
    }

    /// Undealt cards, front first.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Discard pile, top first.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    /// The most recently discarded card.
    #[must_use]
    pub fn top_discard(&self) -> Option<Card> {
        self.discard.front().copied()
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Vector<Card> {
        &self.hands[player]
    }

    /// The hand of the player whose turn it is.
    #[must_use]
    pub fn active_hand(&self) -> &Vector<Card> {
        &self.hands[self.active]
    }

    /// Melds on the table, oldest first.
    #[must_use]
    pub fn melds(&self) -> &Vector<Meld> {
        &self.melds
    }

    /// Whose turn it is.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    /// Who took the first turn of this round.
    #[must_use]
    pub fn first(&self) -> PlayerId {
        self.first
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// A picked-up card that must be melded before discarding.
    #[must_use]
    pub fn must_meld(&self) -> Option<Card> {
        self.must_meld
    }

    /// Cumulative score for `player`.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i64 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<i64> {
        &self.scores
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == GamePhase::Complete
    }

    // === Scoring inputs ===

    /// Points `player` has laid down across all melds this round.
    #[must_use]
    pub fn melded_points(&self, player: PlayerId) -> i64 {
        self.melds.iter().map(|meld| meld.points(player)).sum()
    }

    /// Points still held in `player`'s hand.
    #[must_use]
    pub fn hand_points(&self, player: PlayerId) -> i64 {
        cards_points(&self.hands[player])
    }

    /// Round score for `player` if the round ended now.
    #[must_use]
    pub fn round_delta(&self, player: PlayerId) -> i64 {
        self.melded_points(player) - self.hand_points(player)
    }

    // === Conservation ===

    /// Every card location: deck, hands, discard pile, meld sides.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.deck
            .iter()
            .chain(self.hands.values().flat_map(|hand| hand.iter()))
            .chain(self.discard.iter())
            .chain(self.melds.iter().flat_map(Meld::cards))
    }

    /// Do the card locations partition the 52 playable cards?
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let mut seen = FxHashSet::default();
        let mut count = 0;
        for card in self.all_cards() {
            count += 1;
            if !seen.insert(card.identity()) {
                return false;
            }
        }
        count == DECK_SIZE && seen.iter().all(|card| card.is_playable())
    }
}

/// Builder for arbitrary positions.
///
/// Hosts use it to resume a game; tests use it to set up scenarios. Cards
/// not placed anywhere go to the deck in standard order unless a deck is
/// given explicitly.
///
/// ```
/// use rust_rummy::cards::parse_cards;
/// use rust_rummy::core::{GamePhase, PlayerId, StateBuilder};
///
/// let state = StateBuilder::new()
///     .hand(PlayerId::One, parse_cards(["2H", "3H"]).unwrap())
///     .discard(parse_cards(["4H"]).unwrap())
///     .phase(GamePhase::Draw)
///     .build();
///
/// assert_eq!(state.deck_size(), 49);
/// assert!(state.is_conserved());
/// ```
#[derive(Clone, Debug)]
pub struct StateBuilder {
    config: RummyConfig,
    deck: Option<Vec<Card>>,
    hands: PlayerMap<Vec<Card>>,
    discard: Vec<Card>,
    melds: Vec<Meld>,
    active: PlayerId,
    first: PlayerId,
    phase: GamePhase,
    must_meld: Option<Card>,
    scores: PlayerMap<i64>,
    round: u32,
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self {
            config: RummyConfig::default(),
            deck: None,
            hands: PlayerMap::default(),
            discard: Vec::new(),
            melds: Vec::new(),
            active: PlayerId::One,
            first: PlayerId::One,
            phase: GamePhase::Draw,
            must_meld: None,
            scores: PlayerMap::with_value(0),
            round: 1,
        }
    }
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot.
    pub fn from_state(state: &GameState) -> Self {
        Self {
            config: state.config,
            deck: Some(state.deck.iter().copied().collect()),
            hands: PlayerMap::new(|p| state.hands[p].iter().copied().collect()),
            discard: state.discard.iter().copied().collect(),
            melds: state.melds.iter().cloned().collect(),
            active: state.active,
            first: state.first,
            phase: state.phase,
            must_meld: state.must_meld,
            scores: state.scores.clone(),
            round: state.round,
        }
    }

    pub fn config(mut self, config: RummyConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the deck explicitly (front first).
    pub fn deck(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.deck = Some(cards.into_iter().collect());
        self
    }

    /// Put remaining cards back in the deck when built.
    pub fn auto_deck(mut self) -> Self {
        self.deck = None;
        self
    }

    pub fn hand(mut self, player: PlayerId, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hands[player] = cards.into_iter().collect();
        self
    }

    /// Set the discard pile (top first).
    pub fn discard(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.discard = cards.into_iter().collect();
        self
    }

    pub fn melds(mut self, melds: impl IntoIterator<Item = Meld>) -> Self {
        self.melds = melds.into_iter().collect();
        self
    }

    /// Set the active player. Also makes them the round's first player.
    pub fn active(mut self, player: PlayerId) -> Self {
        self.active = player;
        self.first = player;
        self
    }

    pub fn first(mut self, player: PlayerId) -> Self {
        self.first = player;
        self
    }

    pub fn phase(mut self, phase: GamePhase) -> Self {
        self.phase = phase;
        self
    }

    pub fn must_meld(mut self, card: Option<Card>) -> Self {
        self.must_meld = card;
        self
    }

    pub fn score(mut self, player: PlayerId, score: i64) -> Self {
        self.scores[player] = score;
        self
    }

    pub fn round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    /// Panics if the config cannot be dealt (see [`RummyConfig::validate`]).
    pub fn build(self) -> GameState {
        self.config.validate();
        let deck = match self.deck {
            Some(deck) => deck,
            None => {
                let placed: FxHashSet<Card> = self
                    .hands
                    .values()
                    .flatten()
                    .chain(self.discard.iter())
                    .chain(self.melds.iter().flat_map(Meld::cards))
                    .map(|card| card.identity())
                    .collect();
                Card::playable_deck()
                    .filter(|card| !placed.contains(card))
                    .collect()
            }
        };

        GameState {
            config: self.config,
            deck: deck.into_iter().collect(),
            hands: PlayerMap::new(|p| self.hands[p].iter().copied().collect()),
            discard: self.discard.into_iter().collect(),
            melds: self.melds.into_iter().collect(),
            active: self.active,
            first: self.first,
            phase: self.phase,
            must_meld: self.must_meld,
            scores: self.scores,
            round: self.round,
        }
    }
}
