//! Rules configuration.
//!
//! The standard game deals nine cards to each player, turns one card face
//! up, and ends once a player's cumulative score reaches 500. These are
//! the defaults of `RummyConfig`; tests and variants override them with
//! the `with_*` builders.

use serde::{Deserialize, Serialize};

/// Number of playable cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Tunable rules parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RummyConfig {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,

    /// Cards turned face up to start the discard pile.
    pub initial_discard: usize,

    /// Cumulative score at which the game is complete.
    pub win_threshold: i64,
}

impl Default for RummyConfig {
    fn default() -> Self {
        Self {
            hand_size: 9,
            initial_discard: 1,
            win_threshold: 500,
        }
    }
}

impl RummyConfig {
    /// Set the number of cards dealt to each player.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the number of cards that start the discard pile.
    #[must_use]
    pub fn with_initial_discard(mut self, initial_discard: usize) -> Self {
        self.initial_discard = initial_discard;
        self
    }

    /// Set the score that ends the game.
    #[must_use]
    pub fn with_win_threshold(mut self, win_threshold: i64) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Cards taken from the deck by the deal.
    #[must_use]
    pub fn dealt_cards(&self) -> usize {
        self.hand_size * 2 + self.initial_discard
    }

    /// Check that the deal fits the deck.
    ///
    /// Panics on an impossible configuration; that is a caller bug.
    pub fn validate(&self) {
        assert!(self.initial_discard > 0, "Discard pile must start with at least 1 card");
        assert!(
            self.dealt_cards() <= DECK_SIZE,
            "Deal of {} cards exceeds the {}-card deck",
            self.dealt_cards(),
            DECK_SIZE
        );
    }
}
