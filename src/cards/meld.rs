//! Two-sided meld record.
//!
//! A meld on the table belongs to neither player. Each side records the
//! cards one player contributed, so a lay-off onto an opponent's meld is
//! scored for the player who laid it off.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{cards_points, Card};
use crate::core::player::{PlayerId, PlayerMap};

/// A group of cards on the table, split by contributing player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meld {
    sides: PlayerMap<Vector<Card>>,
}

impl Meld {
    /// Create an empty meld.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a meld with cards on one side only.
    #[must_use]
    pub fn from_side(player: PlayerId, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut meld = Self::new();
        meld.sides[player].extend(cards);
        meld
    }

    /// Cards contributed by `player`.
    #[must_use]
    pub fn side(&self, player: PlayerId) -> &Vector<Card> {
        &self.sides[player]
    }

    pub(crate) fn side_mut(&mut self, player: PlayerId) -> &mut Vector<Card> {
        &mut self.sides[player]
    }

    /// All cards of the meld, player one's side first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.sides.values().flat_map(|side| side.iter())
    }

    /// Total number of cards across both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sides.values().map(Vector::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of this meld with `cards` appended to `player`'s side.
    #[must_use]
    pub fn with_added(&self, player: PlayerId, cards: impl IntoIterator<Item = Card>) -> Self {
        let mut meld = self.clone();
        meld.sides[player].extend(cards);
        meld
    }

    /// Point value of `player`'s contribution.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> i64 {
        cards_points(self.side(player))
    }
}
