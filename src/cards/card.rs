//! Card identity: rank, suit, and point value.
//!
//! There are 52 playable cards. Ranks carry a numeric value used for run
//! detection and ordering (Ace = 14). A separate `LowAce` pseudo-rank with
//! value 1 exists only inside melds, where an Ace played as the bottom of a
//! run is rewritten to it.
//!
//! ## Text form
//!
//! ```
//! use rust_rummy::cards::{Card, Rank, Suit};
//!
//! let card: Card = "TH".parse().unwrap();
//! assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(card.to_string(), "TH");
//! assert_eq!(card.points(), 10);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Card rank.
///
/// Discriminants are the rank numbers used for run detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    /// An Ace committed as the low end of a run. Never dealt or parsed.
    LowAce = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// The 13 ranks that appear in the deck.
    pub const PLAYABLE: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric rank (LowAce = 1, Ace = 14).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Convert a rank number back into a rank.
    ///
    /// Panics if `n` is outside 1..=14. That is a caller bug, not an
    /// illegal move.
    #[must_use]
    pub fn from_number(n: u8) -> Self {
        match n {
            1 => Rank::LowAce,
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => panic!("Rank number out of bounds: {}", n),
        }
    }

    /// Point value of a card of this rank.
    ///
    /// Ten through King score 10, a high Ace scores 15, everything else
    /// (including an Ace played low) scores 5.
    #[must_use]
    pub const fn points(self) -> i64 {
        match self {
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 15,
            _ => 5,
        }
    }

    /// Is this either form of Ace?
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Rank::Ace | Rank::LowAce)
    }

    fn symbol(self) -> char {
        match self {
            Rank::LowAce => '1',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }
}

/// An immutable card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// All 52 playable cards in a fixed order (rank-major).
    pub fn playable_deck() -> impl Iterator<Item = Card> {
        Rank::PLAYABLE
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
    }

    /// Point value of this card.
    #[must_use]
    pub const fn points(self) -> i64 {
        self.rank.points()
    }

    /// Can this card appear outside a meld?
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self.rank, Rank::LowAce)
    }

    /// The playable card this identity stands for.
    ///
    /// A low ace maps back to the Ace of the same suit.
    #[must_use]
    pub const fn identity(self) -> Card {
        match self.rank {
            Rank::LowAce => Card::new(Rank::Ace, self.suit),
            _ => self,
        }
    }

    /// Rewrite an Ace as the low-ace identity. Other cards are unchanged.
    #[must_use]
    pub const fn as_low_ace(self) -> Card {
        match self.rank {
            Rank::Ace => Card::new(Rank::LowAce, self.suit),
            _ => self,
        }
    }
}

/// Sum of point values.
pub fn cards_points<'a>(cards: impl IntoIterator<Item = &'a Card>) -> i64 {
    cards.into_iter().map(|card| card.points()).sum()
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Failure to parse a card token like `"QS"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid card: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(err());
        };

        let rank = Rank::PLAYABLE
            .into_iter()
            .find(|r| r.symbol() == rank_ch.to_ascii_uppercase())
            .ok_or_else(err)?;
        let suit = Suit::ALL
            .into_iter()
            .find(|s| s.symbol() == suit_ch.to_ascii_uppercase())
            .ok_or_else(err)?;

        Ok(Card::new(rank, suit))
    }
}

/// Parse a list of card tokens, failing on the first invalid one.
pub fn parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, ParseCardError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().map(|s| s.as_ref().parse()).collect()
}
