//! Meld validation predicates.
//!
//! Pure functions deciding whether cards form a legal meld:
//! - a **set**: three or more distinct cards of one rank
//! - a **run**: three or more cards of one suit with consecutive ranks
//!
//! Aces may sit at either end of a run (A-2-3 or Q-K-A) but a run never
//! wraps past the King (K-A-2 is illegal).

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::card::{Card, Rank};
use super::meld::Meld;
use crate::core::player::PlayerId;

/// Minimum number of cards one side must hold for a meld to stand.
pub const MIN_MELD_SIZE: usize = 3;

type RankBuf = SmallVec<[u8; 16]>;

fn is_consecutive(mut ranks: RankBuf) -> bool {
    ranks.sort_unstable();
    ranks.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Do the ranks of `cards` form an unbroken, duplicate-free range?
///
/// Ranks are tried twice: once with Ace = 14 and once with Ace = 1.
/// Suits are not considered. A single card is trivially a run; no cards
/// is not.
///
/// ```
/// use rust_rummy::cards::{is_run, parse_cards};
///
/// assert!(is_run(&parse_cards(["AH", "2H", "3H"]).unwrap()));
/// assert!(is_run(&parse_cards(["QH", "KH", "AH"]).unwrap()));
/// assert!(!is_run(&parse_cards(["KH", "AH", "2H"]).unwrap()));
/// ```
#[must_use]
pub fn is_run(cards: &[Card]) -> bool {
    if cards.is_empty() {
        return false;
    }

    let high: RankBuf = cards.iter().map(|c| c.rank.number()).collect();
    let low: RankBuf = cards
        .iter()
        .map(|c| if c.rank.is_ace() { Rank::LowAce.number() } else { c.rank.number() })
        .collect();

    is_consecutive(high) || is_consecutive(low)
}

fn all_distinct(cards: &[Card]) -> bool {
    let mut seen = FxHashSet::default();
    cards.iter().all(|c| seen.insert(c.identity()))
}

fn is_set(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| pair[0].rank == pair[1].rank)
}

fn is_suited_run(cards: &[Card]) -> bool {
    cards.windows(2).all(|pair| pair[0].suit == pair[1].suit) && is_run(cards)
}

/// Is this meld legal as it stands?
///
/// At least one side must hold three or more cards, every card must be a
/// distinct identity, and the union of both sides must be a set or a
/// suited run.
#[must_use]
pub fn is_valid_meld(meld: &Meld) -> bool {
    if !PlayerId::ALL.iter().any(|&p| meld.side(p).len() >= MIN_MELD_SIZE) {
        return false;
    }

    let cards: Vec<Card> = meld.cards().copied().collect();
    all_distinct(&cards) && (is_set(&cards) || is_suited_run(&cards))
}

/// Is this (valid) meld a run rather than a set?
#[must_use]
pub fn is_run_meld(meld: &Meld) -> bool {
    let cards: Vec<Card> = meld.cards().copied().collect();
    !is_set(&cards) && is_suited_run(&cards)
}

/// All unordered 2-element combinations, in input order.
///
/// ```
/// use rust_rummy::cards::pairs;
///
/// assert_eq!(pairs(&[1, 2, 3]), vec![(1, 2), (1, 3), (2, 3)]);
/// ```
pub fn pairs<T: Clone>(items: &[T]) -> Vec<(T, T)> {
    items
        .iter()
        .enumerate()
        .flat_map(|(i, a)| items[i + 1..].iter().map(move |b| (a.clone(), b.clone())))
        .collect()
}

/// Could `target` be used in a meld right now?
///
/// True if laying `target` off onto either side of an existing meld keeps it
/// valid, or if two cards from `hand` plus `target` form a fresh meld.
/// Gates picking up from the discard pile.
pub fn can_meld_with_card<'a>(
    hand: &[Card],
    target: Card,
    melds: impl IntoIterator<Item = &'a Meld>,
) -> bool {
    let lays_off = melds.into_iter().any(|meld| {
        PlayerId::ALL
            .iter()
            .any(|&p| is_valid_meld(&meld.with_added(p, [target])))
    });

    lays_off
        || pairs(hand)
            .into_iter()
            .any(|(a, b)| is_valid_meld(&Meld::from_side(PlayerId::One, [a, b, target])))
}
