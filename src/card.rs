//! Card ranks and deck utilities.
//!
//! Suits never matter to play legality, so a card is identified by its rank
//! alone. Rank `0` is the weakest; rank `ranks - 1` is the strongest and
//! carries the auto-lead rule.

extern crate alloc;

use alloc::vec::Vec;

/// A card rank in `0..ranks`.
pub type Rank = u8;

/// Number of copies of each rank in the deck.
pub const SUIT_COUNT: usize = 4;

/// Number of ranks in the classic 52-card deck (3 through 2).
pub const CLASSIC_RANKS: u8 = 13;

/// Returns the number of cards in a deck with `ranks` ranks.
#[must_use]
pub const fn deck_size(ranks: u8) -> usize {
    ranks as usize * SUIT_COUNT
}

/// Builds the unshuffled deck: every rank `0..ranks`, four times, sorted.
///
/// ```
/// use president::card::full_deck;
///
/// assert_eq!(full_deck(2), vec![0, 0, 0, 0, 1, 1, 1, 1]);
/// ```
#[must_use]
pub fn full_deck(ranks: u8) -> Vec<Rank> {
    (0..ranks)
        .flat_map(|rank| core::iter::repeat_n(rank, SUIT_COUNT))
        .collect()
}

/// Returns whether `cards` holds exactly four copies of every rank `0..ranks`.
#[must_use]
pub fn is_full_deck(cards: &[Rank], ranks: u8) -> bool {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    sorted == full_deck(ranks)
}
