//! Hands, poses and the board.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Rank, SUIT_COUNT};
use crate::error::PoseError;

/// One play: one to four cards of a single rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pose {
    rank: Rank,
    count: u8,
}

impl Pose {
    /// Builds a pose from raw cards.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is empty, mixes ranks, or holds more than
    /// four cards.
    ///
    /// ```
    /// use president::hand::Pose;
    ///
    /// let pose = Pose::new(&[7, 7]).unwrap();
    /// assert_eq!(pose.rank(), 7);
    /// assert_eq!(pose.len(), 2);
    /// assert!(Pose::new(&[7, 8]).is_err());
    /// ```
    pub fn new(cards: &[Rank]) -> Result<Self, PoseError> {
        let (&rank, rest) = cards.split_first().ok_or(PoseError::Empty)?;
        if rest.iter().any(|&card| card != rank) {
            return Err(PoseError::MixedRanks);
        }
        if cards.len() > SUIT_COUNT {
            return Err(PoseError::TooManyCards(cards.len()));
        }
        Ok(Self {
            rank,
            count: cards.len() as u8,
        })
    }

    /// Builds a pose of `count` copies of `rank`.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or above four.
    pub fn of(rank: Rank, count: usize) -> Result<Self, PoseError> {
        match count {
            0 => Err(PoseError::Empty),
            1..=SUIT_COUNT => Ok(Self {
                rank,
                count: count as u8,
            }),
            _ => Err(PoseError::TooManyCards(count)),
        }
    }

    /// Returns the rank shared by every card of the pose.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the number of cards in the pose.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count as usize
    }

    /// Always `false`: a pose holds at least one card.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the cards of the pose.
    #[must_use]
    pub fn cards(&self) -> Vec<Rank> {
        alloc::vec![self.rank; self.len()]
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.cards())
    }
}

/// A player's hand, kept as a sorted multiset of ranks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Rank>,
}

impl Hand {
    /// Creates a hand from cards in any order.
    #[must_use]
    pub fn new(mut cards: Vec<Rank>) -> Self {
        cards.sort_unstable();
        Self { cards }
    }

    /// Returns the cards in ascending rank order.
    #[must_use]
    pub fn cards(&self) -> &[Rank] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns how many copies of `rank` the hand holds.
    #[must_use]
    pub fn count(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|&&card| card == rank).count()
    }

    /// Returns the rank-to-count mapping of the hand.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<Rank, usize> {
        let mut counts = BTreeMap::new();
        for &card in &self.cards {
            *counts.entry(card).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the lowest rank held.
    #[must_use]
    pub fn lowest_rank(&self) -> Option<Rank> {
        self.cards.first().copied()
    }

    /// Returns the highest rank held.
    #[must_use]
    pub fn highest_rank(&self) -> Option<Rank> {
        self.cards.last().copied()
    }

    /// Returns the `n` lowest cards (fewer if the hand is smaller).
    #[must_use]
    pub fn lowest(&self, n: usize) -> Vec<Rank> {
        self.cards[..n.min(self.cards.len())].to_vec()
    }

    /// Returns the `n` highest cards (fewer if the hand is smaller).
    #[must_use]
    pub fn highest(&self, n: usize) -> Vec<Rank> {
        self.cards[self.cards.len().saturating_sub(n)..].to_vec()
    }

    /// Returns whether `cards` is a sub-multiset of the hand.
    #[must_use]
    pub fn contains(&self, cards: &[Rank]) -> bool {
        let mut needed: BTreeMap<Rank, usize> = BTreeMap::new();
        for &card in cards {
            *needed.entry(card).or_insert(0) += 1;
        }
        needed
            .into_iter()
            .all(|(rank, count)| self.count(rank) >= count)
    }

    /// Returns whether the hand holds every card of `pose`.
    #[must_use]
    pub fn contains_pose(&self, pose: &Pose) -> bool {
        self.count(pose.rank()) >= pose.len()
    }

    /// Adds cards, keeping the hand sorted.
    pub fn add(&mut self, cards: &[Rank]) {
        self.cards.extend_from_slice(cards);
        self.cards.sort_unstable();
    }

    /// Removes `cards` from the hand.
    ///
    /// Returns `false` and leaves the hand untouched if any card is missing.
    pub fn remove(&mut self, cards: &[Rank]) -> bool {
        if !self.contains(cards) {
            return false;
        }
        for card in cards {
            if let Some(index) = self.cards.iter().position(|held| held == card) {
                self.cards.remove(index);
            }
        }
        true
    }

    /// Removes the `n` highest cards and returns them in ascending order.
    pub fn take_highest(&mut self, n: usize) -> Vec<Rank> {
        let split = self.cards.len().saturating_sub(n);
        self.cards.split_off(split)
    }

    /// Empties the hand, returning every card.
    pub fn take_all(&mut self) -> Vec<Rank> {
        core::mem::take(&mut self.cards)
    }
}

impl From<Vec<Rank>> for Hand {
    fn from(cards: Vec<Rank>) -> Self {
        Self::new(cards)
    }
}

/// The poses played since the last lead change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    poses: Vec<Pose>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { poses: Vec::new() }
    }

    /// Returns the poses in play order.
    #[must_use]
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    /// Returns the last pose, which the next play must beat or match.
    #[must_use]
    pub fn top(&self) -> Option<&Pose> {
        self.poses.last()
    }

    /// Returns whether nothing has been played this trick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Returns the number of poses on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Returns the number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.poses.iter().map(Pose::len).sum()
    }

    pub(crate) fn push(&mut self, pose: Pose) {
        self.poses.push(pose);
    }

    pub(crate) fn take(&mut self) -> Vec<Pose> {
        core::mem::take(&mut self.poses)
    }
}

impl From<Vec<Pose>> for Board {
    fn from(poses: Vec<Pose>) -> Self {
        Self { poses }
    }
}
