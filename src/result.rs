//! Round result types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Rank;
use crate::error::{IllegalMove, TurnFault};
use crate::hand::{Hand, Pose};
use crate::strategy::Move;

/// Why a player was removed from the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// The strategy timed out, panicked, or answered with a malformed pose.
    Fault(TurnFault),
    /// The strategy answered with a pose the rules forbid.
    Illegal(IllegalMove),
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fault(fault) => write!(f, "{fault}"),
            Self::Illegal(illegal) => write!(f, "illegal move: {illegal}"),
        }
    }
}

/// A player caught faulting or cheating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Seat index of the player.
    pub player: usize,
    /// What went wrong.
    pub kind: ViolationKind,
    /// The move the engine substituted for the turn: pass on a non-empty
    /// board, otherwise the single highest card held.
    pub fallback: Move,
    /// Cards taken out of circulation with the player.
    pub discarded: Vec<Rank>,
}

/// Outcome of a completed round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Finishers in order, ending with the last player still holding cards.
    pub finish_order: Vec<usize>,
    /// Players removed for violations, in the order they were caught.
    pub violators: Vec<usize>,
    /// Details for each entry of `violators`.
    pub violations: Vec<Violation>,
    /// Every trick's poses, in play order. The trick in progress when the
    /// round stopped is the last entry.
    pub trick_history: Vec<Vec<Pose>>,
    /// Every rank played during the round, sorted.
    pub played: Vec<Rank>,
    /// Cards removed from circulation with violators.
    pub discarded: Vec<Rank>,
    /// Hands when the round stopped; only the last finisher may hold cards.
    pub final_hands: Vec<Hand>,
    /// Human-readable log, when event recording is enabled.
    pub event_log: Option<String>,
}

impl RoundResult {
    /// Returns the full ranking: finishers first, then violators.
    #[must_use]
    pub fn ranking(&self) -> Vec<usize> {
        self.finish_order
            .iter()
            .chain(&self.violators)
            .copied()
            .collect()
    }

    /// Returns the zero-based place of `player`, if seated.
    #[must_use]
    pub fn place_of(&self, player: usize) -> Option<usize> {
        self.ranking().iter().position(|&p| p == player)
    }
}
