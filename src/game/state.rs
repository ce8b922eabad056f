//! Round phases and trick state.

use alloc::vec::Vec;

use crate::card::SUIT_COUNT;
use crate::hand::{Board, Pose};

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Splitting the deck between seats.
    Dealing,
    /// Swapping cards between the role pairs.
    Exchanging,
    /// Players take turns until one is left.
    TrickPlay,
    /// Assembling the ranking.
    Finalizing,
    /// The round completed and a result is available.
    Done,
    /// The round stopped on an error and has no ranking.
    Aborted,
}

/// State of the trick in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrickState {
    /// Poses played since the last lead change.
    pub board: Board,
    /// Cards in the run of identical poses at the top of the board.
    pub same_rank_streak: usize,
    /// Whether the next player must repeat the top pose or be jumped.
    pub jump_risk: bool,
}

impl TrickState {
    /// Puts `pose` on the board and updates the streak.
    ///
    /// An exact repeat of the top pose grows the streak and raises the jump
    /// risk; anything else restarts the streak.
    pub fn push(&mut self, pose: Pose) {
        if self.board.top() == Some(&pose) {
            self.same_rank_streak += pose.len();
            self.jump_risk = true;
        } else {
            self.same_rank_streak = pose.len();
            self.jump_risk = false;
        }
        self.board.push(pose);
    }

    /// Returns whether four identical cards were played in a row.
    #[must_use]
    pub const fn is_cut(&self) -> bool {
        self.same_rank_streak >= SUIT_COUNT
    }

    /// Clears the trick and returns its poses.
    pub fn reset(&mut self) -> Vec<Pose> {
        self.same_rank_streak = 0;
        self.jump_risk = false;
        self.board.take()
    }
}
