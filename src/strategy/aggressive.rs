use crate::card::SUIT_COUNT;

use super::{Move, Strategy, TurnView, lead_lowest, lowest_follow};

/// Breaks groups to stay in the trick.
///
/// Leads like [`Conservative`](super::Conservative). When following it looks
/// for a qualifying rank held exactly as many times as the board top, then
/// one more, up to four, and plays the board's arity from the first group
/// found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggressive;

impl Aggressive {
    /// Picks a move for `view`.
    #[must_use]
    pub fn choose(view: &TurnView) -> Move {
        let Some(top) = view.board.top() else {
            return lead_lowest(&view.hand);
        };
        (top.len()..=SUIT_COUNT)
            .find_map(|arity| lowest_follow(&view.hand, top, arity, view.jump_risk))
            .map_or(Move::Pass, |rank| Move::repeat(rank, top.len()))
    }
}

impl Strategy for Aggressive {
    fn name(&self) -> &str {
        "Aggressive"
    }

    fn decide(&mut self, view: &TurnView) -> Move {
        Self::choose(view)
    }
}
