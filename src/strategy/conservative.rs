use super::{Move, Strategy, TurnView, lead_lowest, lowest_follow};

/// Plays only whole groups.
///
/// Leads with its lowest rank and follows with the lowest rank held exactly as
/// many times as the board top, so it never breaks a pair to beat a single.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conservative;

impl Conservative {
    /// Picks a move for `view`.
    #[must_use]
    pub fn choose(view: &TurnView) -> Move {
        let Some(top) = view.board.top() else {
            return lead_lowest(&view.hand);
        };
        lowest_follow(&view.hand, top, top.len(), view.jump_risk)
            .map_or(Move::Pass, |rank| Move::repeat(rank, top.len()))
    }
}

impl Strategy for Conservative {
    fn name(&self) -> &str {
        "Conservative"
    }

    fn decide(&mut self, view: &TurnView) -> Move {
        Self::choose(view)
    }
}
