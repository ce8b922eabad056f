//! Compact text rendering of hands, poses and action logs.
//!
//! Consecutive equal items are glued together and runs are separated by a
//! delimiter, so `[11, 11, 0]` renders as `AA.3` with the classic symbols.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{CLASSIC_RANKS, Rank};
use crate::hand::{Hand, Pose};

/// Separator used between runs by the convenience renderers.
pub const DELIMITER: &str = ".";

/// Symbol of a pass in the action alphabet.
pub const PASS_SYMBOL: &str = "-";
/// Symbol of a jumped turn in the action alphabet.
pub const JUMPED_SYMBOL: &str = "~";
/// Symbol of a violation in the action alphabet.
pub const VIOLATOR_SYMBOL: &str = "X";

const CLASSIC: [&str; CLASSIC_RANKS as usize] = [
    "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A", "2",
];

/// Display symbol of every rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankSymbols {
    symbols: Vec<String>,
}

impl RankSymbols {
    /// The classic deck: `3` is the lowest rank and `2` the highest.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            symbols: CLASSIC.iter().map(ToString::to_string).collect(),
        }
    }

    /// Decimal rank numbers.
    #[must_use]
    pub fn numeric(ranks: u8) -> Self {
        Self {
            symbols: (0..ranks).map(|rank| rank.to_string()).collect(),
        }
    }

    /// Classic symbols for a 13-rank deck, numbers otherwise.
    #[must_use]
    pub fn for_ranks(ranks: u8) -> Self {
        if ranks == CLASSIC_RANKS {
            Self::classic()
        } else {
            Self::numeric(ranks)
        }
    }

    /// Returns the symbol of `rank`, or `?` outside the deck.
    #[must_use]
    pub fn symbol(&self, rank: Rank) -> &str {
        self.symbols.get(rank as usize).map_or("?", String::as_str)
    }
}

impl Default for RankSymbols {
    fn default() -> Self {
        Self::classic()
    }
}

/// One entry of a turn-by-turn action log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// An accepted pose.
    Play(Pose),
    /// The player left the trick.
    Pass,
    /// The player was skipped by a pending jump.
    Jumped,
    /// The player was removed for a violation.
    Violator,
}

fn group_runs<T: PartialEq>(items: &[T], render: impl Fn(&T) -> String, delimiter: &str) -> String {
    items
        .chunk_by(|a, b| a == b)
        .map(|run| run.iter().map(&render).collect::<String>())
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Renders ranks, grouping consecutive equal ranks.
///
/// ```
/// use president::format::{RankSymbols, format_ranks};
///
/// let symbols = RankSymbols::classic();
/// assert_eq!(format_ranks(&[11, 11, 0], &symbols, "."), "AA.3");
/// ```
#[must_use]
pub fn format_ranks(ranks: &[Rank], symbols: &RankSymbols, delimiter: &str) -> String {
    group_runs(ranks, |&rank| symbols.symbol(rank).to_string(), delimiter)
}

/// Renders a hand with the default delimiter.
#[must_use]
pub fn format_hand(hand: &Hand, symbols: &RankSymbols) -> String {
    format_ranks(hand.cards(), symbols, DELIMITER)
}

/// Renders a pose as its glued symbols, e.g. `KK`.
#[must_use]
pub fn format_pose(pose: &Pose, symbols: &RankSymbols) -> String {
    symbols.symbol(pose.rank()).repeat(pose.len())
}

/// Renders an action log, grouping consecutive equal actions.
///
/// ```
/// use president::format::{Action, RankSymbols, format_actions};
/// use president::hand::Pose;
///
/// let symbols = RankSymbols::classic();
/// let log = [
///     Action::Play(Pose::of(5, 1).unwrap()),
///     Action::Pass,
///     Action::Pass,
///     Action::Violator,
/// ];
/// assert_eq!(format_actions(&log, &symbols, "."), "8.--.X");
/// ```
#[must_use]
pub fn format_actions(actions: &[Action], symbols: &RankSymbols, delimiter: &str) -> String {
    group_runs(
        actions,
        |action| match action {
            Action::Play(pose) => format_pose(pose, symbols),
            Action::Pass => PASS_SYMBOL.to_string(),
            Action::Jumped => JUMPED_SYMBOL.to_string(),
            Action::Violator => VIOLATOR_SYMBOL.to_string(),
        },
        delimiter,
    )
}
