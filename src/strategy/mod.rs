//! The contract between the engine and player implementations.
//!
//! A strategy only ever sees owned snapshots of the round and answers with a
//! [`Move`]. It may answer badly, panic, or never answer at all: the engine
//! runs every call on a worker thread with a time budget and treats any of
//! these as a violation.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::card::Rank;
use crate::hand::{Board, Hand, Pose};

mod aggressive;
mod conservative;

pub use aggressive::Aggressive;
pub use conservative::Conservative;

/// A strategy's answer for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// Play nothing this turn.
    Pass,
    /// Play these cards. The engine checks they form a valid pose.
    Play(Vec<Rank>),
}

impl Move {
    /// Plays `count` copies of `rank`.
    #[must_use]
    pub fn repeat(rank: Rank, count: usize) -> Self {
        Self::Play(alloc::vec![rank; count])
    }
}

impl From<Pose> for Move {
    fn from(pose: Pose) -> Self {
        Self::Play(pose.cards())
    }
}

/// Everything a strategy may look at when deciding a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    /// The deciding player's hand.
    pub hand: Hand,
    /// Poses of the current trick; empty when the player has the lead.
    pub board: Board,
    /// Whether the player must match the board top exactly or be jumped.
    pub jump_risk: bool,
    /// Every rank played so far this round, sorted.
    pub played: Vec<Rank>,
}

/// A player implementation.
///
/// Only [`decide`](Strategy::decide) and [`name`](Strategy::name) are
/// required. The exchange defaults give away the lowest cards.
pub trait Strategy: Send {
    /// Identity used in logs and results.
    fn name(&self) -> &str;

    /// Chooses a move. Returning [`Move::Pass`] with the lead is illegal.
    fn decide(&mut self, view: &TurnView) -> Move;

    /// Called with the player's hand after the deal and after the exchange.
    fn receive_hand(&mut self, _hand: &Hand) {}

    /// As President, chooses the two cards returned to the Bottom.
    ///
    /// `hand` already contains the Bottom's two best cards.
    fn exchange_high_cards(&mut self, hand: &Hand) -> Vec<Rank> {
        hand.lowest(2)
    }

    /// As Vice-President, chooses the card returned to the Vice-Bottom.
    ///
    /// `hand` already contains the Vice-Bottom's best card.
    fn exchange_one_card(&mut self, hand: &Hand) -> Rank {
        hand.lowest_rank().unwrap_or_default()
    }
}

/// Home of a seat's strategy between calls.
///
/// A call leases the strategy out of the cell and the lease puts it back when
/// dropped. A call that outlives its time budget keeps the strategy until it
/// returns, and calls made meanwhile find the cell empty instead of waiting.
pub(crate) struct StrategyCell(Mutex<Option<Box<dyn Strategy>>>);

impl StrategyCell {
    fn slot(&self) -> MutexGuard<'_, Option<Box<dyn Strategy>>> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes the strategy out for one call, or `None` while it is out.
    pub(crate) fn lease(self: &Arc<Self>) -> Option<Lease> {
        let strategy = self.slot().take()?;
        Some(Lease {
            cell: Arc::clone(self),
            strategy: Some(strategy),
        })
    }
}

/// A strategy taken out of its [`StrategyCell`].
pub(crate) struct Lease {
    cell: Arc<StrategyCell>,
    strategy: Option<Box<dyn Strategy>>,
}

impl Lease {
    pub(crate) fn strategy(&mut self) -> Option<&mut (dyn Strategy + 'static)> {
        self.strategy.as_deref_mut()
    }
}

impl Drop for Lease {
    fn drop(&mut self) {
        if let Some(strategy) = self.strategy.take() {
            *self.cell.slot() = Some(strategy);
        }
    }
}

/// A seat's strategy, shareable between rounds and worker threads.
#[derive(Clone)]
pub struct Player {
    name: String,
    strategy: Arc<StrategyCell>,
}

impl Player {
    /// Wraps a strategy.
    #[must_use]
    pub fn new(strategy: impl Strategy + 'static) -> Self {
        let name = strategy.name().to_string();
        let strategy: Box<dyn Strategy> = Box::new(strategy);
        Self {
            name,
            strategy: Arc::new(StrategyCell(Mutex::new(Some(strategy)))),
        }
    }

    /// Returns the strategy's name, captured when the player was created.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn strategy(&self) -> Arc<StrategyCell> {
        Arc::clone(&self.strategy)
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player").field("name", &self.name).finish()
    }
}

/// Leads with every copy of the lowest rank held.
pub(crate) fn lead_lowest(hand: &Hand) -> Move {
    hand.lowest_rank()
        .map_or(Move::Pass, |rank| Move::repeat(rank, hand.count(rank)))
}

/// Lowest rank held exactly `arity` times that may follow `top`.
///
/// Under jump risk only the top's own rank qualifies.
pub(crate) fn lowest_follow(hand: &Hand, top: &Pose, arity: usize, jump_risk: bool) -> Option<Rank> {
    hand.counts()
        .into_iter()
        .filter(|&(_, count)| count == arity)
        .map(|(rank, _)| rank)
        .find(|&rank| {
            if jump_risk {
                rank == top.rank()
            } else {
                rank >= top.rank()
            }
        })
}
