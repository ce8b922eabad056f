//! Error types for round operations.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use thiserror::Error;

use crate::card::Rank;
use crate::hand::Pose;
use crate::result::Violation;
use crate::role::Role;

/// Errors that abort round construction before any card is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Fewer than two players.
    #[error("a round needs at least two players, got {0}")]
    TooFewPlayers(usize),
    /// No ranks in the deck.
    #[error("a deck needs at least one rank")]
    NoRanks,
    /// Strategy count does not match the player count.
    #[error("expected {expected} strategies, got {actual}")]
    StrategyCount {
        /// Configured player count.
        expected: usize,
        /// Number of strategies supplied.
        actual: usize,
    },
    /// Role count does not match the player count.
    #[error("expected {expected} roles, got {actual}")]
    RoleCount {
        /// Configured player count.
        expected: usize,
        /// Number of roles supplied.
        actual: usize,
    },
    /// The supplied deck is not a permutation of the full deck.
    #[error("supplied deck is not a full deck of {ranks} ranks")]
    DeckMismatch {
        /// Configured rank count.
        ranks: u8,
    },
    /// Not enough cards to give every player a playable share.
    #[error("a deck of {cards} cards is too small for {players} players")]
    DeckTooSmall {
        /// Deck size.
        cards: usize,
        /// Player count.
        players: usize,
    },
    /// The role set only partially matches the exchange hierarchy.
    #[error("inconsistent role set: {0:?}")]
    InconsistentRoles(Vec<Role>),
    /// An exchange returned the wrong number of cards.
    #[error("player {player} ({role}) must give {expected} card(s), gave {actual}")]
    ExchangeCount {
        /// Seat index of the giving player.
        player: usize,
        /// Role of the giving player.
        role: Role,
        /// Number of cards the role must give.
        expected: usize,
        /// Number of cards returned by the strategy.
        actual: usize,
    },
    /// An exchange tried to give away cards the player does not hold.
    #[error("player {player} ({role}) tried to give cards it does not hold: {cards:?}")]
    ExchangeNotHeld {
        /// Seat index of the giving player.
        player: usize,
        /// Role of the giving player.
        role: Role,
        /// The cards the strategy chose.
        cards: Vec<Rank>,
    },
}

/// Errors raised when building a [`Pose`] from raw cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoseError {
    /// No cards.
    #[error("empty pose")]
    Empty,
    /// Cards of different ranks.
    #[error("pose mixes ranks")]
    MixedRanks,
    /// More cards than copies of a rank exist.
    #[error("pose of {0} cards exceeds four of a kind")]
    TooManyCards(usize),
    /// Rank outside the deck.
    #[error("rank {rank} is outside the deck of {ranks} ranks")]
    RankOutOfRange {
        /// The offending rank.
        rank: Rank,
        /// Rank count of the deck.
        ranks: u8,
    },
}

/// A strategy call that did not produce a usable answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnFault {
    /// The call did not return within the turn budget.
    #[error("no answer within {0:?}")]
    Timeout(Duration),
    /// The call panicked.
    #[error("strategy panicked: {0}")]
    Panicked(String),
    /// The call returned a structurally invalid pose.
    #[error("malformed pose: {0}")]
    Malformed(PoseError),
    /// The worker thread could not run the call.
    #[error("strategy worker unavailable: {0}")]
    Unavailable(String),
    /// The strategy is still running a call the engine gave up on.
    #[error("strategy is still busy with an abandoned call")]
    Busy,
}

/// A well-formed pose that breaks the rules of the trick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    /// Passing while holding the lead.
    #[error("passed while holding the lead")]
    PassOnLead,
    /// Rank below the top of the board.
    #[error("rank {rank} is below the board top {top}")]
    BelowBoard {
        /// Rank played.
        rank: Rank,
        /// Rank at the top of the board.
        top: Rank,
    },
    /// Anything but an exact repeat while a jump is pending.
    #[error("jump pending: expected {expected}, got {played}")]
    JumpMismatch {
        /// The board top that had to be matched.
        expected: Pose,
        /// What was played instead.
        played: Pose,
    },
    /// Cards not in the player's hand.
    #[error("cards not held: {0}")]
    NotHeld(Pose),
}

/// Rules the engine recognises but does not implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Four of a kind played at once.
    Revolution,
}

impl core::fmt::Display for Rule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Revolution => f.write_str("revolution"),
        }
    }
}

/// Errors that stop a round in progress.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A play triggered a rule this engine does not implement.
    #[error("unsupported rule: {rule} by player {player} playing {pose}")]
    UnsupportedRule {
        /// The rule that was triggered.
        rule: Rule,
        /// Seat index of the player.
        player: usize,
        /// The pose that triggered it.
        pose: Pose,
    },
    /// A violation under [`ViolationPolicy::Raise`](crate::options::ViolationPolicy::Raise).
    #[error("player {} violated the rules: {}", .0.player, .0.kind)]
    Violation(Violation),
    /// The round has already finished or failed.
    #[error("the round is over")]
    RoundOver,
}

/// Any error from setting up or playing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The round could not be set up.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The round stopped before producing a ranking.
    #[error(transparent)]
    Round(#[from] RoundError),
}
