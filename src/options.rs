//! Round configuration options.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use crate::card::{CLASSIC_RANKS, Rank};
use crate::role::Role;

/// What the engine does when a player faults or plays illegally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ViolationPolicy {
    /// Remove the player from the round and rank them last.
    #[default]
    Penalize,
    /// Stop the round with [`RoundError::Violation`](crate::RoundError::Violation).
    Raise,
}

/// Default time a strategy gets to answer one call.
pub const DEFAULT_TURN_TIMEOUT: Duration = Duration::from_secs(3);

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use president::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_players(5)
///     .with_turn_timeout(Duration::from_millis(500))
///     .with_record_events(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    /// Number of players.
    pub players: usize,
    /// Number of ranks; the deck holds four cards of each.
    pub ranks: u8,
    /// Role per seat. `None` uses [`Role::default_assignment`].
    pub roles: Option<Vec<Role>>,
    /// Pre-shuffled deck, dealt as is. `None` shuffles from the round seed.
    pub deck: Option<Vec<Rank>>,
    /// Time budget for a single strategy call.
    pub turn_timeout: Duration,
    /// Whether the round produces a human-readable event log.
    pub record_events: bool,
    /// Handling of faulty and illegal moves.
    pub violation_policy: ViolationPolicy,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            players: 4,
            ranks: CLASSIC_RANKS,
            roles: None,
            deck: None,
            turn_timeout: DEFAULT_TURN_TIMEOUT,
            record_events: true,
            violation_policy: ViolationPolicy::Penalize,
        }
    }
}

impl RoundOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use president::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_players(6);
    /// assert_eq!(options.players, 6);
    /// ```
    #[must_use]
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets the number of ranks.
    ///
    /// # Example
    ///
    /// ```
    /// use president::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_ranks(8);
    /// assert_eq!(options.ranks, 8);
    /// ```
    #[must_use]
    pub fn with_ranks(mut self, ranks: u8) -> Self {
        self.ranks = ranks;
        self
    }

    /// Sets the role of every seat.
    ///
    /// # Example
    ///
    /// ```
    /// use president::{Role, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_roles(vec![Role::Neutral; 4]);
    /// assert_eq!(options.roles.as_deref(), Some(&[Role::Neutral; 4][..]));
    /// ```
    #[must_use]
    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Sets the deck to deal, skipping the shuffle.
    ///
    /// Seat `i` receives the cards between `i * len / players` and
    /// `(i + 1) * len / players`.
    ///
    /// # Example
    ///
    /// ```
    /// use president::RoundOptions;
    /// use president::card::full_deck;
    ///
    /// let options = RoundOptions::default().with_ranks(2).with_deck(full_deck(2));
    /// assert_eq!(options.deck.map(|d| d.len()), Some(8));
    /// ```
    #[must_use]
    pub fn with_deck(mut self, deck: Vec<Rank>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Sets the time budget for a single strategy call.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use president::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_turn_timeout(Duration::from_secs(1));
    /// assert_eq!(options.turn_timeout, Duration::from_secs(1));
    /// ```
    #[must_use]
    pub fn with_turn_timeout(mut self, timeout: Duration) -> Self {
        self.turn_timeout = timeout;
        self
    }

    /// Sets whether the round produces a human-readable event log.
    ///
    /// # Example
    ///
    /// ```
    /// use president::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_record_events(false);
    /// assert!(!options.record_events);
    /// ```
    #[must_use]
    pub fn with_record_events(mut self, record: bool) -> Self {
        self.record_events = record;
        self
    }

    /// Sets the handling of faulty and illegal moves.
    ///
    /// # Example
    ///
    /// ```
    /// use president::{RoundOptions, ViolationPolicy};
    ///
    /// let options = RoundOptions::default().with_violation_policy(ViolationPolicy::Raise);
    /// assert_eq!(options.violation_policy, ViolationPolicy::Raise);
    /// ```
    #[must_use]
    pub fn with_violation_policy(mut self, policy: ViolationPolicy) -> Self {
        self.violation_policy = policy;
        self
    }

    /// Returns the configured roles, or the default assignment.
    #[must_use]
    pub fn resolved_roles(&self) -> Vec<Role> {
        self.roles
            .clone()
            .unwrap_or_else(|| Role::default_assignment(self.players))
    }
}
