//! Round engine and state management.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Rank, deck_size, full_deck, is_full_deck};
use crate::error::{ConfigError, Error};
use crate::event::{EventLog, RoundEvent, RoundObserver};
use crate::format::RankSymbols;
use crate::hand::{Board, Hand, Pose};
use crate::options::RoundOptions;
use crate::result::{RoundResult, Violation};
use crate::role::{ExchangeSeats, Role};
use crate::strategy::Player;

mod deal;
mod exchange;
pub mod state;
mod turn;
mod worker;

pub use state::{Phase, TrickState};
pub use turn::TurnOutcome;

/// One round of President: deal, exchange, tricks, ranking.
///
/// The round owns every hand and the board. Strategies only see copies,
/// handed to them on worker threads, so a misbehaving strategy cannot reach
/// the authoritative state.
pub struct Round {
    /// Round options.
    options: RoundOptions,
    /// Seated strategies.
    players: Vec<Player>,
    /// Role per seat.
    roles: Vec<Role>,
    /// Current phase.
    phase: Phase,
    /// Hands as dealt, before the exchange.
    initial_hands: Vec<Hand>,
    /// Current hands.
    hands: Vec<Hand>,
    /// Trick in progress.
    trick: TrickState,
    /// Seats that may still act in this trick, in turn order.
    active_in_trick: Vec<usize>,
    /// Seats that have neither finished nor been removed.
    still_playing: Vec<usize>,
    /// Seat whose turn it is.
    current: usize,
    /// Seats that emptied their hand, in order.
    finish_order: Vec<usize>,
    /// Removed seats, in the order they were caught.
    violations: Vec<Violation>,
    /// Every rank played this round, sorted.
    played: Vec<Rank>,
    /// Cards taken out of circulation with violators.
    discarded: Vec<Rank>,
    /// Poses of every completed trick.
    trick_history: Vec<Vec<Pose>>,
    /// Text log, when recording is enabled.
    event_log: Option<EventLog>,
    /// External event sink.
    observer: Option<Box<dyn RoundObserver>>,
}

impl Round {
    /// Deals a round and performs the role exchange.
    ///
    /// The deck is `options.deck` when set, otherwise a full deck shuffled
    /// with a generator seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table, roles or deck are inconsistent, or if an
    /// exchange strategy gives away cards it does not hold.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use president::{Conservative, Player, Round, RoundOptions};
    ///
    /// let players = (0..4).map(|_| Player::new(Conservative)).collect();
    /// let mut round = Round::new(RoundOptions::default(), players, 42).unwrap();
    /// let result = round.play();
    /// let _ = result;
    /// ```
    pub fn new(options: RoundOptions, players: Vec<Player>, seed: u64) -> Result<Self, ConfigError> {
        Self::build(options, players, seed, None)
    }

    /// Like [`Round::new`], reporting every event to `observer`, including
    /// the deal and the exchange.
    ///
    /// # Errors
    ///
    /// Same as [`Round::new`].
    pub fn new_observed(
        options: RoundOptions,
        players: Vec<Player>,
        seed: u64,
        observer: impl RoundObserver + 'static,
    ) -> Result<Self, ConfigError> {
        Self::build(options, players, seed, Some(Box::new(observer)))
    }

    fn build(
        options: RoundOptions,
        players: Vec<Player>,
        seed: u64,
        observer: Option<Box<dyn RoundObserver>>,
    ) -> Result<Self, ConfigError> {
        let (roles, exchange) = Self::validate(&options, &players)?;
        let deck = match &options.deck {
            Some(deck) => deck.clone(),
            None => Self::shuffled_deck(options.ranks, seed),
        };

        let event_log = options.record_events.then(|| {
            let names: Vec<&str> = players.iter().map(Player::name).collect();
            EventLog::new(&names, roles.clone(), RankSymbols::for_ranks(options.ranks))
        });
        let seats: Vec<usize> = (0..options.players).collect();

        let mut round = Self {
            options,
            players,
            roles,
            phase: Phase::Dealing,
            initial_hands: Vec::new(),
            hands: Vec::new(),
            trick: TrickState::default(),
            active_in_trick: seats.clone(),
            still_playing: seats,
            current: 0,
            finish_order: Vec::new(),
            violations: Vec::new(),
            played: Vec::new(),
            discarded: Vec::new(),
            trick_history: Vec::new(),
            event_log,
            observer,
        };

        round.deal(&deck);
        if let Some(seats) = exchange {
            round.phase = Phase::Exchanging;
            round.exchange(seats)?;
        }
        round.phase = Phase::TrickPlay;
        Ok(round)
    }

    fn validate(
        options: &RoundOptions,
        players: &[Player],
    ) -> Result<(Vec<Role>, Option<ExchangeSeats>), ConfigError> {
        if options.players < 2 {
            return Err(ConfigError::TooFewPlayers(options.players));
        }
        if options.ranks == 0 {
            return Err(ConfigError::NoRanks);
        }
        if players.len() != options.players {
            return Err(ConfigError::StrategyCount {
                expected: options.players,
                actual: players.len(),
            });
        }

        let roles = options.resolved_roles();
        if roles.len() != options.players {
            return Err(ConfigError::RoleCount {
                expected: options.players,
                actual: roles.len(),
            });
        }
        let exchange = ExchangeSeats::resolve(&roles)?;

        if let Some(deck) = &options.deck {
            if !is_full_deck(deck, options.ranks) {
                return Err(ConfigError::DeckMismatch {
                    ranks: options.ranks,
                });
            }
        }
        let cards = deck_size(options.ranks);
        if cards < 2 * options.players {
            return Err(ConfigError::DeckTooSmall {
                cards,
                players: options.players,
            });
        }

        Ok((roles, exchange))
    }

    /// Creates and shuffles a full deck.
    fn shuffled_deck(ranks: u8, seed: u64) -> Vec<Rank> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = full_deck(ranks);
        cards.shuffle(&mut rng);
        cards
    }

    fn emit(&mut self, event: RoundEvent) {
        if let Some(log) = self.event_log.as_mut() {
            log.record(&event);
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the role of every seat.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns the seated players.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the hands as dealt, before the exchange.
    #[must_use]
    pub fn initial_hands(&self) -> &[Hand] {
        &self.initial_hands
    }

    /// Returns every current hand.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the current hand of `player`.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns the seat whose turn it is, while tricks are being played.
    #[must_use]
    pub fn current_player(&self) -> Option<usize> {
        (self.phase == Phase::TrickPlay).then_some(self.current)
    }

    /// Returns the board of the trick in progress.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.trick.board
    }

    /// Returns whether the next player must repeat the top pose.
    #[must_use]
    pub const fn jump_risk(&self) -> bool {
        self.trick.jump_risk
    }

    /// Returns the number of cards in the run of identical top poses.
    #[must_use]
    pub const fn same_rank_streak(&self) -> usize {
        self.trick.same_rank_streak
    }

    /// Returns the seats still in the trick, in turn order.
    #[must_use]
    pub fn active_in_trick(&self) -> &[usize] {
        &self.active_in_trick
    }

    /// Returns the seats that have neither finished nor been removed.
    #[must_use]
    pub fn still_playing(&self) -> &[usize] {
        &self.still_playing
    }

    /// Returns the seats that finished so far.
    #[must_use]
    pub fn finish_order(&self) -> &[usize] {
        &self.finish_order
    }

    /// Returns the violations so far.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the removed seats, in the order they were caught.
    #[must_use]
    pub fn violators(&self) -> Vec<usize> {
        self.violations.iter().map(|v| v.player).collect()
    }

    /// Returns every rank played so far, sorted.
    #[must_use]
    pub fn played(&self) -> &[Rank] {
        &self.played
    }

    /// Returns the number of cards accounted for: hands, played and discarded.
    ///
    /// Always equals the deck size.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>() + self.played.len() + self.discarded.len()
    }

    /// Returns the result once the round is done.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        if self.phase != Phase::Done {
            return None;
        }
        Some(RoundResult {
            finish_order: self.finish_order.clone(),
            violators: self.violators(),
            violations: self.violations.clone(),
            trick_history: self.trick_history.clone(),
            played: self.played.clone(),
            discarded: self.discarded.clone(),
            final_hands: self.hands.clone(),
            event_log: self.event_log.as_ref().map(EventLog::render),
        })
    }
}

/// Deals, exchanges and plays a full round.
///
/// # Errors
///
/// Returns [`Error::Config`] if the round cannot be set up and
/// [`Error::Round`] if it stops before producing a ranking.
///
/// # Example
///
/// ```no_run
/// use president::{Aggressive, Player, RoundOptions, play_round};
///
/// let players = (0..5).map(|_| Player::new(Aggressive)).collect();
/// let options = RoundOptions::default().with_players(5);
/// match play_round(options, players, 7) {
///     Ok(result) => println!("{:?}", result.ranking()),
///     Err(err) => println!("no ranking: {err}"),
/// }
/// ```
pub fn play_round(options: RoundOptions, players: Vec<Player>, seed: u64) -> Result<RoundResult, Error> {
    let mut round = Round::new(options, players, seed)?;
    Ok(round.play()?)
}

impl core::fmt::Debug for Round {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Round")
            .field("phase", &self.phase)
            .field("roles", &self.roles)
            .field("hands", &self.hands)
            .field("trick", &self.trick)
            .field("current", &self.current)
            .field("active_in_trick", &self.active_in_trick)
            .field("still_playing", &self.still_playing)
            .field("finish_order", &self.finish_order)
            .field("violations", &self.violations)
            .finish_non_exhaustive()
    }
}
