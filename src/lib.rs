//! A round engine for President, the climbing card game.
//!
//! The crate provides a [`Round`] type that deals a deck between seats,
//! performs the role exchange, drives tricks turn by turn and ranks the
//! players. Each seat is driven by a [`Strategy`]; strategy calls run on
//! worker threads under a time budget, and a strategy that cheats, panics
//! or stalls is removed from the round and ranked last.
//!
//! # Example
//!
//! ```no_run
//! use president::{Aggressive, Conservative, Player, Round, RoundOptions};
//!
//! let players = vec![
//!     Player::new(Conservative),
//!     Player::new(Aggressive),
//!     Player::new(Conservative),
//!     Player::new(Aggressive),
//! ];
//! let mut round = Round::new(RoundOptions::default(), players, 42).unwrap();
//! match round.play() {
//!     Ok(result) => println!("ranking: {:?}", result.ranking()),
//!     Err(err) => println!("round stopped: {err}"),
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod format;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod role;
pub mod strategy;

// Re-export main types
pub use card::{Rank, SUIT_COUNT};
pub use error::{ConfigError, Error, IllegalMove, PoseError, RoundError, Rule, TurnFault};
pub use event::{EventLog, RoundEvent, RoundObserver};
pub use game::{Phase, Round, TurnOutcome, play_round};
pub use hand::{Board, Hand, Pose};
pub use options::{RoundOptions, ViolationPolicy};
pub use result::{RoundResult, Violation, ViolationKind};
pub use role::Role;
pub use strategy::{Aggressive, Conservative, Move, Player, Strategy, TurnView};
