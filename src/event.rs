//! Round events, observer sinks and the human-readable event log.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::format::{Action, DELIMITER, RankSymbols, format_actions, format_hand, format_pose};
use crate::hand::{Hand, Pose};
use crate::result::Violation;
use crate::role::Role;
use crate::strategy::Move;

/// Something that happened during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Hands right after the deal.
    Dealt {
        /// One hand per seat.
        hands: Vec<Hand>,
    },
    /// Hands right after the role exchange.
    Exchanged {
        /// One hand per seat.
        hands: Vec<Hand>,
    },
    /// A pose was accepted.
    Played {
        /// Seat index.
        player: usize,
        /// The pose.
        pose: Pose,
        /// The hand before the pose left it.
        hand: Hand,
    },
    /// A player passed and left the trick.
    Passed {
        /// Seat index.
        player: usize,
    },
    /// A player passed under jump risk and stays in the trick.
    Jumped {
        /// Seat index.
        player: usize,
    },
    /// A player was removed for a violation.
    Violated {
        /// The violation.
        violation: Violation,
        /// What the strategy answered, if it answered at all.
        attempted: Option<Move>,
    },
    /// Four identical ranks in a row gave the lead to `player`.
    Cut {
        /// Seat index.
        player: usize,
    },
    /// A top-rank pose gave the lead to `player`.
    AutoLead {
        /// Seat index.
        player: usize,
    },
    /// The trick was cleared and `player` leads the next one.
    LeadTaken {
        /// Seat index.
        player: usize,
    },
    /// A player emptied their hand.
    Finished {
        /// Seat index.
        player: usize,
        /// Zero-based finishing place.
        place: usize,
    },
    /// The round is complete.
    RoundOver {
        /// Finishers then violators.
        ranking: Vec<usize>,
    },
}

/// A sink for round events, called synchronously on the engine's thread.
pub trait RoundObserver {
    /// Receives one event.
    fn on_event(&mut self, event: &RoundEvent);
}

impl<F> RoundObserver for F
where
    F: FnMut(&RoundEvent),
{
    fn on_event(&mut self, event: &RoundEvent) {
        self(event);
    }
}

/// Builds the text log returned in [`RoundResult::event_log`](crate::RoundResult::event_log).
#[derive(Debug, Clone)]
pub struct EventLog {
    labels: Vec<String>,
    roles: Vec<Role>,
    symbols: RankSymbols,
    lines: Vec<String>,
    actions: Vec<Action>,
}

impl EventLog {
    /// Creates a log for seats named `names` holding `roles`.
    #[must_use]
    pub fn new(names: &[&str], roles: Vec<Role>, symbols: RankSymbols) -> Self {
        Self {
            labels: names
                .iter()
                .enumerate()
                .map(|(seat, name)| format!("{seat}_{name}"))
                .collect(),
            roles,
            symbols,
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    fn label(&self, player: usize) -> &str {
        self.labels.get(player).map_or("?", String::as_str)
    }

    fn seat(&self, player: usize) -> String {
        match self.roles.get(player) {
            Some(role) => format!("{} ({role})", self.label(player)),
            None => self.label(player).into(),
        }
    }

    fn table(&self, title: &str, hands: &[Hand]) -> String {
        let seats: Vec<String> = hands
            .iter()
            .enumerate()
            .map(|(player, hand)| {
                format!("{}: {}", self.seat(player), format_hand(hand, &self.symbols))
            })
            .collect();
        format!("{title}: {}", seats.join(" | "))
    }

    /// Appends the line for `event`.
    pub fn record(&mut self, event: &RoundEvent) {
        let line = match event {
            RoundEvent::Dealt { hands } => self.table("initial hands", hands),
            RoundEvent::Exchanged { hands } => self.table("hands after exchange", hands),
            RoundEvent::Played { player, pose, hand } => {
                self.actions.push(Action::Play(*pose));
                format!(
                    "{} with {} plays {}",
                    self.label(*player),
                    format_hand(hand, &self.symbols),
                    format_pose(pose, &self.symbols)
                )
            }
            RoundEvent::Passed { player } => {
                self.actions.push(Action::Pass);
                format!("{} passes", self.label(*player))
            }
            RoundEvent::Jumped { player } => {
                self.actions.push(Action::Jumped);
                format!("{} is jumped", self.label(*player))
            }
            RoundEvent::Violated {
                violation,
                attempted,
            } => {
                self.actions.push(Action::Violator);
                let attempt = match attempted {
                    Some(Move::Play(cards)) => format!(" after trying {cards:?}"),
                    Some(Move::Pass) => String::from(" after passing"),
                    None => String::new(),
                };
                format!(
                    "{} is removed from the round{attempt}: {}",
                    self.label(violation.player),
                    violation.kind
                )
            }
            RoundEvent::Cut { player } => format!("cut by {}", self.label(*player)),
            RoundEvent::AutoLead { player } => {
                format!("{} plays the top rank", self.label(*player))
            }
            RoundEvent::LeadTaken { player } => format!("{} takes the lead", self.seat(*player)),
            RoundEvent::Finished { player, place } => {
                format!("{} finishes in place {}", self.seat(*player), place + 1)
            }
            RoundEvent::RoundOver { ranking } => {
                let seats: Vec<String> = ranking.iter().map(|&p| self.seat(p)).collect();
                format!("final ranking: {}", seats.join(", "))
            }
        };
        self.lines.push(line);
    }

    /// Returns the compact action log, e.g. `3.4.--.88`.
    #[must_use]
    pub fn actions(&self) -> String {
        format_actions(&self.actions, &self.symbols, DELIMITER)
    }

    /// Renders every line, followed by the action log.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if !self.actions.is_empty() {
            out.push_str("\nactions: ");
            out.push_str(&self.actions());
        }
        out
    }
}

impl RoundObserver for EventLog {
    fn on_event(&mut self, event: &RoundEvent) {
        self.record(event);
    }
}
