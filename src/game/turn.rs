use alloc::vec;
use alloc::vec::Vec;

use crate::card::{SUIT_COUNT, deck_size};
use crate::error::{IllegalMove, PoseError, RoundError, Rule, TurnFault};
use crate::event::RoundEvent;
use crate::format::Action;
use crate::hand::Pose;
use crate::options::ViolationPolicy;
use crate::result::{RoundResult, Violation, ViolationKind};
use crate::strategy::{Move, TurnView};

use super::{Phase, Round, worker};

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Seat that acted.
    pub player: usize,
    /// What the seat's turn amounted to.
    pub action: Action,
    /// Seat leading the next trick, when the turn ended the trick.
    pub lead: Option<usize>,
}

impl Round {
    /// Plays turns until the round is over and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::UnsupportedRule`] if a player puts down four of a
    /// kind, [`RoundError::Violation`] on the first violation under
    /// [`ViolationPolicy::Raise`], and [`RoundError::RoundOver`] if the round
    /// already stopped on an error.
    pub fn play(&mut self) -> Result<RoundResult, RoundError> {
        while self.phase == Phase::TrickPlay {
            self.play_turn()?;
        }
        self.result().ok_or(RoundError::RoundOver)
    }

    /// Plays the current seat's turn.
    ///
    /// # Errors
    ///
    /// Same as [`Round::play`]; [`RoundError::RoundOver`] once tricks are
    /// no longer being played.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, RoundError> {
        if self.phase != Phase::TrickPlay {
            return Err(RoundError::RoundOver);
        }

        let player = self.current;
        let next = self.next_after(player);

        let action = match self.ask(player) {
            Err(fault) => self.violate(player, ViolationKind::Fault(fault), None)?,
            Ok(answer) => match self.check(player, &answer) {
                Ok(Some(pose)) => self.apply(player, pose)?,
                Ok(None) => self.pass(player),
                Err(kind) => self.violate(player, kind, Some(answer))?,
            },
        };
        let lead = self.settle_lead(next);

        debug_assert_eq!(self.card_count(), deck_size(self.options.ranks));

        if self.finish_order.len() + self.violations.len() + 1 >= self.options.players {
            self.finalize();
        }

        Ok(TurnOutcome {
            player,
            action,
            lead,
        })
    }

    /// Seat after `player` in the trick's turn order.
    fn next_after(&self, player: usize) -> usize {
        let active = &self.active_in_trick;
        active
            .iter()
            .position(|&seat| seat == player)
            .and_then(|index| active.get((index + 1) % active.len()))
            .copied()
            .unwrap_or(player)
    }

    /// Asks the seat's strategy for a move, on a worker, within the budget.
    fn ask(&self, player: usize) -> Result<Move, TurnFault> {
        let view = TurnView {
            hand: self.hands[player].clone(),
            board: self.trick.board.clone(),
            jump_risk: self.trick.jump_risk,
            played: self.played.clone(),
        };
        worker::call(
            self.players[player].strategy(),
            player,
            self.options.turn_timeout,
            move |strategy| strategy.decide(&view),
        )
    }

    /// Validates an answer. `Ok(None)` is a legal pass.
    fn check(&self, player: usize, answer: &Move) -> Result<Option<Pose>, ViolationKind> {
        let cards = match answer {
            Move::Pass if self.trick.board.is_empty() => {
                return Err(ViolationKind::Illegal(IllegalMove::PassOnLead));
            }
            Move::Pass => return Ok(None),
            Move::Play(cards) => cards,
        };

        let pose = Pose::new(cards).map_err(|e| ViolationKind::Fault(TurnFault::Malformed(e)))?;
        if pose.rank() >= self.options.ranks {
            return Err(ViolationKind::Fault(TurnFault::Malformed(
                PoseError::RankOutOfRange {
                    rank: pose.rank(),
                    ranks: self.options.ranks,
                },
            )));
        }

        if let Some(&top) = self.trick.board.top() {
            if self.trick.jump_risk && pose != top {
                return Err(ViolationKind::Illegal(IllegalMove::JumpMismatch {
                    expected: top,
                    played: pose,
                }));
            }
            if pose.rank() < top.rank() {
                return Err(ViolationKind::Illegal(IllegalMove::BelowBoard {
                    rank: pose.rank(),
                    top: top.rank(),
                }));
            }
        }

        if !self.hands[player].contains_pose(&pose) {
            return Err(ViolationKind::Illegal(IllegalMove::NotHeld(pose)));
        }
        Ok(Some(pose))
    }

    /// Drops `player` from the trick and from the round.
    fn leave(&mut self, player: usize) {
        self.active_in_trick.retain(|&seat| seat != player);
        self.still_playing.retain(|&seat| seat != player);
    }

    /// Ejects `player`. On the lead the highest single card is played for
    /// them first; the rest of the hand is discarded.
    fn violate(
        &mut self,
        player: usize,
        kind: ViolationKind,
        attempted: Option<Move>,
    ) -> Result<Action, RoundError> {
        let fallback = if self.trick.board.is_empty() {
            self.hands[player]
                .highest_rank()
                .map_or(Move::Pass, |rank| Move::repeat(rank, 1))
        } else {
            Move::Pass
        };
        let mut violation = Violation {
            player,
            kind,
            fallback,
            discarded: Vec::new(),
        };
        log::warn!(
            "seat {player} ({}) with {:?} removed from the round: {}",
            self.players[player].name(),
            self.hands[player].cards(),
            violation.kind
        );

        if self.options.violation_policy == ViolationPolicy::Raise {
            self.phase = Phase::Aborted;
            self.emit(RoundEvent::Violated {
                violation: violation.clone(),
                attempted,
            });
            return Err(RoundError::Violation(violation));
        }

        // The fallback lead goes on the board like any play.
        let takes_lead = match &violation.fallback {
            Move::Play(cards) => match Pose::new(cards) {
                Ok(pose) => self.place(player, pose),
                Err(_) => false,
            },
            Move::Pass => false,
        };
        violation.discarded = self.hands[player].take_all();
        self.discarded.extend_from_slice(&violation.discarded);
        self.leave(player);
        if takes_lead {
            self.active_in_trick = vec![player];
        }

        self.emit(RoundEvent::Violated {
            violation: violation.clone(),
            attempted,
        });
        self.violations.push(violation);
        Ok(Action::Violator)
    }

    fn pass(&mut self, player: usize) -> Action {
        if self.trick.jump_risk {
            self.trick.jump_risk = false;
            log::debug!("seat {player} is jumped");
            self.emit(RoundEvent::Jumped { player });
            Action::Jumped
        } else {
            self.active_in_trick.retain(|&seat| seat != player);
            log::debug!("seat {player} passes");
            self.emit(RoundEvent::Passed { player });
            Action::Pass
        }
    }

    fn apply(&mut self, player: usize, pose: Pose) -> Result<Action, RoundError> {
        let takes_lead = self.place(player, pose);

        if self.hands[player].is_empty() {
            let place = self.finish_order.len();
            self.finish_order.push(player);
            self.leave(player);
            log::info!("seat {player} ({}) finishes in place {}", self.roles[player], place + 1);
            self.emit(RoundEvent::Finished { player, place });
        }

        if pose.len() == SUIT_COUNT {
            self.phase = Phase::Aborted;
            log::warn!("revolution by seat {player} with {pose}: not supported");
            return Err(RoundError::UnsupportedRule {
                rule: Rule::Revolution,
                player,
                pose,
            });
        }

        if takes_lead {
            self.active_in_trick = vec![player];
        }
        Ok(Action::Play(pose))
    }

    /// Moves `pose` from the hand to the board. Returns whether the pose wins
    /// the trick outright, by a cut or by the top rank.
    fn place(&mut self, player: usize, pose: Pose) -> bool {
        let hand = self.hands[player].clone();
        let removed = self.hands[player].remove(&pose.cards());
        debug_assert!(removed, "pose was checked against the hand");

        self.trick.push(pose);
        self.played.extend(pose.cards());
        self.played.sort_unstable();
        log::debug!("seat {player} with {:?} plays {pose}", hand.cards());
        self.emit(RoundEvent::Played { player, pose, hand });

        let mut takes_lead = false;
        if self.trick.is_cut() {
            self.trick.jump_risk = false;
            log::info!("cut by seat {player}");
            self.emit(RoundEvent::Cut { player });
            takes_lead = true;
        }
        if pose.rank() == self.options.ranks - 1 {
            log::debug!("seat {player} plays the top rank");
            self.emit(RoundEvent::AutoLead { player });
            takes_lead = true;
        }
        takes_lead
    }

    /// Clears the trick once a single seat is left in it.
    ///
    /// The sole seat leads, unless it just left the round; then the lead goes
    /// to `next`, the seat that followed the current one before the turn.
    fn settle_lead(&mut self, next: usize) -> Option<usize> {
        let &[sole] = self.active_in_trick.as_slice() else {
            self.current = next;
            return None;
        };

        let leader = if self.still_playing.contains(&sole) {
            sole
        } else {
            next
        };
        let trick = self.trick.reset();
        if !trick.is_empty() {
            self.trick_history.push(trick);
        }
        self.active_in_trick = self.still_playing.clone();
        self.current = leader;

        log::info!("seat {leader} ({}) takes the lead", self.roles[leader]);
        self.emit(RoundEvent::LeadTaken { player: leader });
        Some(leader)
    }

    /// Ranks the one seat left and closes the round.
    fn finalize(&mut self) {
        self.phase = Phase::Finalizing;

        let violators = self.violators();
        let last = (0..self.options.players)
            .find(|seat| !self.finish_order.contains(seat) && !violators.contains(seat));
        if let Some(last) = last {
            let place = self.finish_order.len();
            self.finish_order.push(last);
            self.emit(RoundEvent::Finished {
                player: last,
                place,
            });
        }

        if !self.trick.board.is_empty() {
            self.trick_history.push(self.trick.reset());
        }
        self.active_in_trick.clear();
        self.still_playing.clear();

        let ranking: Vec<usize> = self.finish_order.iter().chain(&violators).copied().collect();
        log::info!("final ranking: {ranking:?}");
        self.emit(RoundEvent::RoundOver { ranking });
        self.phase = Phase::Done;
    }
}
