use alloc::format;
use alloc::vec::Vec;

use crate::card::Rank;
use crate::event::RoundEvent;
use crate::format::{RankSymbols, format_hand};
use crate::hand::Hand;

use super::{Round, worker};

impl Round {
    /// Splits `deck` into contiguous sorted shares.
    ///
    /// Seat `i` gets `deck[i * len / n..(i + 1) * len / n]`.
    pub(super) fn deal(&mut self, deck: &[Rank]) {
        let seats = self.options.players;
        let len = deck.len();
        self.hands = (0..seats)
            .map(|seat| Hand::new(deck[seat * len / seats..(seat + 1) * len / seats].to_vec()))
            .collect();
        self.initial_hands = self.hands.clone();

        if log::log_enabled!(log::Level::Info) {
            let symbols = RankSymbols::for_ranks(self.options.ranks);
            for (seat, hand) in self.hands.iter().enumerate() {
                log::info!(
                    "{:<32}{}",
                    format!("dealt seat {seat} ({})", self.roles[seat]),
                    format_hand(hand, &symbols)
                );
            }
        }

        self.emit(RoundEvent::Dealt {
            hands: self.hands.clone(),
        });
        self.hand_over();
    }

    /// Tells every strategy its current hand.
    ///
    /// A strategy that fails here is not penalised yet; a broken strategy
    /// faults again on its first turn.
    pub(super) fn hand_over(&self) {
        let calls: Vec<_> = self
            .players
            .iter()
            .zip(&self.hands)
            .enumerate()
            .map(|(seat, (player, hand))| (seat, player.strategy(), hand.clone()))
            .collect();

        for (seat, strategy, hand) in calls {
            let delivered = worker::call(strategy, seat, self.options.turn_timeout, move |s| {
                s.receive_hand(&hand);
            });
            if let Err(fault) = delivered {
                log::warn!("seat {seat} could not receive its hand: {fault}");
            }
        }
    }
}
