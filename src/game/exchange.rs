use alloc::vec;
use alloc::vec::Vec;

use crate::card::Rank;
use crate::error::ConfigError;
use crate::event::RoundEvent;
use crate::role::ExchangeSeats;

use super::{Round, worker};

impl Round {
    /// Performs the President and Vice-President exchanges.
    pub(super) fn exchange(&mut self, seats: ExchangeSeats) -> Result<(), ConfigError> {
        self.swap_cards(seats.bottom, seats.president, 2)?;
        self.swap_cards(seats.vice_bottom, seats.vice_president, 1)?;

        log::info!(
            "exchange done: seat {} <-> seat {}, seat {} <-> seat {}",
            seats.bottom,
            seats.president,
            seats.vice_bottom,
            seats.vice_president
        );
        debug_assert_eq!(self.card_count(), crate::card::deck_size(self.options.ranks));

        self.emit(RoundEvent::Exchanged {
            hands: self.hands.clone(),
        });
        self.hand_over();
        Ok(())
    }

    /// The lower seat hands its `count` best cards up; the upper seat picks
    /// `count` cards from its enlarged hand to hand back down.
    fn swap_cards(&mut self, lower: usize, upper: usize, count: usize) -> Result<(), ConfigError> {
        let given = self.hands[lower].take_highest(count);
        self.hands[upper].add(&given);

        let role = self.roles[upper];
        let hand = self.hands[upper].clone();
        let strategy = self.players[upper].strategy();
        let timeout = self.options.turn_timeout;
        let answer = if count == 1 {
            worker::call(strategy, upper, timeout, move |s| {
                vec![s.exchange_one_card(&hand)]
            })
        } else {
            worker::call(strategy, upper, timeout, move |s| s.exchange_high_cards(&hand))
        };
        let returned: Vec<Rank> = match answer {
            Ok(returned) => returned,
            Err(fault) => {
                log::warn!("seat {upper} ({role}) exchange fell back to the lowest cards: {fault}");
                self.hands[upper].lowest(count)
            }
        };

        if returned.len() != count {
            return Err(ConfigError::ExchangeCount {
                player: upper,
                role,
                expected: count,
                actual: returned.len(),
            });
        }
        if !self.hands[upper].remove(&returned) {
            return Err(ConfigError::ExchangeNotHeld {
                player: upper,
                role,
                cards: returned,
            });
        }
        self.hands[lower].add(&returned);

        log::debug!("seat {lower} gave {given:?} to seat {upper}, got back {returned:?}");
        Ok(())
    }
}
