//! Pre-round roles and the card exchange hierarchy.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::error::ConfigError;

/// A player's standing from the previous round.
///
/// Roles only drive the exchange before the deal is played; they are not
/// enforced during tricks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Last place: gives its two best cards to the President.
    Bottom,
    /// First place: receives two cards and returns two of its choice.
    President,
    /// Second to last: gives its best card to the Vice-President.
    ViceBottom,
    /// Second place: receives one card and returns one of its choice.
    VicePresident,
    /// Takes no part in the exchange.
    Neutral,
}

impl Role {
    /// The exchange roles, in default seating order.
    pub const HIERARCHY: [Self; 4] = [
        Self::Bottom,
        Self::President,
        Self::ViceBottom,
        Self::VicePresident,
    ];

    /// Returns the default roles for a table of `players`.
    ///
    /// Four or more players get the full hierarchy followed by neutrals;
    /// smaller tables are all neutral and skip the exchange.
    ///
    /// ```
    /// use president::Role;
    ///
    /// let roles = Role::default_assignment(5);
    /// assert_eq!(roles[1], Role::President);
    /// assert_eq!(roles[4], Role::Neutral);
    /// assert!(Role::default_assignment(3).iter().all(|r| *r == Role::Neutral));
    /// ```
    #[must_use]
    pub fn default_assignment(players: usize) -> Vec<Self> {
        if players < Self::HIERARCHY.len() {
            return alloc::vec![Self::Neutral; players];
        }
        let mut roles = Self::HIERARCHY.to_vec();
        roles.resize(players, Self::Neutral);
        roles
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bottom => "Bottom",
            Self::President => "President",
            Self::ViceBottom => "Vice-Bottom",
            Self::VicePresident => "Vice-President",
            Self::Neutral => "Neutral",
        };
        f.write_str(label)
    }
}

/// Seat indices of the four exchange roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeSeats {
    /// Seat of the Bottom.
    pub bottom: usize,
    /// Seat of the President.
    pub president: usize,
    /// Seat of the Vice-Bottom.
    pub vice_bottom: usize,
    /// Seat of the Vice-President.
    pub vice_president: usize,
}

impl ExchangeSeats {
    /// Resolves the exchange seats from a role list.
    ///
    /// Returns `Ok(None)` when nobody holds an exchange role.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InconsistentRoles`] if the exchange roles are
    /// only partly present or any of them is held twice.
    pub fn resolve(roles: &[Role]) -> Result<Option<Self>, ConfigError> {
        let seat_of = |role: Role| {
            let mut seats = roles.iter().enumerate().filter(|(_, r)| **r == role);
            match (seats.next(), seats.next()) {
                (Some((seat, _)), None) => Ok(Some(seat)),
                (None, _) => Ok(None),
                (Some(_), Some(_)) => Err(ConfigError::InconsistentRoles(roles.to_vec())),
            }
        };

        match (
            seat_of(Role::Bottom)?,
            seat_of(Role::President)?,
            seat_of(Role::ViceBottom)?,
            seat_of(Role::VicePresident)?,
        ) {
            (Some(bottom), Some(president), Some(vice_bottom), Some(vice_president)) => {
                Ok(Some(Self {
                    bottom,
                    president,
                    vice_bottom,
                    vice_president,
                }))
            }
            (None, None, None, None) => Ok(None),
            _ => Err(ConfigError::InconsistentRoles(roles.to_vec())),
        }
    }
}
