use core::str::FromStr;
use serde::{Deserialize, Serialize};

use cinema_core::DomainError;

/// Ticket categories sold by the cinema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    pub const ALL: [TicketType; 3] = [TicketType::Adult, TicketType::Child, TicketType::Infant];

    /// Unit price in whole currency units.
    pub const fn unit_price(self) -> u64 {
        match self {
            TicketType::Adult => 25,
            TicketType::Child => 15,
            TicketType::Infant => 0,
        }
    }

    /// Infants sit on an adult's lap.
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, TicketType::Infant)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketType::Adult => "ADULT",
            TicketType::Child => "CHILD",
            TicketType::Infant => "INFANT",
        }
    }
}

impl core::fmt::Display for TicketType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        TicketType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| DomainError::validation(format!("unknown ticket type: {name:?}")))
    }
}
