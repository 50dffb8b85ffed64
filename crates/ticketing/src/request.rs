use serde::{Deserialize, Deserializer, Serialize};

use cinema_core::{AccountId, DomainError, DomainResult, ValueObject};

use crate::ticket_type::TicketType;

/// A request for `quantity` tickets of one type.
///
/// Construction never range-checks the quantity. Zero and negative quantities
/// are representable so that purchase validation can report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "type")]
    ticket_type: TicketType,
    #[serde(deserialize_with = "deserialize_quantity")]
    quantity: i64,
}

impl ValueObject for TicketTypeRequest {}

impl TicketTypeRequest {
    pub const fn new(ticket_type: TicketType, quantity: i64) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    /// Build a request from raw text, e.g. `("ADULT", "2")`.
    pub fn parse(ticket_type: &str, quantity: &str) -> DomainResult<Self> {
        Ok(Self::new(ticket_type.parse()?, parse_quantity(quantity)?))
    }

    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub const fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Coerce a numeric string into a ticket quantity.
pub fn parse_quantity(raw: &str) -> DomainResult<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| DomainError::validation(format!("ticket quantity is not an integer: {raw:?}")))
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(v) => Ok(v),
        Raw::Str(s) => parse_quantity(&s).map_err(serde::de::Error::custom),
    }
}

/// One purchase attempt: who is buying and what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub account_id: AccountId,
    #[serde(default)]
    pub tickets: Vec<TicketTypeRequest>,
}

impl PurchaseRequest {
    pub fn new(account_id: AccountId, tickets: Vec<TicketTypeRequest>) -> Self {
        Self {
            account_id,
            tickets,
        }
    }
}
