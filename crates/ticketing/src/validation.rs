//! Purchase rules.
//!
//! Every rule is evaluated on each call. Violations are reported in a fixed
//! order (ticket count, quantity, adult rule, purchaser id) and the first one
//! becomes the reason reported by [`InvalidPurchaseError`].

use cinema_core::AccountId;

use crate::error::{InvalidPurchaseError, Violation, ViolationKind};
use crate::request::TicketTypeRequest;
use crate::ticket_type::TicketType;

/// Upper bound on the total number of tickets in one purchase.
pub const MAX_TICKETS_PER_PURCHASE: i64 = 25;

/// Smallest quantity a single ticket request may ask for.
pub const MIN_TICKET_QUANTITY: i64 = 1;

/// Total quantity across all requests. Saturates instead of overflowing.
pub fn total_quantity(requests: &[TicketTypeRequest]) -> i64 {
    requests
        .iter()
        .fold(0i64, |acc, r| acc.saturating_add(r.quantity()))
}

/// All broken rules, in check order. Empty when the purchase is valid.
pub fn violations(account_id: AccountId, requests: &[TicketTypeRequest]) -> Vec<Violation> {
    let mut found = Vec::new();

    if total_quantity(requests) > MAX_TICKETS_PER_PURCHASE {
        found.push(Violation::new(ViolationKind::TicketCountExceeded));
    }

    if requests.iter().any(|r| r.quantity() < MIN_TICKET_QUANTITY) {
        found.push(Violation::new(ViolationKind::InvalidQuantity));
    }

    let has_adult = requests
        .iter()
        .any(|r| r.ticket_type() == TicketType::Adult);
    if !requests.is_empty() && !has_adult {
        found.push(Violation::new(ViolationKind::AdultTicketRequired));
    }

    if !account_id.is_valid() {
        found.push(Violation::new(ViolationKind::InvalidPurchaserId));
    }

    found
}

pub fn validate(
    account_id: AccountId,
    requests: &[TicketTypeRequest],
) -> Result<(), InvalidPurchaseError> {
    match InvalidPurchaseError::from_violations(violations(account_id, requests)) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
