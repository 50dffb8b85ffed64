use serde::Serialize;

use cinema_core::{AccountId, ValueObject};

use crate::error::InvalidPurchaseError;
use crate::request::TicketTypeRequest;
use crate::validation;

/// What a valid purchase costs and how many seats it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    pub account_id: AccountId,
    /// Whole currency units.
    pub total_price: u64,
    pub seats_required: u64,
    pub ticket_count: u64,
}

impl ValueObject for PurchaseSummary {}

/// Validate a purchase and price it. Pure; nothing is charged or reserved.
pub fn quote(
    account_id: AccountId,
    requests: &[TicketTypeRequest],
) -> Result<PurchaseSummary, InvalidPurchaseError> {
    validation::validate(account_id, requests)?;

    let mut summary = PurchaseSummary {
        account_id,
        total_price: 0,
        seats_required: 0,
        ticket_count: 0,
    };

    for request in requests {
        // Validation guarantees 1..=25 per request.
        let quantity = request.quantity().unsigned_abs();
        let ticket_type = request.ticket_type();

        summary.total_price += quantity * ticket_type.unit_price();
        summary.ticket_count += quantity;
        if ticket_type.occupies_seat() {
            summary.seats_required += quantity;
        }
    }

    Ok(summary)
}
