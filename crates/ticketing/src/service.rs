//! Ticket purchase orchestration.
//!
//! `TicketService` validates and prices a purchase (pure), then hands the
//! computed amounts to the payment gateway and the seat booking system.
//!
//! ```text
//! purchase_tickets(account_id, requests)
//!   ↓
//! 1. Validate (count → quantity → adult rule → account id)
//!   ↓
//! 2. Price (total price, seats excluding infants)
//!   ↓
//! 3. make_payment(account_id, total_price)
//!   ↓
//! 4. reserve_seat(account_id, seats_required)
//! ```
//!
//! Both collaborator calls happen exactly once per successful purchase, in
//! that order. Collaborators cannot fail, so there is no compensation step.

use cinema_core::AccountId;
use cinema_thirdparty::{SeatReservationService, TicketPaymentService};

use crate::error::InvalidPurchaseError;
use crate::pricing::{self, PurchaseSummary};
use crate::request::{PurchaseRequest, TicketTypeRequest};

pub struct TicketService<P, S> {
    payment: P,
    reservation: S,
}

impl<P, S> TicketService<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    pub fn new(payment: P, reservation: S) -> Self {
        Self {
            payment,
            reservation,
        }
    }

    pub fn payment_service(&self) -> &P {
        &self.payment
    }

    pub fn reservation_service(&self) -> &S {
        &self.reservation
    }

    /// Validate and price without charging or reserving anything.
    pub fn quote(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, InvalidPurchaseError> {
        pricing::quote(account_id, requests)
    }

    /// Purchase tickets for `account_id`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPurchaseError`] when any purchase rule is broken. No
    /// collaborator is called in that case.
    #[tracing::instrument(
        name = "purchase_tickets",
        skip(self, account_id, requests),
        fields(account_id = %account_id, requests = requests.len())
    )]
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<(), InvalidPurchaseError> {
        let summary = pricing::quote(account_id, requests).inspect_err(|err| {
            tracing::debug!(kind = ?err.kind(), error = %err, "purchase rejected");
        })?;

        self.payment.make_payment(account_id, summary.total_price);
        self.reservation
            .reserve_seat(account_id, summary.seats_required);

        tracing::info!(
            total_price = summary.total_price,
            seats_required = summary.seats_required,
            "tickets purchased"
        );
        Ok(())
    }

    /// Convenience wrapper over [`TicketService::purchase_tickets`].
    pub fn purchase(&self, request: &PurchaseRequest) -> Result<(), InvalidPurchaseError> {
        self.purchase_tickets(request.account_id, &request.tickets)
    }
}
