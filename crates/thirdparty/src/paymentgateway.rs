use std::sync::Arc;

use cinema_core::AccountId;

/// Takes payment for a ticket purchase.
///
/// Implementations are assumed to always succeed, so there is nothing to
/// return. Amounts are whole currency units.
pub trait TicketPaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64);
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for &T {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        (**self).make_payment(account_id, total_amount_to_pay);
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Box<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        (**self).make_payment(account_id, total_amount_to_pay);
    }
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        (**self).make_payment(account_id, total_amount_to_pay);
    }
}

/// Stand-in gateway that records each payment as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPaymentService;

impl TicketPaymentService for LoggingPaymentService {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        tracing::info!(%account_id, total_amount_to_pay, "payment taken");
    }
}
