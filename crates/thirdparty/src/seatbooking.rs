use std::sync::Arc;

use cinema_core::AccountId;

/// Reserves seats for a ticket purchase. Assumed to always succeed.
pub trait SeatReservationService: Send + Sync {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64);
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for &T {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        (**self).reserve_seat(account_id, total_seats_to_allocate);
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Box<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        (**self).reserve_seat(account_id, total_seats_to_allocate);
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        (**self).reserve_seat(account_id, total_seats_to_allocate);
    }
}

/// Stand-in booking system that records each reservation as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSeatReservationService;

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        tracing::info!(%account_id, total_seats_to_allocate, "seats reserved");
    }
}
