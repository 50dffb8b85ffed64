//! Externally supplied services the ticket service delegates to.
//!
//! Only the contracts live here, together with stand-in implementations that
//! log each call. Real payment and seat booking systems are provided by their
//! owners and plugged in through these traits.

pub mod paymentgateway;
pub mod seatbooking;

pub use paymentgateway::{LoggingPaymentService, TicketPaymentService};
pub use seatbooking::{LoggingSeatReservationService, SeatReservationService};
