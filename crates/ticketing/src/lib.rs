//! Ticketing domain module.
//!
//! This crate contains the business rules for buying cinema tickets: the
//! price table, purchase validation and pricing. Payment and seat booking are
//! delegated to the services in `cinema-thirdparty`.

pub mod error;
pub mod pricing;
pub mod request;
pub mod service;
pub mod ticket_type;
pub mod validation;

pub use error::{InvalidPurchaseError, Violation, ViolationClass, ViolationKind};
pub use pricing::{PurchaseSummary, quote};
pub use request::{PurchaseRequest, TicketTypeRequest};
pub use service::TicketService;
pub use ticket_type::TicketType;
pub use validation::{MAX_TICKETS_PER_PURCHASE, MIN_TICKET_QUANTITY};
