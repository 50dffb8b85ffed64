use std::sync::{Arc, Mutex};

use cinema_core::AccountId;
use cinema_thirdparty::{SeatReservationService, TicketPaymentService};
use cinema_ticketing::{
    InvalidPurchaseError, PurchaseRequest, TicketService, TicketType, TicketTypeRequest,
    ViolationClass, ViolationKind,
};

#[derive(Default)]
struct RecordingPayments(Mutex<Vec<(AccountId, u64)>>);

impl TicketPaymentService for RecordingPayments {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        self.0.lock().unwrap().push((account_id, total_amount_to_pay));
    }
}

#[derive(Default)]
struct RecordingReservations(Mutex<Vec<(AccountId, u64)>>);

impl SeatReservationService for RecordingReservations {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        self.0
            .lock()
            .unwrap()
            .push((account_id, total_seats_to_allocate));
    }
}

struct Harness {
    payments: Arc<RecordingPayments>,
    reservations: Arc<RecordingReservations>,
    service: TicketService<Arc<RecordingPayments>, Arc<RecordingReservations>>,
}

impl Harness {
    fn new() -> Self {
        let payments = Arc::new(RecordingPayments::default());
        let reservations = Arc::new(RecordingReservations::default());
        let service = TicketService::new(Arc::clone(&payments), Arc::clone(&reservations));
        Self {
            payments,
            reservations,
            service,
        }
    }

    fn buy(&self, account_id: i64, requests: &[TicketTypeRequest]) -> Result<(), InvalidPurchaseError> {
        self.service
            .purchase_tickets(AccountId::new(account_id), requests)
    }

    fn payments(&self) -> Vec<(AccountId, u64)> {
        self.payments.0.lock().unwrap().clone()
    }

    fn reservations(&self) -> Vec<(AccountId, u64)> {
        self.reservations.0.lock().unwrap().clone()
    }

    fn assert_untouched(&self) {
        assert!(self.payments().is_empty(), "payment service was called");
        assert!(self.reservations().is_empty(), "reservation service was called");
    }
}

fn adult(n: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Adult, n)
}

fn child(n: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Child, n)
}

fn infant(n: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Infant, n)
}

#[test]
fn single_adult_pays_25_and_reserves_one_seat() {
    let h = Harness::new();

    h.buy(1, &[adult(1)]).unwrap();

    assert_eq!(h.payments(), vec![(AccountId::new(1), 25)]);
    assert_eq!(h.reservations(), vec![(AccountId::new(1), 1)]);
}

#[test]
fn adult_only_purchases_are_priced_per_ticket() {
    for (account, tickets, expected) in [(11, 1, 25), (34, 2, 50)] {
        let h = Harness::new();
        h.buy(account, &[adult(tickets)]).unwrap();
        assert_eq!(h.payments(), vec![(AccountId::new(account), expected)]);
    }
}

#[test]
fn mixed_purchases_are_priced_across_types() {
    let cases = [
        (vec![adult(1), child(4), infant(1)], 23, 85, 5),
        (vec![adult(2), child(3), infant(1)], 23, 95, 5),
        (vec![adult(2), child(3), infant(1)], 15, 95, 5),
    ];

    for (requests, account, price, seats) in cases {
        let h = Harness::new();
        h.buy(account, &requests).unwrap();
        assert_eq!(h.payments(), vec![(AccountId::new(account), price)]);
        assert_eq!(h.reservations(), vec![(AccountId::new(account), seats)]);
    }
}

#[test]
fn more_than_25_tickets_is_rejected_without_side_effects() {
    let h = Harness::new();

    let err = h.buy(1, &[child(16), adult(4), infant(6)]).unwrap_err();

    assert_eq!(err.kind(), ViolationKind::TicketCountExceeded);
    assert_eq!(err.class(), ViolationClass::RangeError);
    assert_eq!(err.message(), "RangeError: ticket count exceeded");
    h.assert_untouched();
}

#[test]
fn child_and_infant_without_adult_is_rejected() {
    let h = Harness::new();

    let err = h.buy(3, &[child(2), infant(1)]).unwrap_err();

    assert_eq!(err.kind(), ViolationKind::AdultTicketRequired);
    assert_eq!(err.class(), ViolationClass::RuleError);
    assert_eq!(err.message(), "RuleError: adult required");
    h.assert_untouched();
}

#[test]
fn account_zero_is_rejected() {
    let h = Harness::new();

    let err = h.buy(0, &[adult(1)]).unwrap_err();

    assert_eq!(err.kind(), ViolationKind::InvalidPurchaserId);
    h.assert_untouched();
}

#[test]
fn zero_quantity_is_rejected() {
    let h = Harness::new();

    let err = h.buy(1, &[adult(1), child(0)]).unwrap_err();

    assert_eq!(err.kind(), ViolationKind::InvalidQuantity);
    h.assert_untouched();
}

#[test]
fn repeated_purchases_accumulate_side_effects() {
    let h = Harness::new();
    let requests = [adult(2), child(1)];

    h.buy(7, &requests).unwrap();
    h.buy(7, &requests).unwrap();

    let account = AccountId::new(7);
    assert_eq!(h.payments(), vec![(account, 65), (account, 65)]);
    assert_eq!(h.reservations(), vec![(account, 3), (account, 3)]);
}

#[test]
fn requests_parsed_from_text_are_accepted() {
    let h = Harness::new();
    let requests = [
        TicketTypeRequest::parse("ADULT", "2").unwrap(),
        TicketTypeRequest::parse("INFANT", "2").unwrap(),
    ];

    h.buy(5, &requests).unwrap();

    assert_eq!(h.payments(), vec![(AccountId::new(5), 50)]);
    assert_eq!(h.reservations(), vec![(AccountId::new(5), 2)]);
}

#[test]
fn json_purchase_request_goes_through_the_service() {
    let h = Harness::new();
    let request: PurchaseRequest = serde_json::from_str(
        r#"{
            "account_id": 23,
            "tickets": [
                {"type": "ADULT", "quantity": "2"},
                {"type": "CHILD", "quantity": 3},
                {"type": "INFANT", "quantity": "1"}
            ]
        }"#,
    )
    .unwrap();

    h.service.purchase(&request).unwrap();

    assert_eq!(h.payments(), vec![(AccountId::new(23), 95)]);
    assert_eq!(h.reservations(), vec![(AccountId::new(23), 5)]);
}
