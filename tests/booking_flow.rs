//! End-to-end booking flow: configurator + submit handler + mock gateway.

use std::sync::Arc;

use pitstop::adapters::MockReservationGateway;
use pitstop::application::{SubmitBookingHandler, SubmitOutcome, CHECKOUT_FALLBACK_ERROR};
use pitstop::domain::booking::{
    BookingEvent, BookingStep, Configurator, CHECKOUT_TRANSPORT_ERROR,
};
use pitstop::domain::catalog::{Catalog, ServiceId, TimeSlot};
use pitstop::domain::foundation::BookingDate;
use pitstop::domain::schedule::ScheduleWindow;
use pitstop::ports::{CheckoutReply, GatewayError};
use pitstop::presentation::Navigation;

fn configurator() -> Configurator {
    pitstop::telemetry::init();
    let window = ScheduleWindow::starting(BookingDate::from_ymd(2026, 8, 6).unwrap());
    Configurator::with_window(window)
}

fn select(c: &mut Configurator, id: &str) {
    let service = Catalog::standard()
        .service(&ServiceId::new(id).unwrap())
        .unwrap()
        .clone();
    c.apply(BookingEvent::ServiceSelected(service));
}

fn walk_to_details(c: &mut Configurator) {
    select(c, "correction");
    c.apply(BookingEvent::DateChosen(c.window().dates()[2]));
    c.apply(BookingEvent::TimeChosen(TimeSlot::from("01:00 PM")));
    c.apply(BookingEvent::ScheduleConfirmed);
    c.apply(BookingEvent::NameEntered("Grace Hopper".to_string()));
    c.apply(BookingEvent::EmailEntered("grace@example.com".to_string()));
    c.apply(BookingEvent::PhoneEntered("555-0199".to_string()));
}

#[tokio::test]
async fn full_booking_journey_ends_in_a_redirect() {
    let mock = Arc::new(MockReservationGateway::new());
    mock.push_checkout_reply(CheckoutReply {
        url: Some("https://pay.example/sess_1".to_string()),
        error: None,
    });
    let handler = SubmitBookingHandler::new(mock.clone());

    let mut c = configurator();
    walk_to_details(&mut c);
    assert_eq!(c.step(), BookingStep::EnterDetails);

    let outcome = handler.handle(&mut c).await.unwrap();

    // The sole observable success effect is navigation to the exact URL.
    let SubmitOutcome::Redirected(url) = outcome else {
        panic!("expected a redirect");
    };
    let nav = Navigation::to_location(url);
    assert_eq!(nav.location, "https://pay.example/sess_1");
    assert!(c.is_redirected());
    assert_eq!(mock.checkout_calls().len(), 1);
}

#[tokio::test]
async fn checkout_request_carries_the_drafted_slot() {
    let mock = Arc::new(MockReservationGateway::new());
    mock.push_checkout_reply(CheckoutReply {
        url: Some("https://pay.example".to_string()),
        error: None,
    });
    let handler = SubmitBookingHandler::new(mock.clone());

    let mut c = configurator();
    walk_to_details(&mut c);
    handler.handle(&mut c).await;

    let request = &mock.checkout_calls()[0];
    assert_eq!(request.name, "Grace Hopper");
    assert_eq!(request.email, "grace@example.com");
    assert_eq!(request.phone, "555-0199");
    assert_eq!(request.date, BookingDate::from_ymd(2026, 8, 8).unwrap());
    assert_eq!(request.time.label(), "01:00 PM");

    // The wire payload never mentions the chosen service or its price.
    let json = serde_json::to_value(request).unwrap();
    assert!(json.get("price").is_none());
    assert!(json.get("service_id").is_none());
}

#[tokio::test]
async fn decline_surfaces_verbatim_and_allows_a_second_attempt() {
    let mock = Arc::new(MockReservationGateway::new());
    mock.push_checkout_reply(CheckoutReply {
        url: None,
        error: Some("card declined".to_string()),
    });
    mock.push_checkout_reply(CheckoutReply {
        url: Some("https://pay.example/sess_2".to_string()),
        error: None,
    });
    let handler = SubmitBookingHandler::new(mock.clone());

    let mut c = configurator();
    walk_to_details(&mut c);

    let first = handler.handle(&mut c).await.unwrap();
    assert_eq!(first, SubmitOutcome::Declined("card declined".to_string()));
    assert_eq!(c.last_error(), Some("card declined"));
    assert_eq!(c.step(), BookingStep::EnterDetails);

    let second = handler.handle(&mut c).await.unwrap();
    assert_eq!(
        second,
        SubmitOutcome::Redirected("https://pay.example/sess_2".to_string())
    );
    assert_eq!(mock.checkout_calls().len(), 2);
}

#[tokio::test]
async fn empty_reply_and_transport_failure_use_distinct_generic_messages() {
    let mock = Arc::new(MockReservationGateway::new());
    mock.push_checkout_reply(CheckoutReply::default());
    mock.push_checkout_error(GatewayError::network("dns failure"));
    let handler = SubmitBookingHandler::new(mock);

    let mut c = configurator();
    walk_to_details(&mut c);

    let empty_reply = handler.handle(&mut c).await.unwrap();
    assert_eq!(
        empty_reply,
        SubmitOutcome::Declined(CHECKOUT_FALLBACK_ERROR.to_string())
    );

    let transport = handler.handle(&mut c).await.unwrap();
    assert_eq!(
        transport,
        SubmitOutcome::Declined(CHECKOUT_TRANSPORT_ERROR.to_string())
    );
    assert_ne!(CHECKOUT_FALLBACK_ERROR, CHECKOUT_TRANSPORT_ERROR);
}

#[tokio::test]
async fn guard_blocked_submission_is_invisible_to_the_gateway() {
    let mock = Arc::new(MockReservationGateway::new());
    let handler = SubmitBookingHandler::new(mock.clone());

    // Not past the schedule step: no contact, no submit.
    let mut c = configurator();
    select(&mut c, "maintenance");
    assert_eq!(handler.handle(&mut c).await, None);
    assert!(!mock.checkout_was_called());
}
