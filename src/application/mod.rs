//! Application layer - workflow handlers over the domain machines.
//!
//! Handlers own the network side effects the domain only describes:
//! `SubmitBookingHandler` performs the checkout call, and
//! `CancelReservationHandler` performs the cancellation call behind its
//! confirmation gate. Both take the gateway port behind `Arc`.

mod cancel_reservation;
mod submit_booking;

pub use cancel_reservation::CancelReservationHandler;
pub use submit_booking::{SubmitBookingHandler, SubmitOutcome, CHECKOUT_FALLBACK_ERROR};
