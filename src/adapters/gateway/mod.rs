//! Reservation gateway adapters.
//!
//! Implements the `ReservationGateway` port:
//! - `HttpReservationGateway` - reqwest client against the configured base URL
//! - `MockReservationGateway` - queued replies and call tracking for tests

mod http;
mod mock;

pub use http::{GatewayConfig, HttpReservationGateway, DEFAULT_CANCEL_PATH, DEFAULT_CHECKOUT_PATH};
pub use mock::MockReservationGateway;
