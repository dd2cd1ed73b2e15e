//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `gateway` - Reservation gateway implementations (HTTP, mock)

pub mod gateway;

pub use gateway::{GatewayConfig, HttpReservationGateway, MockReservationGateway};
