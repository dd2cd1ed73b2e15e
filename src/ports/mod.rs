//! Ports - Interfaces the domain needs from the outside world.
//!
//! One port here: the reservation gateway wrapping the two external
//! endpoints (checkout, cancellation).

mod reservation_gateway;

pub use reservation_gateway::{
    CancelReply, CancelRequest, CheckoutReply, CheckoutRequest, GatewayError, ReservationGateway,
};
