//! Booking module - the configurator state machine and its draft.
//!
//! Movement through the configurator:
//!
//! ```text
//! SelectService -> SelectSchedule -> EnterDetails -> (submitting) -> Redirected
//!       ^________________|  ^_____________|                |
//!                                                          v
//!                                         EnterDetails (error surfaced)
//! ```
//!
//! All mutation goes through [`Configurator::apply`]; illegal events are
//! silent no-ops.

mod configurator;
mod draft;
mod events;
mod step;

pub use configurator::{Configurator, CHECKOUT_TRANSPORT_ERROR};
pub use draft::{BookingDraft, ContactDetails, SelectedService};
pub use events::{BookingEffect, BookingEvent, CheckoutOrder};
pub use step::BookingStep;
