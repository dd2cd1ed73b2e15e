//! Configurator events and side-effect descriptions.

use crate::domain::catalog::{Service, TimeSlot};
use crate::domain::foundation::BookingDate;

/// A user- or gateway-triggered event fed to the configurator.
///
/// Events that would violate a step guard are silent no-ops: the
/// configurator leaves its state unchanged and emits no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEvent {
    /// A catalog entry was picked on the first step.
    ServiceSelected(Service),
    /// A date was picked from the schedule window.
    DateChosen(BookingDate),
    /// An arrival slot was picked.
    TimeChosen(TimeSlot),
    /// The schedule step was confirmed.
    ScheduleConfirmed,
    /// Contact name edited.
    NameEntered(String),
    /// Contact email edited.
    EmailEntered(String),
    /// Contact phone edited.
    PhoneEntered(String),
    /// The back control was used.
    BackRequested,
    /// The submit control was used.
    SubmitRequested,
    /// The checkout endpoint replied with a redirect target.
    CheckoutRedirect(String),
    /// The checkout endpoint declined; carries the display text (server
    /// error verbatim, or the no-detail fallback).
    CheckoutRejected(String),
    /// The checkout call never completed (network failure or an
    /// uninterpretable reply).
    CheckoutUnreachable,
}

/// The submission fields captured at the moment the submit guard passes.
///
/// The chosen service and price are intentionally absent: the external
/// endpoint derives the charged deposit from its own policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOrder {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: BookingDate,
    pub time: TimeSlot,
}

/// A side effect the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingEffect {
    /// Issue exactly one checkout request with this payload.
    SubmitCheckout(CheckoutOrder),
    /// Perform a full navigation to this target; control leaves the
    /// application.
    Navigate(String),
}
