//! SubmitBookingHandler - drives a configurator through checkout.

use std::sync::Arc;

use crate::domain::booking::{BookingEffect, BookingEvent, Configurator};
use crate::ports::ReservationGateway;

/// Display text when the checkout reply carries neither a redirect target
/// nor an error.
pub const CHECKOUT_FALLBACK_ERROR: &str = "Something went wrong";

/// Terminal result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The external system accepted; navigation to this exact URL is the
    /// only observable effect.
    Redirected(String),
    /// The submission did not complete; the text is surfaced on the
    /// details step and the customer may correct and resubmit.
    Declined(String),
}

/// Handler for the checkout submission workflow.
///
/// Owns no state of its own: the configurator carries the draft and the
/// in-flight flag, the handler performs the single network effect and
/// feeds the result back. Returns `None` when the submit guard blocked
/// the event, in which case the gateway is never touched.
pub struct SubmitBookingHandler {
    gateway: Arc<dyn ReservationGateway>,
}

impl SubmitBookingHandler {
    pub fn new(gateway: Arc<dyn ReservationGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, configurator: &mut Configurator) -> Option<SubmitOutcome> {
        // 1. Ask the machine for the submission effect; a guard violation
        //    is a silent no-op.
        let effect = configurator.apply(BookingEvent::SubmitRequested)?;
        let BookingEffect::SubmitCheckout(order) = effect else {
            return None;
        };

        // 2. Exactly one outbound call.
        let result = self.gateway.begin_checkout(order.into()).await;

        // 3. Feed the result back; every branch releases the in-flight
        //    flag through the machine.
        match result {
            Ok(reply) => {
                if let Some(url) = reply.url.filter(|u| !u.is_empty()) {
                    configurator.apply(BookingEvent::CheckoutRedirect(url.clone()));
                    Some(SubmitOutcome::Redirected(url))
                } else {
                    let text = reply
                        .error
                        .filter(|e| !e.is_empty())
                        .unwrap_or_else(|| CHECKOUT_FALLBACK_ERROR.to_string());
                    configurator.apply(BookingEvent::CheckoutRejected(text.clone()));
                    Some(SubmitOutcome::Declined(text))
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "checkout call failed");
                configurator.apply(BookingEvent::CheckoutUnreachable);
                Some(SubmitOutcome::Declined(
                    configurator
                        .last_error()
                        .unwrap_or(CHECKOUT_FALLBACK_ERROR)
                        .to_string(),
                ))
            }
        }
    }
}
