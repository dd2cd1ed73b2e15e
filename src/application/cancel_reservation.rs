//! CancelReservationHandler - drives a management flow through cancellation.

use std::sync::Arc;

use crate::domain::manage::{ManageEffect, ManageEvent, ManageFlow, StatusReport};
use crate::ports::{CancelRequest, ReservationGateway};

/// Handler for the token-based cancellation workflow.
///
/// The `confirmed` argument is the destructive-action confirmation gate:
/// without it, nothing happens, no state change and no network call. The
/// refund-or-forfeit decision is made entirely by the external endpoint;
/// this handler only relays and classifies its reply.
pub struct CancelReservationHandler {
    gateway: Arc<dyn ReservationGateway>,
}

impl CancelReservationHandler {
    pub fn new(gateway: Arc<dyn ReservationGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, flow: &mut ManageFlow, confirmed: bool) -> Option<StatusReport> {
        // 1. Confirmation gate precedes everything.
        if !confirmed {
            tracing::debug!(token = %flow.token(), "cancellation not confirmed");
            return None;
        }

        // 2. The confirmation transition is the only source of the
        //    cancellation effect; a settled or pending flow stays put.
        let ManageEffect::RequestCancellation(token) =
            flow.apply(ManageEvent::CancellationConfirmed)?;

        // 3. Exactly one outbound call.
        let result = self.gateway.cancel(CancelRequest { token }).await;

        // 4. Settle with the endpoint text, or the generic substitute.
        let report = match result {
            Ok(reply) => match reply.text() {
                Some(text) => StatusReport::from_message(text),
                None => StatusReport::transport_failure(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "cancellation call failed");
                StatusReport::transport_failure()
            }
        };

        flow.apply(ManageEvent::OutcomeReceived(report.clone()));
        Some(report)
    }
}
