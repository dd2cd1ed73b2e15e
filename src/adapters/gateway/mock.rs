//! Mock reservation gateway for testing.
//!
//! Provides a configurable mock implementation of `ReservationGateway`
//! for unit and integration tests. Supports:
//! - Pre-configured replies (queued, first-in first-out)
//! - Error injection
//! - Call tracking

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::ports::{
    CancelReply, CancelRequest, CheckoutReply, CheckoutRequest, GatewayError, ReservationGateway,
};

/// Mock reservation gateway.
///
/// # Example
///
/// ```ignore
/// let mock = MockReservationGateway::new();
/// mock.push_checkout_reply(CheckoutReply { url: Some("https://pay.example".into()), error: None });
///
/// let handler = SubmitBookingHandler::new(Arc::new(mock));
/// ```
#[derive(Default)]
pub struct MockReservationGateway {
    /// Inner state (thread-safe for async tests).
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Queued checkout replies.
    checkout_replies: VecDeque<Result<CheckoutReply, GatewayError>>,

    /// Queued cancellation replies.
    cancel_replies: VecDeque<Result<CancelReply, GatewayError>>,

    /// Recorded checkout requests, in call order.
    checkout_calls: Vec<CheckoutRequest>,

    /// Recorded cancellation requests, in call order.
    cancel_calls: Vec<CancelRequest>,
}

impl MockReservationGateway {
    /// Creates a mock with no queued replies; unqueued calls fail with a
    /// network error so a test cannot silently pass on a missing fixture.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Configuration
    // ─────────────────────────────────────────────────────────────────────

    /// Queues a checkout reply.
    pub fn push_checkout_reply(&self, reply: CheckoutReply) {
        self.inner.lock().unwrap().checkout_replies.push_back(Ok(reply));
    }

    /// Queues a checkout transport failure.
    pub fn push_checkout_error(&self, error: GatewayError) {
        self.inner.lock().unwrap().checkout_replies.push_back(Err(error));
    }

    /// Queues a cancellation reply.
    pub fn push_cancel_reply(&self, reply: CancelReply) {
        self.inner.lock().unwrap().cancel_replies.push_back(Ok(reply));
    }

    /// Queues a cancellation transport failure.
    pub fn push_cancel_error(&self, error: GatewayError) {
        self.inner.lock().unwrap().cancel_replies.push_back(Err(error));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Call tracking
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the recorded checkout requests.
    pub fn checkout_calls(&self) -> Vec<CheckoutRequest> {
        self.inner.lock().unwrap().checkout_calls.clone()
    }

    /// Returns the recorded cancellation requests.
    pub fn cancel_calls(&self) -> Vec<CancelRequest> {
        self.inner.lock().unwrap().cancel_calls.clone()
    }

    /// Returns true if any checkout call was issued.
    pub fn checkout_was_called(&self) -> bool {
        !self.inner.lock().unwrap().checkout_calls.is_empty()
    }

    /// Returns true if any cancellation call was issued.
    pub fn cancel_was_called(&self) -> bool {
        !self.inner.lock().unwrap().cancel_calls.is_empty()
    }
}

#[async_trait]
impl ReservationGateway for MockReservationGateway {
    async fn begin_checkout(&self, request: CheckoutRequest) -> Result<CheckoutReply, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.checkout_calls.push(request);
        state
            .checkout_replies
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::network("no checkout reply queued")))
    }

    async fn cancel(&self, request: CancelRequest) -> Result<CancelReply, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.cancel_calls.push(request);
        state
            .cancel_replies
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::network("no cancel reply queued")))
    }
}
