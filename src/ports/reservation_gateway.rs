//! Reservation gateway port for the external booking endpoints.
//!
//! Defines the contract for the two endpoints that own payment capture,
//! persistence, and refund policy. This core only ever sees a reservation
//! through these calls.
//!
//! # Design
//!
//! - **Single-shot**: no retry, no timeout, no request cancellation; the
//!   caller's re-entrancy guards are the only in-flight control
//! - **Uninterpreted replies**: reply types keep the endpoint's optional
//!   fields as-is; interpretation (redirect vs error vs fallback) belongs
//!   to the workflow, so mocks exercise the same decision code

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::booking::CheckoutOrder;
use crate::domain::catalog::TimeSlot;
use crate::domain::foundation::BookingDate;
use crate::domain::manage::CancellationToken;

/// Port for the external checkout and cancellation endpoints.
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    /// Issues one checkout request.
    ///
    /// `Ok` means the endpoint replied with a parseable body, whatever it
    /// contained; `Err` means the call never completed.
    async fn begin_checkout(&self, request: CheckoutRequest) -> Result<CheckoutReply, GatewayError>;

    /// Issues one cancellation request for an opaque token.
    async fn cancel(&self, request: CancelRequest) -> Result<CancelReply, GatewayError>;
}

/// Checkout request body.
///
/// Carries contact and slot fields only. Service identity and price are
/// intentionally absent: the endpoint derives the charged deposit from its
/// own server-side policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: BookingDate,
    pub time: TimeSlot,
}

impl From<CheckoutOrder> for CheckoutRequest {
    fn from(order: CheckoutOrder) -> Self {
        Self {
            name: order.name,
            email: order.email,
            phone: order.phone,
            date: order.date,
            time: order.time,
        }
    }
}

/// Checkout reply body: `{url}` on success, `{error}` on decline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutReply {
    /// Redirect target for payment completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Endpoint-supplied error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Cancellation request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub token: CancellationToken,
}

/// Cancellation reply body: `{message}` or `{error}`; both are treated the
/// same way downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CancelReply {
    /// Returns the first non-empty of `message`/`error`.
    pub fn text(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or(self.error.as_deref().filter(|e| !e.is_empty()))
    }
}

/// Errors from gateway calls that never completed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request could not be sent or the connection failed.
    #[error("network failure: {0}")]
    Network(String),

    /// The endpoint replied with a body that is not the documented JSON.
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

impl GatewayError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        GatewayError::Network(message.into())
    }

    /// Creates a malformed reply error.
    pub fn malformed_reply(message: impl Into<String>) -> Self {
        GatewayError::MalformedReply(message.into())
    }
}
