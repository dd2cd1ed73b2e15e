//! HTTP reservation gateway adapter.
//!
//! Implements the `ReservationGateway` port with a reqwest client against
//! a configured base URL.
//!
//! # Reply handling
//!
//! The reply body is parsed as JSON regardless of HTTP status: the
//! endpoints put their outcome in the body (`url`/`error`/`message`), and
//! a declined checkout may arrive with a non-2xx status. A body that is
//! not the documented JSON is a transport-class failure.

use async_trait::async_trait;

use crate::ports::{
    CancelReply, CancelRequest, CheckoutReply, CheckoutRequest, GatewayError, ReservationGateway,
};

/// Conventional checkout endpoint path.
pub const DEFAULT_CHECKOUT_PATH: &str = "/api/checkout";

/// Conventional cancellation endpoint path.
pub const DEFAULT_CANCEL_PATH: &str = "/api/cancel";

/// Reservation gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the external system (scheme + authority).
    base_url: String,

    /// Path of the checkout endpoint.
    checkout_path: String,

    /// Path of the cancellation endpoint.
    cancel_path: String,
}

impl GatewayConfig {
    /// Creates a configuration with the conventional endpoint paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            checkout_path: DEFAULT_CHECKOUT_PATH.to_string(),
            cancel_path: DEFAULT_CANCEL_PATH.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom checkout path.
    pub fn with_checkout_path(mut self, path: impl Into<String>) -> Self {
        self.checkout_path = path.into();
        self
    }

    /// Set a custom cancellation path.
    pub fn with_cancel_path(mut self, path: impl Into<String>) -> Self {
        self.cancel_path = path.into();
        self
    }

    /// Returns the full checkout URL.
    pub fn checkout_url(&self) -> String {
        format!("{}{}", self.base_url, self.checkout_path)
    }

    /// Returns the full cancellation URL.
    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.base_url, self.cancel_path)
    }
}

/// HTTP implementation of the reservation gateway.
pub struct HttpReservationGateway {
    config: GatewayConfig,
    http_client: reqwest::Client,
}

impl HttpReservationGateway {
    /// Creates a gateway with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    async fn post_json<B, R>(&self, url: &str, body: &B) -> Result<R, GatewayError>
    where
        B: serde::Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "gateway request failed");
                GatewayError::network(e.to_string())
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "gateway reply body unreadable");
            GatewayError::network(e.to_string())
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(url = %url, status = %status, error = %e, "gateway reply not parseable");
            GatewayError::malformed_reply(e.to_string())
        })
    }
}

#[async_trait]
impl ReservationGateway for HttpReservationGateway {
    async fn begin_checkout(&self, request: CheckoutRequest) -> Result<CheckoutReply, GatewayError> {
        let url = self.config.checkout_url();
        tracing::info!(date = %request.date, time = %request.time, "submitting checkout");
        let reply: CheckoutReply = self.post_json(&url, &request).await?;
        tracing::info!(redirect = reply.url.is_some(), "checkout replied");
        Ok(reply)
    }

    async fn cancel(&self, request: CancelRequest) -> Result<CancelReply, GatewayError> {
        let url = self.config.cancel_url();
        tracing::info!(token = %request.token, "requesting cancellation");
        let reply: CancelReply = self.post_json(&url, &request).await?;
        Ok(reply)
    }
}
