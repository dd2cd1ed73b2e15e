//! Reservation gateway endpoint configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::adapters::GatewayConfig;
use crate::adapters::gateway::{DEFAULT_CANCEL_PATH, DEFAULT_CHECKOUT_PATH};

fn default_checkout_path() -> String {
    DEFAULT_CHECKOUT_PATH.to_string()
}

fn default_cancel_path() -> String {
    DEFAULT_CANCEL_PATH.to_string()
}

/// Endpoint settings for the external booking system
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayEndpoints {
    /// Base URL of the external system (scheme + authority)
    pub base_url: String,

    /// Checkout endpoint path
    #[serde(default = "default_checkout_path")]
    pub checkout_path: String,

    /// Cancellation endpoint path
    #[serde(default = "default_cancel_path")]
    pub cancel_path: String,
}

impl GatewayEndpoints {
    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("GATEWAY_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if !self.checkout_path.starts_with('/') || !self.cancel_path.starts_with('/') {
            return Err(ValidationError::InvalidEndpointPath);
        }
        Ok(())
    }

    /// Builds the adapter configuration from these settings
    pub fn to_gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(self.base_url.clone())
            .with_checkout_path(self.checkout_path.clone())
            .with_cancel_path(self.cancel_path.clone())
    }
}
