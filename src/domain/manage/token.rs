//! Opaque reservation access token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque credential identifying one prior reservation.
///
/// Issued by the external system and delivered out of band (a link in the
/// confirmation message). Never generated or inspected client-side: it is
/// an uninterpreted string handed back to the cancellation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CancellationToken(String);

impl CancellationToken {
    /// Wraps an externally supplied token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for the cancellation request body.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a short prefix safe to show on screen (`abcd1234…`).
    pub fn preview(&self) -> String {
        let prefix: String = self.0.chars().take(8).collect();
        format!("{}...", prefix)
    }
}

impl fmt::Display for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display the preview, not the credential.
        write!(f, "{}", self.preview())
    }
}

impl From<String> for CancellationToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}
