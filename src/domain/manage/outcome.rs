//! Cancellation outcome classification.
//!
//! The external cancellation endpoint reports free text, not a structured
//! status. Classification is a substring heuristic over that text and is
//! deliberately kept bit-compatible with the deployed endpoint: positive
//! iff the text contains `"refunded"` (case-sensitive) or `"success"`
//! (case-insensitive). A failure message that happens to contain
//! "success", or a refund notice that omits "refunded", is misclassified.
//! The heuristic lives in exactly one function so a structured status
//! field can replace it without touching callers.

use serde::{Deserialize, Serialize};

/// Display text when the cancellation call never completes.
pub const CANCEL_TRANSPORT_ERROR: &str = "Error processing cancellation";

/// Presentation variant of a settled cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Positive,
    Negative,
}

/// Classifies endpoint text into a presentation tone.
pub fn classify_status(message: &str) -> StatusTone {
    if message.contains("refunded") || message.to_lowercase().contains("success") {
        StatusTone::Positive
    } else {
        StatusTone::Negative
    }
}

/// The settled result of a cancellation attempt: the displayed text and
/// its tone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    message: String,
    tone: StatusTone,
}

impl StatusReport {
    /// Builds a report from endpoint-supplied text.
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        let tone = classify_status(&message);
        Self { message, tone }
    }

    /// Builds the generic report for a failed transport.
    pub fn transport_failure() -> Self {
        Self::from_message(CANCEL_TRANSPORT_ERROR)
    }

    /// Returns the displayed text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the presentation tone.
    pub fn tone(&self) -> StatusTone {
        self.tone
    }
}
