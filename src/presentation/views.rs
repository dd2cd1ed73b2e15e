//! View models for the terminal states of the reservation lifecycle.

use serde::{Deserialize, Serialize};

use crate::domain::manage::{StatusReport, StatusTone};

/// Prompt shown by the destructive-action confirmation gate.
pub const CANCEL_CONFIRM_PROMPT: &str =
    "Confirm Abort Sequence: Are you sure you want to cancel?";

/// Full-page navigation instruction for a completed checkout.
///
/// Control leaves the application here; rendering it is the sole
/// observable success effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub location: String,
}

impl Navigation {
    pub fn to_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Status banner for a settled cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub tone: StatusTone,
    pub heading: String,
    pub body: String,
}

impl StatusView {
    /// Builds the banner for a settled report.
    pub fn from_report(report: &StatusReport) -> Self {
        Self {
            tone: report.tone(),
            heading: "Status Report".to_string(),
            body: report.message().to_string(),
        }
    }
}

/// Static copy of the post-payment confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationView {
    pub headline: String,
    pub subline: String,
    pub next_steps: Vec<String>,
}

impl ConfirmationView {
    pub fn standard() -> Self {
        Self {
            headline: "Booking Secured".to_string(),
            subline: "Slot reserved. Confirmation packet sent to your inbox.".to_string(),
            next_steps: vec![
                "Check email for management uplink.".to_string(),
                "Await SMS arrival notification.".to_string(),
                "Secure water/power access point.".to_string(),
            ],
        }
    }
}
