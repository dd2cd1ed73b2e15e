//! Informational cancellation policy copy.
//!
//! Display text only: the refund decision is made entirely by the
//! external endpoint, and nothing here feeds back into it.

use serde::{Deserialize, Serialize};

/// The deposit and refund figures shown on the booking and manage screens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CancellationPolicy {
    /// Deposit charged at checkout, in whole currency units.
    pub deposit: u32,

    /// Amount returned when cancelling above the threshold.
    pub refund: f64,

    /// Hours before the slot above which the deposit is refundable.
    pub threshold_hours: u32,
}

impl CancellationPolicy {
    /// The published policy: $10 deposit, $9.00 back above 24 hours.
    pub fn standard() -> Self {
        Self {
            deposit: 10,
            refund: 9.0,
            threshold_hours: 24,
        }
    }

    /// The deposit note shown on the details step.
    pub fn deposit_note(&self) -> String {
        format!(
            "Small deposit of ${}.00 required to lock your slot.",
            self.deposit
        )
    }

    /// The two policy lines shown before cancellation.
    pub fn lines(&self) -> [String; 2] {
        [
            format!("> {} Hours: Refund (${:.2})", self.threshold_hours, self.refund),
            format!("< {} Hours: Forfeit Deposit", self.threshold_hours),
        ]
    }
}

impl Default for CancellationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
