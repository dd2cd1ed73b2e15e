//! Arrival time slot labels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed ordered set of arrival time labels offered for every date.
pub const STANDARD_SLOT_LABELS: [&str; 7] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "01:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
];

/// An arrival time label.
///
/// Slots carry no capacity or availability state; they are labels from a
/// fixed ordered set, and the external system owns any real scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSlot(String);

impl TimeSlot {
    /// Creates a slot from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TimeSlot {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}
