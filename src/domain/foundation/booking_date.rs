//! Calendar-date value object for reservation scheduling.

use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar date with no time-of-day component, always UTC "today"
/// semantics. Serializes as ISO-8601 (`YYYY-MM-DD`), which is the wire
/// format of the checkout contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Returns today's date (UTC).
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Creates a date from a NaiveDate.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a date from year/month/day, if the combination is valid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the inner NaiveDate.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Creates a new date by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Checks if this date is before another.
    pub fn is_before(&self, other: &BookingDate) -> bool {
        self.0 < other.0
    }

    /// Checks if this date is after another.
    pub fn is_after(&self, other: &BookingDate) -> bool {
        self.0 > other.0
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // NaiveDate's Display is already YYYY-MM-DD
        write!(f, "{}", self.0)
    }
}
