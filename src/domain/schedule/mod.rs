//! Schedule module - the selectable date window.
//!
//! The window is a pure function of a start date. Nothing is cached: each
//! configurator derives its window from "today" at construction, and a
//! fresh process derives a fresh window.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::BookingDate;

/// Number of selectable days, starting today inclusive.
pub const WINDOW_DAYS: usize = 14;

/// The rolling window of dates a reservation may be placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    start: BookingDate,
    dates: Vec<BookingDate>,
}

impl ScheduleWindow {
    /// Builds the window of [`WINDOW_DAYS`] consecutive dates starting at
    /// `start` inclusive.
    pub fn starting(start: BookingDate) -> Self {
        let dates = (0..WINDOW_DAYS as i64).map(|i| start.plus_days(i)).collect();
        Self { start, dates }
    }

    /// Builds the window starting at the current date. Reads the clock on
    /// every call.
    pub fn from_today() -> Self {
        Self::starting(BookingDate::today())
    }

    /// Returns the first selectable date.
    pub fn start(&self) -> BookingDate {
        self.start
    }

    /// Returns the candidate dates in order.
    pub fn dates(&self) -> &[BookingDate] {
        &self.dates
    }

    /// Checks whether a date is selectable.
    pub fn contains(&self, date: &BookingDate) -> bool {
        self.dates.contains(date)
    }
}
