//! Booking draft aggregate.
//!
//! The draft is the single mutable aggregate for one in-progress
//! reservation. It lives only for the active configurator session: it is
//! created empty, mutated by step actions, and discarded once control
//! passes to the external payment system.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Service, ServiceId, TimeSlot};
use crate::domain::foundation::BookingDate;

/// Snapshot of a chosen service, copied out of the catalog at selection
/// time.
///
/// # Invariants
///
/// - `price` equals the catalog price of `service_id` at the moment of
///   selection. It is never recomputed from a live catalog lookup, so a
///   catalog change between selection and submission leaves the draft
///   stale by design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedService {
    pub service_id: ServiceId,
    pub service_name: String,
    pub price: u32,
}

impl SelectedService {
    /// Copies the selection-relevant fields out of a catalog entry.
    pub fn from_service(service: &Service) -> Self {
        Self {
            service_id: service.id().clone(),
            service_name: service.title().to_string(),
            price: service.price(),
        }
    }
}

/// Free-text contact fields. No trimming or format validation: the submit
/// guard tests raw non-emptiness only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDetails {
    /// Returns true when the required fields are present.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }
}

/// The in-progress reservation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    selection: Option<SelectedService>,
    date: BookingDate,
    time: Option<TimeSlot>,
    contact: ContactDetails,
}

impl BookingDraft {
    /// Creates an empty draft with the date defaulted to `date`.
    pub fn new(date: BookingDate) -> Self {
        Self {
            selection: None,
            date,
            time: None,
            contact: ContactDetails::default(),
        }
    }

    /// Copies id, name, and price from a catalog entry as one update.
    ///
    /// Re-selecting overwrites the previous selection and touches nothing
    /// else, so re-selecting the same service is idempotent.
    pub fn choose_service(&mut self, service: &Service) {
        self.selection = Some(SelectedService::from_service(service));
    }

    /// Overwrites the reservation date.
    pub fn set_date(&mut self, date: BookingDate) {
        self.date = date;
    }

    /// Overwrites the arrival time slot.
    pub fn set_time(&mut self, time: TimeSlot) {
        self.time = Some(time);
    }

    /// Overwrites the contact name.
    pub fn set_name(&mut self, name: String) {
        self.contact.name = name;
    }

    /// Overwrites the contact email.
    pub fn set_email(&mut self, email: String) {
        self.contact.email = email;
    }

    /// Overwrites the contact phone.
    pub fn set_phone(&mut self, phone: String) {
        self.contact.phone = phone;
    }

    /// Returns the chosen service, if any.
    pub fn selection(&self) -> Option<&SelectedService> {
        self.selection.as_ref()
    }

    /// Returns the reservation date.
    pub fn date(&self) -> BookingDate {
        self.date
    }

    /// Returns the chosen slot, if any.
    pub fn time(&self) -> Option<&TimeSlot> {
        self.time.as_ref()
    }

    /// Returns the contact fields.
    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// Returns true once an arrival time has been chosen.
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }
}
