//! Catalog module - static configuration of offered services and slots.
//!
//! The catalog is defined at process start and never mutated. Drafts copy
//! the fields they need out of a `Service` at selection time, so a catalog
//! instance is only consulted while the customer is choosing.

mod service;
mod time_slot;

pub use service::{Service, ServiceId};
pub use time_slot::{TimeSlot, STANDARD_SLOT_LABELS};

use once_cell::sync::Lazy;

/// The offered services and time slots.
///
/// Instantiable so tests can build local catalogs; production code uses
/// [`Catalog::standard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    services: Vec<Service>,
    slots: Vec<TimeSlot>,
}

static STANDARD: Lazy<Catalog> = Lazy::new(|| {
    let services = vec![
        entry("maintenance", "The Daily", 150, "1.5h", "Wash & Sealant"),
        entry("correction", "Correction", 450, "6h", "Polish & Shine"),
        entry("ceramic", "Ceramic Pro", 890, "1 Day", "5-Year Coating"),
    ];
    let slots = STANDARD_SLOT_LABELS.iter().map(|l| TimeSlot::from(*l)).collect();
    Catalog::new(services, slots)
});

fn entry(id: &str, title: &str, price: u32, duration: &str, desc: &str) -> Service {
    // Static catalog data is known-valid; construction cannot fail here.
    let id = ServiceId::new(id).expect("static service id");
    Service::new(id, title, price, duration, desc).expect("static service entry")
}

impl Catalog {
    /// Creates a catalog from explicit entries.
    pub fn new(services: Vec<Service>, slots: Vec<TimeSlot>) -> Self {
        Self { services, slots }
    }

    /// Returns the process-wide standard catalog.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Returns the offered services in display order.
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Returns the fixed ordered slot labels.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Looks up a service by id.
    pub fn service(&self, id: &ServiceId) -> Option<&Service> {
        self.services.iter().find(|s| s.id() == id)
    }
}
