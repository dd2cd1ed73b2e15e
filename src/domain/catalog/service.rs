//! Service catalog entries.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Symbolic key identifying a catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Creates a ServiceId from a non-empty symbolic key.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the key is empty
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("service_id"));
        }
        Ok(Self(id))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable catalog entry for an offered service.
///
/// # Invariants
///
/// - `price` is a positive integer in whole currency units
/// - Entries are defined at process start and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique symbolic key.
    id: ServiceId,

    /// Display title.
    title: String,

    /// Price in whole currency units.
    price: u32,

    /// Human-readable duration ("1.5h", "1 Day").
    duration_label: String,

    /// Short description.
    description: String,
}

impl Service {
    /// Creates a new catalog entry.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the title is empty
    /// - `InvalidFormat` if the price is zero
    pub fn new(
        id: ServiceId,
        title: impl Into<String>,
        price: u32,
        duration_label: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        if price == 0 {
            return Err(ValidationError::invalid_format("price", "must be positive"));
        }
        Ok(Self {
            id,
            title,
            price,
            duration_label: duration_label.into(),
            description: description.into(),
        })
    }

    /// Returns the service id.
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the price in whole currency units.
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Returns the duration label.
    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    /// Returns the short description.
    pub fn description(&self) -> &str {
        &self.description
    }
}
