//! Presentation layer - view models for terminal states.
//!
//! Nothing here carries a behavioral contract; these are the display
//! shapes a UI renders for redirects, settled cancellations, and the
//! confirmation screen.

mod policy;
mod views;

pub use policy::CancellationPolicy;
pub use views::{ConfirmationView, Navigation, StatusView, CANCEL_CONFIRM_PROMPT};
