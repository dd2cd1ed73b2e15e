//! Manage module - token-based reservation cancellation.
//!
//! A management session holds an opaque token and moves
//! `Reviewing -> AwaitingOutcome -> Settled`. The cancellation request is
//! only ever emitted by the confirmation transition, so the destructive
//! action is structurally gated.

mod flow;
mod outcome;
mod token;

pub use flow::{ManageEffect, ManageEvent, ManageFlow, ManageState};
pub use outcome::{classify_status, StatusReport, StatusTone, CANCEL_TRANSPORT_ERROR};
pub use token::CancellationToken;
