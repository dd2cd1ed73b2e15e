//! Booking configurator state machine.
//!
//! The configurator is an explicit, owned state object: every mutation
//! goes through [`Configurator::apply`], a transition on the current state
//! that optionally returns a side-effect description for the caller to
//! perform. No network or clock access happens inside a transition, so
//! the machine is deterministic under test.
//!
//! # Invariants
//!
//! - `EnterDetails` is reachable only once an arrival time is set
//! - At most one submission is in flight (`submitting` re-entrancy guard)
//! - A redirect target, once recorded, is terminal: no further event has
//!   any observable effect
//! - Guard violations are silent no-ops, never errors

use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingDraft, BookingEffect, BookingEvent, BookingStep, CheckoutOrder};
use crate::domain::foundation::StateMachine;
use crate::domain::schedule::ScheduleWindow;

/// Display text when the checkout call never completes.
pub const CHECKOUT_TRANSPORT_ERROR: &str = "Error initiating checkout";

/// The configurator session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configurator {
    step: BookingStep,
    draft: BookingDraft,
    window: ScheduleWindow,
    submitting: bool,
    last_error: Option<String>,
    redirect: Option<String>,
}

impl Configurator {
    /// Creates a configurator for a session starting now: the window is
    /// derived from today and the draft date defaults to today.
    pub fn new() -> Self {
        Self::with_window(ScheduleWindow::from_today())
    }

    /// Creates a configurator over an explicit window (deterministic for
    /// tests). The draft date defaults to the window start.
    pub fn with_window(window: ScheduleWindow) -> Self {
        Self {
            step: BookingStep::SelectService,
            draft: BookingDraft::new(window.start()),
            window,
            submitting: false,
            last_error: None,
            redirect: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the visible step.
    pub fn step(&self) -> BookingStep {
        self.step
    }

    /// Returns the draft.
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Returns the selectable date window for this session.
    pub fn window(&self) -> &ScheduleWindow {
        &self.window
    }

    /// Returns true while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Returns the error surfaced by the last failed submission, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns the terminal redirect target, if the checkout succeeded.
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    /// Returns true once control has passed to the external system.
    pub fn is_redirected(&self) -> bool {
        self.redirect.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────

    /// Applies an event, returning the side effect to perform, if any.
    ///
    /// Illegal events for the current state do nothing.
    pub fn apply(&mut self, event: BookingEvent) -> Option<BookingEffect> {
        if self.is_redirected() {
            return None;
        }

        match event {
            BookingEvent::ServiceSelected(service) => {
                if self.step != BookingStep::SelectService {
                    return None;
                }
                self.draft.choose_service(&service);
                self.step = BookingStep::SelectSchedule;
                None
            }

            BookingEvent::DateChosen(date) => {
                if self.step != BookingStep::SelectSchedule || !self.window.contains(&date) {
                    return None;
                }
                self.draft.set_date(date);
                None
            }

            BookingEvent::TimeChosen(slot) => {
                if self.step != BookingStep::SelectSchedule {
                    return None;
                }
                self.draft.set_time(slot);
                None
            }

            BookingEvent::ScheduleConfirmed => {
                if !self.step.can_transition_to(&BookingStep::EnterDetails)
                    || !self.draft.has_time()
                {
                    return None;
                }
                self.step = BookingStep::EnterDetails;
                None
            }

            BookingEvent::NameEntered(name) => {
                if self.step != BookingStep::EnterDetails {
                    return None;
                }
                self.draft.set_name(name);
                None
            }

            BookingEvent::EmailEntered(email) => {
                if self.step != BookingStep::EnterDetails {
                    return None;
                }
                self.draft.set_email(email);
                None
            }

            BookingEvent::PhoneEntered(phone) => {
                if self.step != BookingStep::EnterDetails {
                    return None;
                }
                self.draft.set_phone(phone);
                None
            }

            BookingEvent::BackRequested => {
                self.step = match self.step {
                    BookingStep::SelectService => BookingStep::SelectService,
                    BookingStep::SelectSchedule => BookingStep::SelectService,
                    BookingStep::EnterDetails => BookingStep::SelectSchedule,
                };
                None
            }

            BookingEvent::SubmitRequested => {
                if self.step != BookingStep::EnterDetails || self.submitting {
                    return None;
                }
                if !self.draft.contact().is_complete() {
                    return None;
                }
                let time = self.draft.time()?.clone();
                self.submitting = true;
                self.last_error = None;
                Some(BookingEffect::SubmitCheckout(CheckoutOrder {
                    name: self.draft.contact().name.clone(),
                    email: self.draft.contact().email.clone(),
                    phone: self.draft.contact().phone.clone(),
                    date: self.draft.date(),
                    time,
                }))
            }

            BookingEvent::CheckoutRedirect(url) => {
                if !self.submitting {
                    return None;
                }
                self.submitting = false;
                self.redirect = Some(url.clone());
                Some(BookingEffect::Navigate(url))
            }

            BookingEvent::CheckoutRejected(text) => {
                if !self.submitting {
                    return None;
                }
                self.submitting = false;
                self.last_error = Some(text);
                self.step = BookingStep::EnterDetails;
                None
            }

            BookingEvent::CheckoutUnreachable => {
                if !self.submitting {
                    return None;
                }
                self.submitting = false;
                self.last_error = Some(CHECKOUT_TRANSPORT_ERROR.to_string());
                self.step = BookingStep::EnterDetails;
                None
            }
        }
    }
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, Service, ServiceId, TimeSlot};
    use crate::domain::foundation::BookingDate;

    fn window() -> ScheduleWindow {
        ScheduleWindow::starting(BookingDate::from_ymd(2026, 8, 6).unwrap())
    }

    fn configurator() -> Configurator {
        Configurator::with_window(window())
    }

    fn service(id: &str) -> Service {
        Catalog::standard()
            .service(&ServiceId::new(id).unwrap())
            .unwrap()
            .clone()
    }

    /// Drives a configurator to EnterDetails with a complete contact.
    fn ready_to_submit() -> Configurator {
        let mut c = configurator();
        c.apply(BookingEvent::ServiceSelected(service("maintenance")));
        c.apply(BookingEvent::TimeChosen(TimeSlot::from("09:00 AM")));
        c.apply(BookingEvent::ScheduleConfirmed);
        c.apply(BookingEvent::NameEntered("Ada Lovelace".to_string()));
        c.apply(BookingEvent::EmailEntered("ada@example.com".to_string()));
        c
    }

    // ─────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn new_session_starts_on_service_selection() {
        let c = configurator();
        assert_eq!(c.step(), BookingStep::SelectService);
        assert!(!c.is_submitting());
        assert!(c.last_error().is_none());
        assert!(!c.is_redirected());
    }

    #[test]
    fn draft_date_defaults_to_the_window_start() {
        let c = configurator();
        assert_eq!(c.draft().date(), c.window().start());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Service selection
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn selecting_a_service_advances_and_copies_the_entry() {
        let mut c = configurator();
        let effect = c.apply(BookingEvent::ServiceSelected(service("ceramic")));
        assert!(effect.is_none());
        assert_eq!(c.step(), BookingStep::SelectSchedule);
        let sel = c.draft().selection().unwrap();
        assert_eq!(sel.service_name, "Ceramic Pro");
        assert_eq!(sel.price, 890);
    }

    #[test]
    fn selecting_a_service_outside_the_first_step_is_a_no_op() {
        let mut c = configurator();
        c.apply(BookingEvent::ServiceSelected(service("maintenance")));
        c.apply(BookingEvent::ServiceSelected(service("ceramic")));
        assert_eq!(c.draft().selection().unwrap().service_name, "The Daily");
    }

    #[test]
    fn reselection_after_back_is_idempotent() {
        let mut direct = configurator();
        direct.apply(BookingEvent::ServiceSelected(service("maintenance")));

        let mut roundabout = configurator();
        roundabout.apply(BookingEvent::ServiceSelected(service("maintenance")));
        roundabout.apply(BookingEvent::BackRequested);
        roundabout.apply(BookingEvent::ServiceSelected(service("correction")));
        roundabout.apply(BookingEvent::BackRequested);
        roundabout.apply(BookingEvent::ServiceSelected(service("maintenance")));

        assert_eq!(direct.draft(), roundabout.draft());
        assert_eq!(direct.step(), roundabout.step());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Schedule
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn date_selection_overwrites_within_the_window() {
        let mut c = configurator();
        c.apply(BookingEvent::ServiceSelected(service("maintenance")));
        let picked = c.window().dates()[3];
        c.apply(BookingEvent::DateChosen(picked));
        assert_eq!(c.draft().date(), picked);
    }

    #[test]
    fn date_outside_the_window_is_ignored() {
        let mut c = configurator();
        c.apply(BookingEvent::ServiceSelected(service("maintenance")));
        let default = c.draft().date();
        c.apply(BookingEvent::DateChosen(default.plus_days(30)));
        c.apply(BookingEvent::DateChosen(default.plus_days(-1)));
        assert_eq!(c.draft().date(), default);
    }

    #[test]
    fn schedule_cannot_be_confirmed_without_a_time() {
        let mut c = configurator();
        c.apply(BookingEvent::ServiceSelected(service("maintenance")));
        c.apply(BookingEvent::ScheduleConfirmed);
        assert_eq!(c.step(), BookingStep::SelectSchedule);
    }

    #[test]
    fn schedule_confirms_once_a_time_is_set() {
        let mut c = configurator();
        c.apply(BookingEvent::ServiceSelected(service("maintenance")));
        c.apply(BookingEvent::TimeChosen(TimeSlot::from("02:00 PM")));
        c.apply(BookingEvent::ScheduleConfirmed);
        assert_eq!(c.step(), BookingStep::EnterDetails);
    }

    #[test]
    fn date_alone_does_not_open_the_details_step() {
        let mut c = configurator();
        c.apply(BookingEvent::ServiceSelected(service("maintenance")));
        let picked = c.window().dates()[5];
        c.apply(BookingEvent::DateChosen(picked));
        c.apply(BookingEvent::ScheduleConfirmed);
        assert_eq!(c.step(), BookingStep::SelectSchedule);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Back navigation
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn back_returns_one_step_and_clears_nothing() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::BackRequested);
        assert_eq!(c.step(), BookingStep::SelectSchedule);
        c.apply(BookingEvent::BackRequested);
        assert_eq!(c.step(), BookingStep::SelectService);
        assert!(c.draft().has_time());
        assert_eq!(c.draft().contact().name, "Ada Lovelace");
        assert!(c.draft().selection().is_some());
    }

    #[test]
    fn back_on_the_first_step_stays_put() {
        let mut c = configurator();
        c.apply(BookingEvent::BackRequested);
        assert_eq!(c.step(), BookingStep::SelectService);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Submission guards
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn submit_emits_the_checkout_order() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::PhoneEntered("555-0100".to_string()));
        let effect = c.apply(BookingEvent::SubmitRequested);
        match effect {
            Some(BookingEffect::SubmitCheckout(order)) => {
                assert_eq!(order.name, "Ada Lovelace");
                assert_eq!(order.email, "ada@example.com");
                assert_eq!(order.phone, "555-0100");
                assert_eq!(order.time.label(), "09:00 AM");
                assert_eq!(order.date, c.draft().date());
            }
            other => panic!("expected SubmitCheckout, got {:?}", other),
        }
        assert!(c.is_submitting());
    }

    #[test]
    fn submit_without_a_name_is_a_no_op() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::NameEntered(String::new()));
        assert!(c.apply(BookingEvent::SubmitRequested).is_none());
        assert!(!c.is_submitting());
    }

    #[test]
    fn submit_without_an_email_is_a_no_op() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::EmailEntered(String::new()));
        assert!(c.apply(BookingEvent::SubmitRequested).is_none());
        assert!(!c.is_submitting());
    }

    #[test]
    fn submit_while_in_flight_is_a_no_op() {
        let mut c = ready_to_submit();
        assert!(c.apply(BookingEvent::SubmitRequested).is_some());
        assert!(c.apply(BookingEvent::SubmitRequested).is_none());
        assert!(c.apply(BookingEvent::SubmitRequested).is_none());
        assert!(c.is_submitting());
    }

    #[test]
    fn submit_clears_the_previous_error() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::SubmitRequested);
        c.apply(BookingEvent::CheckoutRejected("card declined".to_string()));
        assert_eq!(c.last_error(), Some("card declined"));
        c.apply(BookingEvent::SubmitRequested);
        assert!(c.last_error().is_none());
    }

    // ─────────────────────────────────────────────────────────────────────
    // Checkout completion
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn redirect_is_terminal_and_emits_navigation() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::SubmitRequested);
        let effect = c.apply(BookingEvent::CheckoutRedirect(
            "https://pay.example/sess_1".to_string(),
        ));
        assert_eq!(
            effect,
            Some(BookingEffect::Navigate("https://pay.example/sess_1".to_string()))
        );
        assert!(c.is_redirected());
        assert_eq!(c.redirect_target(), Some("https://pay.example/sess_1"));
        assert!(!c.is_submitting());

        // Terminal: nothing observable can happen afterwards.
        assert!(c.apply(BookingEvent::SubmitRequested).is_none());
        assert!(c.apply(BookingEvent::BackRequested).is_none());
        assert_eq!(c.redirect_target(), Some("https://pay.example/sess_1"));
    }

    #[test]
    fn rejection_returns_to_details_with_the_text_verbatim() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::SubmitRequested);
        c.apply(BookingEvent::CheckoutRejected("card declined".to_string()));
        assert_eq!(c.step(), BookingStep::EnterDetails);
        assert_eq!(c.last_error(), Some("card declined"));
        assert!(!c.is_submitting());
    }

    #[test]
    fn transport_failure_surfaces_the_generic_message() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::SubmitRequested);
        c.apply(BookingEvent::CheckoutUnreachable);
        assert_eq!(c.last_error(), Some(CHECKOUT_TRANSPORT_ERROR));
        assert!(!c.is_submitting());
    }

    #[test]
    fn resubmission_is_possible_after_failure() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::SubmitRequested);
        c.apply(BookingEvent::CheckoutUnreachable);
        assert!(c.apply(BookingEvent::SubmitRequested).is_some());
    }

    #[test]
    fn completion_events_without_a_submission_are_ignored() {
        let mut c = ready_to_submit();
        c.apply(BookingEvent::CheckoutRedirect("https://pay.example".to_string()));
        c.apply(BookingEvent::CheckoutRejected("nope".to_string()));
        c.apply(BookingEvent::CheckoutUnreachable);
        assert!(!c.is_redirected());
        assert!(c.last_error().is_none());
    }
}
