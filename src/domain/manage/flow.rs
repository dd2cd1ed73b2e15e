//! Reservation management flow state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;
use crate::domain::manage::{CancellationToken, StatusReport};

/// Lifecycle of one management session.
///
/// `Settled` is terminal: there is no automatic return to the
/// pre-cancellation view, the user has to navigate away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ManageState {
    #[default]
    Reviewing,
    AwaitingOutcome,
    Settled,
}

impl StateMachine for ManageState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ManageState::*;
        matches!(
            (self, target),
            (Reviewing, AwaitingOutcome) | (AwaitingOutcome, Settled)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ManageState::*;
        match self {
            Reviewing => vec![AwaitingOutcome],
            AwaitingOutcome => vec![Settled],
            Settled => vec![],
        }
    }
}

impl fmt::Display for ManageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ManageState::Reviewing => "Reviewing",
            ManageState::AwaitingOutcome => "AwaitingOutcome",
            ManageState::Settled => "Settled",
        };
        write!(f, "{}", s)
    }
}

/// Events fed to the management flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManageEvent {
    /// The user passed the destructive-action confirmation gate.
    CancellationConfirmed,
    /// The endpoint (or its failure substitute) produced a report.
    OutcomeReceived(StatusReport),
}

/// Side effect the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManageEffect {
    /// Issue exactly one cancellation request carrying this token.
    RequestCancellation(CancellationToken),
}

/// One management session for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManageFlow {
    token: CancellationToken,
    state: ManageState,
    report: Option<StatusReport>,
}

impl ManageFlow {
    /// Opens a management session for an externally supplied token.
    pub fn new(token: CancellationToken) -> Self {
        Self {
            token,
            state: ManageState::Reviewing,
            report: None,
        }
    }

    /// Returns the token under management.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> ManageState {
        self.state
    }

    /// Returns the settled report, if any.
    pub fn report(&self) -> Option<&StatusReport> {
        self.report.as_ref()
    }

    /// Returns true once the session reached its terminal state.
    pub fn is_settled(&self) -> bool {
        self.state == ManageState::Settled
    }

    /// Applies an event, returning the side effect to perform, if any.
    ///
    /// Events that are illegal in the current state do nothing, which
    /// makes a duplicate confirmation while a request is pending (or after
    /// settlement) a silent no-op.
    pub fn apply(&mut self, event: ManageEvent) -> Option<ManageEffect> {
        match event {
            ManageEvent::CancellationConfirmed => {
                if !self.state.can_transition_to(&ManageState::AwaitingOutcome) {
                    return None;
                }
                self.state = ManageState::AwaitingOutcome;
                Some(ManageEffect::RequestCancellation(self.token.clone()))
            }
            ManageEvent::OutcomeReceived(report) => {
                if !self.state.can_transition_to(&ManageState::Settled) {
                    return None;
                }
                self.state = ManageState::Settled;
                self.report = Some(report);
                None
            }
        }
    }
}
