//! Configurator step enum.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The visible step of the booking configurator.
///
/// Forward movement is gated by the configurator's guards; backward
/// movement is always permitted and clears nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    #[default]
    SelectService,
    SelectSchedule,
    EnterDetails,
}

impl StateMachine for BookingStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use BookingStep::*;
        matches!(
            (self, target),
            (SelectService, SelectSchedule)
                | (SelectSchedule, SelectService)
                | (SelectSchedule, EnterDetails)
                | (EnterDetails, SelectSchedule)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use BookingStep::*;
        match self {
            SelectService => vec![SelectSchedule],
            SelectSchedule => vec![SelectService, EnterDetails],
            EnterDetails => vec![SelectSchedule],
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BookingStep::SelectService => "SelectService",
            BookingStep::SelectSchedule => "SelectSchedule",
            BookingStep::EnterDetails => "EnterDetails",
        };
        write!(f, "{}", s)
    }
}
