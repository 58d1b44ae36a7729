//! FlowState for tracking where an assessment session stands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Outcome state of an assessment session.
///
/// `Referral` and `Complete` are terminal: only a reset leaves them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FlowState {
    #[default]
    InProgress,
    Referral {
        message: String,
    },
    Complete,
}

impl FlowState {
    /// Returns the message-free status of this state.
    pub fn status(&self) -> FlowStatus {
        match self {
            FlowState::InProgress => FlowStatus::InProgress,
            FlowState::Referral { .. } => FlowStatus::Referral,
            FlowState::Complete => FlowStatus::Complete,
        }
    }

    /// Returns true while answers are still being accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, FlowState::InProgress)
    }

    /// Returns true once the session has reached an outcome.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Returns the referral reason, if the session ended in a referral.
    pub fn referral_message(&self) -> Option<&str> {
        match self {
            FlowState::Referral { message } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())
    }
}

/// Status half of [`FlowState`], without the referral message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlowStatus {
    #[default]
    InProgress,
    Referral,
    Complete,
}

impl StateMachine for FlowStatus {
    /// Valid transitions:
    /// - InProgress -> Referral
    /// - InProgress -> Complete
    fn can_transition_to(&self, target: &Self) -> bool {
        use FlowStatus::*;
        matches!((self, target), (InProgress, Referral) | (InProgress, Complete))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use FlowStatus::*;
        match self {
            InProgress => vec![Referral, Complete],
            Referral | Complete => vec![],
        }
    }
}

impl fmt::Display for FlowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FlowStatus::InProgress => "In Progress",
            FlowStatus::Referral => "Referral",
            FlowStatus::Complete => "Complete",
        };
        write!(f, "{}", s)
    }
}
