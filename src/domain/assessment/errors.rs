//! Assessment-specific error types.

use thiserror::Error;

use super::FlowStatus;
use crate::domain::foundation::{ErrorCode, QuestionId, ValidationError};

/// Errors raised by the assessment engine and summary formatter.
///
/// Every variant is a caller mistake; none of them is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The answer label is not one of the current question's options.
    #[error("'{label}' is not a valid answer to '{question_id}' (expected one of: {})", .allowed.join(", "))]
    InvalidAnswer {
        question_id: QuestionId,
        label: String,
        allowed: Vec<String>,
    },

    /// The session has already reached a terminal outcome.
    #[error("Assessment has ended ({status}); reset to start over")]
    SessionTerminal { status: FlowStatus },

    /// A summary was requested before the assessment completed.
    #[error("Summary is only available once the assessment is complete (currently {status})")]
    NotComplete { status: FlowStatus },

    /// The summary template needs an answer that was never recorded.
    #[error("No answer recorded for '{question_id}'")]
    MissingAnswer { question_id: QuestionId },

    /// The flow state refused a transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(#[from] ValidationError),
}

impl AssessmentError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::InvalidTransition(_) => ErrorCode::InvalidStateTransition,
            AssessmentError::InvalidAnswer { .. }
            | AssessmentError::SessionTerminal { .. }
            | AssessmentError::NotComplete { .. }
            | AssessmentError::MissingAnswer { .. } => ErrorCode::InvalidInput,
        }
    }
}

/// Errors raised while building or loading a questionnaire definition.
#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("Invalid questionnaire: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Failed to parse questionnaire YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read questionnaire file: {0}")]
    Io(#[from] std::io::Error),
}

impl QuestionnaireError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidDefinition
    }
}
