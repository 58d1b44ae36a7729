//! Pharmacist summary formatter.
//!
//! The output is pasted into pharmacy records, so the template must stay
//! byte-for-byte stable.

use super::questionnaire::SYMPTOMS_QUESTION_ID;
use super::{AnswerSet, AssessmentError, FlowState};
use crate::domain::foundation::QuestionId;

const HEADER: &str = "UTI ASSESSMENT (ON MINOR AILMENTS)";
const STATUS_LINE: &str = "Status: Eligible";
const DETAILS_LINE: &str = "Details: Female, 12+, Non-pregnant.";
const RED_FLAGS_LINE: &str = "Red Flags: None reported.";
const ACTION_LINE: &str = "Action: Pharmacist to confirm via direct interview.";

/// Renders the plaintext summary of a completed assessment.
///
/// Reaching `Complete` means every screening rule passed, so only the
/// symptoms answer is listed individually. Lines are separated by `\n`
/// with no trailing newline.
///
/// # Errors
///
/// - `NotComplete` if `state` is not `Complete`
/// - `MissingAnswer` if no symptoms answer was recorded
pub fn format_summary(state: &FlowState, answers: &AnswerSet) -> Result<String, AssessmentError> {
    if *state != FlowState::Complete {
        return Err(AssessmentError::NotComplete {
            status: state.status(),
        });
    }

    let symptoms = answers
        .get(SYMPTOMS_QUESTION_ID)
        .ok_or_else(|| AssessmentError::MissingAnswer {
            question_id: QuestionId::from(SYMPTOMS_QUESTION_ID),
        })?;

    Ok([
        HEADER.to_string(),
        STATUS_LINE.to_string(),
        DETAILS_LINE.to_string(),
        format!("Symptoms: {}", symptoms),
        RED_FLAGS_LINE.to_string(),
        ACTION_LINE.to_string(),
    ]
    .join("\n"))
}
