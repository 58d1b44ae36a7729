//! Assessment domain module.
//!
//! The UTI intake decision flow: a fixed questionnaire walked in order,
//! short-circuiting to a referral on the first disqualifying answer and
//! otherwise ending in a completed, summarisable assessment.

mod answers;
mod engine;
mod errors;
mod flow_state;
mod question;
mod questionnaire;
mod summary;

pub use answers::AnswerSet;
pub use engine::{AnswerOutcome, AssessmentEngine};
pub use errors::{AssessmentError, QuestionnaireError};
pub use flow_state::{FlowState, FlowStatus};
pub use question::{ExclusionRule, Question};
pub use questionnaire::{Questionnaire, SYMPTOMS_QUESTION_ID};
pub use summary::format_summary;
