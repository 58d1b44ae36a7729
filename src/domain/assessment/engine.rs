//! AssessmentEngine - the intake decision flow.
//!
//! Walks a [`Questionnaire`] in order. Each accepted answer is recorded and
//! then either advances to the next question, ends the session with a
//! referral, or (on the last question) completes it.
//!
//! The engine does no I/O. Rendering, clipboard handling and the like are
//! left to whatever shell drives it.

use std::sync::Arc;
use tracing::{debug, info};

use super::{format_summary, AnswerSet, AssessmentError, FlowState, Question, Questionnaire};
use crate::domain::foundation::{SessionId, StateMachine};

/// What happened as a result of one accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the question at `position`.
    Advanced { position: usize },
    /// The answer was disqualifying; the session ended in a referral.
    Referred { message: String },
    /// The final question was passed; the patient is eligible.
    Completed,
}

/// Single-session assessment state machine.
///
/// # Invariants
///
/// - `position < questionnaire.len()` while the state is `InProgress`
/// - terminal states (`Referral`, `Complete`) change only through `reset`
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    questionnaire: Arc<Questionnaire>,
    session_id: SessionId,
    position: usize,
    answers: AnswerSet,
    state: FlowState,
}

impl AssessmentEngine {
    /// Starts a fresh session over `questionnaire`.
    ///
    /// The questionnaire is shared, so many engines can run over one
    /// definition without copying it.
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        Self {
            questionnaire,
            session_id: SessionId::new(),
            position: 0,
            answers: AnswerSet::new(),
            state: FlowState::InProgress,
        }
    }

    /// Starts a fresh session over the standard UTI questionnaire.
    pub fn standard() -> Self {
        Self::new(Arc::new(Questionnaire::standard()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Identifier of the current session; changes on reset.
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Index of the current question. Only meaningful while in progress.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn question_count(&self) -> usize {
        self.questionnaire.len()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Current outcome state, carrying the referral message if any.
    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Returns the question awaiting an answer.
    ///
    /// # Errors
    ///
    /// - `SessionTerminal` once the session has reached an outcome
    pub fn current_question(&self) -> Result<&Question, AssessmentError> {
        self.ensure_in_progress()?;
        Ok(&self.questionnaire.questions()[self.position])
    }

    /// Share of questions passed so far, 0-100. Terminal states report 100.
    pub fn progress_percent(&self) -> u8 {
        if self.state.is_terminal() {
            return 100;
        }
        ((self.position * 100) / self.question_count()) as u8
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Submits an answer to the current question.
    ///
    /// The answer is recorded before the question's rule is evaluated, so a
    /// disqualifying answer is still present in [`answers`](Self::answers).
    ///
    /// # Errors
    ///
    /// - `SessionTerminal` if the session already reached an outcome
    /// - `InvalidAnswer` if `label` is not one of the question's options
    pub fn submit_answer(&mut self, label: &str) -> Result<AnswerOutcome, AssessmentError> {
        let question = self.current_question()?;
        if !question.accepts(label) {
            return Err(AssessmentError::InvalidAnswer {
                question_id: question.id().clone(),
                label: label.to_string(),
                allowed: question.options().to_vec(),
            });
        }

        let id = question.id().clone();
        let referral = question.evaluate(label).map(str::to_string);

        debug!(
            session_id = %self.session_id,
            question = %id,
            answer = label,
            "Answer recorded"
        );
        self.answers.record(id.clone(), label);

        if let Some(message) = referral {
            self.transition(FlowState::Referral {
                message: message.clone(),
            })?;
            info!(
                session_id = %self.session_id,
                question = %id,
                "Assessment ended in referral"
            );
            return Ok(AnswerOutcome::Referred { message });
        }

        if self.position == self.questionnaire.last_index() {
            self.transition(FlowState::Complete)?;
            info!(session_id = %self.session_id, "Assessment complete");
            return Ok(AnswerOutcome::Completed);
        }

        self.position += 1;
        Ok(AnswerOutcome::Advanced {
            position: self.position,
        })
    }

    /// Returns the session to its initial state, from any state.
    pub fn reset(&mut self) {
        let previous = std::mem::replace(&mut self.session_id, SessionId::new());
        debug!(
            previous_session_id = %previous,
            session_id = %self.session_id,
            state = %self.state,
            "Assessment reset"
        );
        self.position = 0;
        self.answers = AnswerSet::new();
        self.state = FlowState::InProgress;
    }

    /// Renders the pharmacist summary.
    ///
    /// # Errors
    ///
    /// - `NotComplete` unless the session completed
    /// - `MissingAnswer` if the questionnaire has no `symptoms` answer
    pub fn summary(&self) -> Result<String, AssessmentError> {
        format_summary(&self.state, &self.answers)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_in_progress(&self) -> Result<(), AssessmentError> {
        if self.state.is_in_progress() {
            Ok(())
        } else {
            Err(AssessmentError::SessionTerminal {
                status: self.state.status(),
            })
        }
    }

    fn transition(&mut self, next: FlowState) -> Result<(), AssessmentError> {
        self.state.status().transition_to(next.status())?;
        self.state = next;
        Ok(())
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::standard()
    }
}
