//! Question and ExclusionRule value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// Answers that end the assessment with a referral, and the reason given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionRule {
    /// Answer labels that disqualify the patient.
    pub disqualifying: Vec<String>,

    /// Referral reason shown when a disqualifying answer is given.
    pub message: String,
}

impl ExclusionRule {
    /// Creates a rule that disqualifies on a single answer label.
    pub fn on(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            disqualifying: vec![label.into()],
            message: message.into(),
        }
    }

    /// Returns the referral message if `label` is disqualifying.
    pub fn evaluate(&self, label: &str) -> Option<&str> {
        self.disqualifying
            .iter()
            .any(|d| d == label)
            .then_some(self.message.as_str())
    }
}

/// A single screening question.
///
/// Immutable once part of a [`Questionnaire`](super::Questionnaire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rule: Option<ExclusionRule>,
}

impl Question {
    /// Creates a question with no exclusion rule.
    pub fn new<I, S>(id: impl Into<QuestionId>, prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            rule: None,
        }
    }

    /// Attaches an exclusion rule.
    pub fn with_rule(mut self, rule: ExclusionRule) -> Self {
        self.rule = Some(rule);
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Allowed answer labels, in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn rule(&self) -> Option<&ExclusionRule> {
        self.rule.as_ref()
    }

    /// Returns true if `label` is exactly one of the allowed options.
    pub fn accepts(&self, label: &str) -> bool {
        self.options.iter().any(|o| o == label)
    }

    /// Returns the referral message if `label` disqualifies the patient.
    pub fn evaluate(&self, label: &str) -> Option<&str> {
        self.rule.as_ref().and_then(|rule| rule.evaluate(label))
    }
}
