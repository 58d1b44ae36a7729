//! AnswerSet - answers recorded during one assessment session.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::QuestionId;

/// Map from question identifier to the selected answer label.
///
/// Keyed lookup only; insertion order is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: HashMap<QuestionId, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, returning the label it replaced, if any.
    pub fn record(&mut self, id: QuestionId, label: impl Into<String>) -> Option<String> {
        self.answers.insert(id, label.into())
    }

    /// Returns the answer recorded for `id`.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.answers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates over (question id, answer) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.answers.iter().map(|(id, label)| (id, label.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_answer_set_is_empty() {
        let answers = AnswerSet::new();
        assert!(answers.is_empty());
        assert_eq!(answers.get("gender"), None);
    }

    #[test]
    fn record_then_get() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.record(QuestionId::from("gender"), "Female"), None);
        assert_eq!(answers.get("gender"), Some("Female"));
        assert!(answers.contains("gender"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn record_overwrites_previous_answer() {
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::from("age"), "No");
        let previous = answers.record(QuestionId::from("age"), "Yes");
        assert_eq!(previous.as_deref(), Some("No"));
        assert_eq!(answers.get("age"), Some("Yes"));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::from("symptoms"), "Yes");
        assert_eq!(
            serde_json::to_string(&answers).unwrap(),
            r#"{"symptoms":"Yes"}"#
        );
    }
}
