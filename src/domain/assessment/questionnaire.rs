//! Questionnaire - the ordered, immutable list of screening questions.
//!
//! The flow is driven entirely by this table: adding, removing or reordering
//! screening questions is a data change, never a control-flow change.
//!
//! # Standard UTI questionnaire
//!
//! 1. gender → 2. age → 3. pregnancy → 4. red_flags → 5. symptoms
//!
//! Definitions can also be loaded from YAML:
//!
//! ```yaml
//! questions:
//!   - id: age
//!     prompt: Are you 12 years of age or older?
//!     options: [Yes, No]
//!     rule:
//!       disqualifying: [No]
//!       message: Patients under 12 must see a physician.
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::{ExclusionRule, Question, QuestionnaireError};
use crate::domain::foundation::ValidationError;

/// Identifier of the question whose answer appears in the summary.
pub const SYMPTOMS_QUESTION_ID: &str = "symptoms";

/// Ordered, validated sequence of questions.
///
/// # Invariants
///
/// - at least one question
/// - question ids are non-empty and unique
/// - every question has a non-empty prompt and at least one option
/// - option labels are unique within a question
/// - every disqualifying label is one of its question's options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
struct QuestionnaireFile {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Builds a questionnaire, validating every invariant.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        Self::validate(&questions)?;
        Ok(Self { questions })
    }

    /// The built-in Ontario minor-ailment UTI screening questionnaire.
    pub fn standard() -> Self {
        Self {
            questions: vec![
                Question::new("gender", "What is your biological sex?", ["Female", "Male"])
                    .with_rule(ExclusionRule::on(
                        "Male",
                        "Ontario pharmacists can only treat UTIs in females.",
                    )),
                Question::new("age", "Are you 12 years of age or older?", ["Yes", "No"])
                    .with_rule(ExclusionRule::on(
                        "No",
                        "Patients under 12 must see a physician.",
                    )),
                Question::new("pregnancy", "Is there any chance you are pregnant?", ["Yes", "No"])
                    .with_rule(ExclusionRule::on(
                        "Yes",
                        "UTIs during pregnancy require physician monitoring.",
                    )),
                Question::new(
                    "red_flags",
                    "Do you have fever, chills, or mid-back pain?",
                    ["Yes", "No"],
                )
                .with_rule(ExclusionRule::on(
                    "Yes",
                    "These suggest a kidney infection. Please go to Urgent Care.",
                )),
                Question::new(
                    SYMPTOMS_QUESTION_ID,
                    "Do you have burning, urgency, or frequent urination?",
                    ["Yes", "No"],
                )
                .with_rule(ExclusionRule::on(
                    "No",
                    "Without these symptoms, it may not be a UTI. Consult a pharmacist.",
                )),
            ],
        }
    }

    /// Parses and validates a questionnaire from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, QuestionnaireError> {
        let file: QuestionnaireFile = serde_yaml::from_str(yaml)?;
        Self::new(file.questions)
    }

    /// Reads, parses and validates a questionnaire from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, QuestionnaireError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Serializes the questionnaire to YAML.
    pub fn to_yaml(&self) -> Result<String, QuestionnaireError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Returns all questions in order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the question at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Looks a question up by identifier.
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id().as_str() == id)
    }

    /// Number of questions. Always at least one.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns true if there are no questions. Never true once validated.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the final question.
    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }

    fn validate(questions: &[Question]) -> Result<(), ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }

        let mut seen_ids = HashSet::new();
        for question in questions {
            let id = question.id().as_str();
            if id.trim().is_empty() {
                return Err(ValidationError::empty_field("questions[].id"));
            }
            if !seen_ids.insert(id) {
                return Err(ValidationError::duplicate("questions[].id", id));
            }
            if question.prompt().trim().is_empty() {
                return Err(ValidationError::empty_field(format!("questions[{}].prompt", id)));
            }
            if question.options().is_empty() {
                return Err(ValidationError::empty_field(format!("questions[{}].options", id)));
            }

            let mut seen_options = HashSet::new();
            for option in question.options() {
                if option.trim().is_empty() {
                    return Err(ValidationError::empty_field(format!(
                        "questions[{}].options[]",
                        id
                    )));
                }
                if !seen_options.insert(option.as_str()) {
                    return Err(ValidationError::duplicate(
                        format!("questions[{}].options", id),
                        option,
                    ));
                }
            }

            if let Some(rule) = question.rule() {
                if rule.message.trim().is_empty() {
                    return Err(ValidationError::empty_field(format!(
                        "questions[{}].rule.message",
                        id
                    )));
                }
                if let Some(label) = rule.disqualifying.iter().find(|d| !question.accepts(d)) {
                    return Err(ValidationError::invalid_format(
                        format!("questions[{}].rule.disqualifying", id),
                        format!("'{}' is not one of the question's options", label),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn standard_questionnaire_is_valid() {
        let standard = Questionnaire::standard();
        assert!(Questionnaire::new(standard.questions().to_vec()).is_ok());
    }

    #[test]
    fn standard_questionnaire_is_in_canonical_order() {
        let standard = Questionnaire::standard();
        let ids: Vec<&str> = standard
            .questions()
            .iter()
            .map(|q| q.id().as_str())
            .collect();
        assert_eq!(ids, ["gender", "age", "pregnancy", "red_flags", "symptoms"]);
    }

    #[test]
    fn standard_disqualifying_answers() {
        let q = Questionnaire::standard();
        let disqualifying: Vec<&str> = q
            .questions()
            .iter()
            .map(|q| q.rule().unwrap().disqualifying[0].as_str())
            .collect();
        assert_eq!(disqualifying, ["Male", "No", "Yes", "Yes", "No"]);
    }

    #[test]
    fn empty_questionnaire_is_rejected() {
        let err = Questionnaire::new(vec![]).unwrap_err();
        assert!(matches!(
            err,
            QuestionnaireError::Invalid(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Questionnaire::new(vec![
            Question::new("age", "First?", ["Yes", "No"]),
            Question::new("age", "Second?", ["Yes", "No"]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            QuestionnaireError::Invalid(ValidationError::Duplicate { ref value, .. }) if value == "age"
        ));
    }

    #[test]
    fn question_without_options_is_rejected() {
        let options: [&str; 0] = [];
        let err = Questionnaire::new(vec![Question::new("age", "Age?", options)]).unwrap_err();
        assert!(err.to_string().contains("questions[age].options"));
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let err =
            Questionnaire::new(vec![Question::new("age", "Age?", ["Yes", "Yes"])]).unwrap_err();
        assert!(matches!(
            err,
            QuestionnaireError::Invalid(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn disqualifying_label_must_be_an_option() {
        let err = Questionnaire::new(vec![Question::new("age", "Age?", ["Yes", "No"])
            .with_rule(ExclusionRule::on("Maybe", "refer"))])
        .unwrap_err();
        assert!(err.to_string().contains("'Maybe' is not one of the question's options"));
    }

    #[test]
    fn blank_referral_message_is_rejected() {
        let err = Questionnaire::new(vec![
            Question::new("age", "Age?", ["Yes", "No"]).with_rule(ExclusionRule::on("No", "  "))
        ])
        .unwrap_err();
        assert!(err.to_string().contains("rule.message"));
    }

    #[test]
    fn find_looks_up_by_id() {
        let q = Questionnaire::standard();
        assert_eq!(q.find("pregnancy").unwrap().options(), ["Yes", "No"]);
        assert!(q.find("allergies").is_none());
        assert_eq!(q.last_index(), 4);
    }

    #[test]
    fn parses_yaml_with_optional_rule() {
        let yaml = r#"
questions:
  - id: age
    prompt: Are you 12 years of age or older?
    options: ["Yes", "No"]
    rule:
      disqualifying: ["No"]
      message: Patients under 12 must see a physician.
  - id: symptoms
    prompt: Do you have burning, urgency, or frequent urination?
    options: ["Yes", "No"]
"#;
        let q = Questionnaire::from_yaml_str(yaml).unwrap();
        assert_eq!(q.len(), 2);
        assert_eq!(
            q.get(0).unwrap().evaluate("No"),
            Some("Patients under 12 must see a physician.")
        );
        assert!(q.get(1).unwrap().rule().is_none());
    }

    #[test]
    fn yaml_is_validated_after_parsing() {
        let yaml = r#"
questions:
  - id: age
    prompt: Age?
    options: ["Yes", "No"]
    rule:
      disqualifying: ["Unknown"]
      message: refer
"#;
        assert!(matches!(
            Questionnaire::from_yaml_str(yaml),
            Err(QuestionnaireError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        assert!(matches!(
            Questionnaire::from_yaml_str("questions: [unterminated"),
            Err(QuestionnaireError::Parse(_))
        ));
    }

    #[test]
    fn standard_questionnaire_survives_yaml() {
        let standard = Questionnaire::standard();
        let yaml = standard.to_yaml().unwrap();
        assert_eq!(Questionnaire::from_yaml_str(&yaml).unwrap(), standard);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "questions:\n  - id: gender\n    prompt: Sex?\n    options: [\"Female\", \"Male\"]\n"
        )
        .unwrap();

        let q = Questionnaire::from_yaml_file(file.path()).unwrap();
        assert_eq!(q.get(0).unwrap().id().as_str(), "gender");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            Questionnaire::from_yaml_file("/nonexistent/questionnaire.yaml"),
            Err(QuestionnaireError::Io(_))
        ));
    }
}
