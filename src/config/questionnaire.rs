//! Questionnaire source configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::assessment::{Questionnaire, QuestionnaireError};

/// Where the questionnaire definition comes from
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QuestionnaireConfig {
    /// YAML definition to load instead of the built-in questionnaire
    pub path: Option<PathBuf>,
}

impl QuestionnaireConfig {
    /// Loads the configured questionnaire, or the standard one when no
    /// path is set.
    pub fn load(&self) -> Result<Questionnaire, QuestionnaireError> {
        match &self.path {
            Some(path) => {
                tracing::debug!("Loading questionnaire from {}", path.display());
                Questionnaire::from_yaml_file(path)
            }
            None => Ok(Questionnaire::standard()),
        }
    }

    /// Validate questionnaire configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(()),
            _ => Err(ValidationError::InvalidQuestionnairePath(
                path.display().to_string(),
            )),
        }
    }
}
