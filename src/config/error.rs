//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Log filter directive cannot be empty")]
    EmptyLogLevel,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Questionnaire path must point to a .yaml or .yml file: {0}")]
    InvalidQuestionnairePath(String),
}
