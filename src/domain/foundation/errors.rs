//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur while validating domain definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' contains duplicate value '{value}'")]
    Duplicate { field: String, value: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this validation failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::Duplicate { .. } => ErrorCode::Duplicate,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    Duplicate,
    InvalidFormat,

    // Caller errors
    InvalidInput,
    InvalidStateTransition,

    // Definition errors
    InvalidDefinition,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::Duplicate => "DUPLICATE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::InvalidDefinition => "INVALID_DEFINITION",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("prompt");
        assert_eq!(format!("{}", err), "Field 'prompt' cannot be empty");
    }

    #[test]
    fn duplicate_displays_correctly() {
        let err = ValidationError::duplicate("id", "age");
        assert_eq!(
            format!("{}", err),
            "Field 'id' contains duplicate value 'age'"
        );
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("rule", "'Maybe' is not an option");
        assert_eq!(
            format!("{}", err),
            "Field 'rule' has invalid format: 'Maybe' is not an option"
        );
    }

    #[test]
    fn validation_errors_map_to_codes() {
        assert_eq!(ValidationError::empty_field("x").code(), ErrorCode::EmptyField);
        assert_eq!(ValidationError::duplicate("x", "y").code(), ErrorCode::Duplicate);
        assert_eq!(
            ValidationError::invalid_format("x", "y").code(),
            ErrorCode::InvalidFormat
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidInput), "INVALID_INPUT");
        assert_eq!(
            format!("{}", ErrorCode::InvalidStateTransition),
            "INVALID_STATE_TRANSITION"
        );
        assert_eq!(format!("{}", ErrorCode::InvalidDefinition), "INVALID_DEFINITION");
    }
}
