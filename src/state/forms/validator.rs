//! Field validation against a declarative rule

use super::rule::{FieldId, FieldRule};

/// Message used for every required field left empty
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Result of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(String),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Error message, if invalid
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Validate `raw` against `rule`.
///
/// Checks run on the trimmed value in a fixed order and stop at the first
/// failure: required, empty-optional, minimum length, maximum length, pattern.
pub fn validate(field: FieldId, raw: &str, rule: &FieldRule) -> ValidationOutcome {
    let value = raw.trim();

    if value.is_empty() {
        return if rule.required {
            tracing::debug!(%field, "required field is empty");
            ValidationOutcome::Invalid(REQUIRED_MESSAGE.to_string())
        } else {
            ValidationOutcome::Valid
        };
    }

    let len = value.chars().count();
    if rule.min_length.is_some_and(|min| len < min) {
        tracing::debug!(%field, len, "field is too short");
        return ValidationOutcome::Invalid(rule.error_message.clone());
    }
    if rule.max_length.is_some_and(|max| len > max) {
        tracing::debug!(%field, len, "field is too long");
        return ValidationOutcome::Invalid(rule.error_message.clone());
    }
    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            tracing::debug!(%field, "field does not match pattern");
            return ValidationOutcome::Invalid(rule.error_message.clone());
        }
    }

    ValidationOutcome::Valid
}
