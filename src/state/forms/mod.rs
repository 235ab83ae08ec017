//! Form domain layer
//!
//! Declarative field rules, the pure validator, per-field state and the
//! controller that ties them together and gates submission.

mod controller;
mod field;
mod rule;
mod validator;

pub use controller::{
    FormController, FormEvent, FormSnapshot, PendingSubmission, SubmissionResult, SubmitOutcome,
    SubmitStart,
};
pub use field::{cycle_choice, format_phone, FieldState};
pub use rule::{FieldId, FieldKind, FieldRule, FormLayout, RuleSet, MESSAGE_MAX_CHARS};
pub use validator::{validate, ValidationOutcome, REQUIRED_MESSAGE};
