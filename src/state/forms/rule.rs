//! Declarative field rules and the rule tables for each form layout

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Hard cap on the message body, in characters
pub const MESSAGE_MAX_CHARS: usize = 1000;

/// Options offered by the subject selector
pub const SUBJECT_OPTIONS: &[&str] = &[
    "General Inquiry",
    "Sales",
    "Support",
    "Partnership",
    "Other",
];

/// Identifies one field of the contact form.
///
/// Variants are declared in on-screen order, so ordered collections keyed by
/// `FieldId` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Subject,
    Message,
}

impl FieldId {
    /// Key used in submitted payloads
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::FirstName => "John",
            Self::LastName => "Doe",
            Self::Email => "john@example.com",
            Self::Phone => "555-123-4567",
            Self::Subject => "How can we help you?",
            Self::Message => "Tell us how we can help...",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How raw input is turned into a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, accepted as typed
    Text,
    /// Digits regrouped as `XXX-XXX-XXXX` on every keystroke
    Phone,
    /// Free text truncated at the given number of characters
    Capped(usize),
    /// One of a fixed list of options; empty means nothing selected
    Choice(&'static [&'static str]),
}

impl FieldKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Capped(_))
    }
}

/// Validation constraints for one named field.
///
/// A pattern should be satisfiable by some string whose length lies within
/// `[min_length, max_length]`; this is not checked.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: FieldId,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub error_message: String,
}

impl FieldRule {
    pub fn new(field: FieldId, error_message: &str) -> Self {
        Self {
            field,
            kind: FieldKind::Text,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            error_message: error_message.to_string(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(Regex::new(pattern)?);
        Ok(self)
    }
}

/// Which field set the form shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormLayout {
    /// First/last name, email, optional phone, subject selector, message
    #[default]
    Detailed,
    /// Full name, email, optional subject, message
    Quick,
}

const NAME_PATTERN: &str = r"^[a-zA-Z\s]+$";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
/// Matches the shape produced by phone formatting, complete numbers only
const PHONE_PATTERN: &str = r"^[1-9]\d{2}-\d{3}-\d{4}$";

/// Mapping from field to rule, built once and read-only afterwards
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: BTreeMap<FieldId, FieldRule>,
}

impl RuleSet {
    pub fn for_layout(layout: FormLayout) -> Result<Self, regex::Error> {
        match layout {
            FormLayout::Detailed => Self::detailed(),
            FormLayout::Quick => Self::quick(),
        }
    }

    pub fn detailed() -> Result<Self, regex::Error> {
        Ok(Self::from_rules([
            FieldRule::new(
                FieldId::FirstName,
                "Please enter a valid first name (letters only, min 2 characters)",
            )
            .required()
            .min_length(2)
            .pattern(NAME_PATTERN)?,
            FieldRule::new(
                FieldId::LastName,
                "Please enter a valid last name (letters only, min 2 characters)",
            )
            .required()
            .min_length(2)
            .pattern(NAME_PATTERN)?,
            FieldRule::new(FieldId::Email, "Please enter a valid email address")
                .required()
                .pattern(EMAIL_PATTERN)?,
            FieldRule::new(FieldId::Phone, "Please enter a valid phone number")
                .kind(FieldKind::Phone)
                .pattern(PHONE_PATTERN)?,
            FieldRule::new(FieldId::Subject, "Please select a subject")
                .kind(FieldKind::Choice(SUBJECT_OPTIONS))
                .required(),
            FieldRule::new(
                FieldId::Message,
                "Message must be between 10 and 1000 characters",
            )
            .kind(FieldKind::Capped(MESSAGE_MAX_CHARS))
            .required()
            .min_length(10)
            .max_length(MESSAGE_MAX_CHARS),
        ]))
    }

    pub fn quick() -> Result<Self, regex::Error> {
        Ok(Self::from_rules([
            FieldRule::new(FieldId::Name, "Name must be at least 2 characters")
                .required()
                .min_length(2),
            FieldRule::new(FieldId::Email, "Please enter a valid email address")
                .required()
                .pattern(EMAIL_PATTERN)?,
            FieldRule::new(FieldId::Subject, ""),
            FieldRule::new(FieldId::Message, "Message must be at least 10 characters")
                .kind(FieldKind::Capped(MESSAGE_MAX_CHARS))
                .required()
                .min_length(10),
        ]))
    }

    pub fn from_rules(rules: impl IntoIterator<Item = FieldRule>) -> Self {
        Self {
            rules: rules.into_iter().map(|rule| (rule.field, rule)).collect(),
        }
    }

    pub fn get(&self, field: FieldId) -> Option<&FieldRule> {
        self.rules.get(&field)
    }

    /// Fields in on-screen order
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.rules.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_id {
        use super::*;

        #[test]
        fn test_ordering_follows_screen_order() {
            assert!(FieldId::FirstName < FieldId::LastName);
            assert!(FieldId::Email < FieldId::Phone);
            assert!(FieldId::Subject < FieldId::Message);
        }

        #[test]
        fn test_keys_match_payload_names() {
            assert_eq!(FieldId::FirstName.key(), "firstName");
            assert_eq!(FieldId::Message.to_string(), "message");
        }

        #[test]
        fn test_serde_uses_camel_case() {
            let json = serde_json::to_string(&FieldId::LastName).unwrap();
            assert_eq!(json, "\"lastName\"");
        }
    }

    mod rule_set {
        use super::*;

        #[test]
        fn test_detailed_fields_in_order() {
            let rules = RuleSet::detailed().unwrap();
            let fields: Vec<FieldId> = rules.fields().collect();
            assert_eq!(
                fields,
                vec![
                    FieldId::FirstName,
                    FieldId::LastName,
                    FieldId::Email,
                    FieldId::Phone,
                    FieldId::Subject,
                    FieldId::Message,
                ]
            );
        }

        #[test]
        fn test_quick_fields_in_order() {
            let rules = RuleSet::quick().unwrap();
            let fields: Vec<FieldId> = rules.fields().collect();
            assert_eq!(
                fields,
                vec![
                    FieldId::Name,
                    FieldId::Email,
                    FieldId::Subject,
                    FieldId::Message
                ]
            );
        }

        #[test]
        fn test_detailed_message_limits() {
            let rules = RuleSet::detailed().unwrap();
            let message = rules.get(FieldId::Message).unwrap();
            assert!(message.required);
            assert_eq!(message.min_length, Some(10));
            assert_eq!(message.max_length, Some(MESSAGE_MAX_CHARS));
            assert_eq!(message.kind, FieldKind::Capped(MESSAGE_MAX_CHARS));
        }

        #[test]
        fn test_phone_is_optional() {
            let rules = RuleSet::detailed().unwrap();
            let phone = rules.get(FieldId::Phone).unwrap();
            assert!(!phone.required);
            assert_eq!(phone.kind, FieldKind::Phone);
        }

        #[test]
        fn test_for_layout_dispatches() {
            assert_eq!(RuleSet::for_layout(FormLayout::Detailed).unwrap().len(), 6);
            assert_eq!(RuleSet::for_layout(FormLayout::Quick).unwrap().len(), 4);
        }

        #[test]
        fn test_invalid_pattern_is_an_error() {
            let result = FieldRule::new(FieldId::Name, "bad").pattern("([");
            assert!(result.is_err());
        }

        #[test]
        fn test_later_rule_for_same_field_wins() {
            let rules = RuleSet::from_rules([
                FieldRule::new(FieldId::Email, "first"),
                FieldRule::new(FieldId::Email, "second"),
            ]);
            assert_eq!(rules.len(), 1);
            assert_eq!(rules.get(FieldId::Email).unwrap().error_message, "second");
        }
    }

    mod form_layout {
        use super::*;

        #[test]
        fn test_default_is_detailed() {
            assert_eq!(FormLayout::default(), FormLayout::Detailed);
        }

        #[test]
        fn test_deserialize_lowercase() {
            let layout: FormLayout = serde_json::from_str("\"quick\"").unwrap();
            assert_eq!(layout, FormLayout::Quick);
        }
    }
}
