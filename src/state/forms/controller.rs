//! Form controller: owns every field state and gates submission

use super::field::{shape_input, FieldState};
use super::rule::{FieldId, RuleSet};
use super::validator::{validate, ValidationOutcome};
use crate::gateway::{dispatch, FormValues, SubmissionError, SubmissionGateway};
use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;
use uuid::Uuid;

/// Outcome of one submit attempt that reached the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure(String),
}

/// Instruction for the presentation layer, in the order it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldValidated {
        field: FieldId,
        outcome: ValidationOutcome,
    },
    /// Move input focus to this field
    FocusField(FieldId),
    SubmittingChanged(bool),
    SubmissionFinished(SubmissionResult),
}

/// A validated payload waiting to be handed to the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: Uuid,
    pub values: FormValues,
}

/// First half of a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// A submission is already in flight; nothing happened
    Busy,
    /// At least one field failed; the gateway must not be called
    Invalid { first_invalid: FieldId },
    Ready(PendingSubmission),
}

/// Result of a complete submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Busy,
    Invalid { first_invalid: FieldId },
    Completed(SubmissionResult),
}

/// Read-only view over the whole form
#[derive(Debug, Clone, Copy)]
pub struct FormSnapshot<'a> {
    pub fields: &'a BTreeMap<FieldId, FieldState>,
    pub is_submitting: bool,
}

impl FormSnapshot<'_> {
    /// True when no field currently shows an error
    pub fn is_clean(&self) -> bool {
        self.fields.values().all(|f| f.error.is_none())
    }
}

/// Owns the field states of one form for the lifetime of a page view
#[derive(Debug)]
pub struct FormController {
    rules: RuleSet,
    fields: BTreeMap<FieldId, FieldState>,
    is_submitting: bool,
    events: VecDeque<FormEvent>,
}

impl FormController {
    pub fn new(rules: RuleSet) -> Self {
        let fields = rules.fields().map(|f| (f, FieldState::new())).collect();
        Self {
            rules,
            fields,
            is_submitting: false,
            events: VecDeque::new(),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn field(&self, field: FieldId) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    /// Declared fields in on-screen order
    pub fn field_ids(&self) -> Vec<FieldId> {
        self.fields.keys().copied().collect()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn snapshot(&self) -> FormSnapshot<'_> {
        FormSnapshot {
            fields: &self.fields,
            is_submitting: self.is_submitting,
        }
    }

    /// Current values of every field, as typed
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(field, state)| (*field, state.value.clone()))
            .collect()
    }

    /// Take every queued presentation event
    pub fn drain_events(&mut self) -> Vec<FormEvent> {
        self.events.drain(..).collect()
    }

    /// Give `field` input focus, taking it from every other field
    pub fn on_field_focus(&mut self, field: FieldId) {
        for (id, state) in self.fields.iter_mut() {
            state.has_focus = *id == field;
        }
    }

    /// Mark the field touched and validate it
    pub fn on_field_blur(&mut self, field: FieldId) {
        let Some(state) = self.fields.get_mut(&field) else {
            tracing::warn!(%field, "blur on undeclared field");
            return;
        };
        state.has_focus = false;
        state.touched = true;
        self.revalidate(field);
    }

    /// Store new input; touched fields are re-validated straight away
    pub fn on_field_change(&mut self, field: FieldId, value: &str) {
        let Some(rule) = self.rules.get(field) else {
            tracing::warn!(%field, "change on undeclared field");
            return;
        };
        let shaped = shape_input(rule.kind, value);
        let Some(state) = self.fields.get_mut(&field) else {
            return;
        };
        state.value = shaped;
        if state.touched {
            self.revalidate(field);
        }
    }

    /// Validate everything and, if clean, switch to submitting.
    ///
    /// The returned payload must be handed back through [`Self::finish_submit`]
    /// once the gateway answers.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.is_submitting {
            tracing::debug!("submit ignored, already submitting");
            return SubmitStart::Busy;
        }

        let mut first_invalid = None;
        for field in self.field_ids() {
            let outcome = self.revalidate(field);
            if !outcome.is_valid() {
                if let Some(state) = self.fields.get_mut(&field) {
                    state.touched = true;
                }
                first_invalid.get_or_insert(field);
            }
        }

        if let Some(field) = first_invalid {
            tracing::debug!(%field, "submit blocked by invalid field");
            self.events.push_back(FormEvent::FocusField(field));
            return SubmitStart::Invalid {
                first_invalid: field,
            };
        }

        self.is_submitting = true;
        self.events.push_back(FormEvent::SubmittingChanged(true));

        let pending = PendingSubmission {
            id: Uuid::new_v4(),
            values: self.values(),
        };
        tracing::info!(submission = %pending.id, "submitting contact form");
        SubmitStart::Ready(pending)
    }

    /// Record the gateway's answer for the in-flight submission
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) -> SubmissionResult {
        if !self.is_submitting {
            tracing::warn!("submission finished while none was in flight");
        }
        self.is_submitting = false;
        self.events.push_back(FormEvent::SubmittingChanged(false));

        let outcome = match result {
            Ok(()) => {
                tracing::info!("contact form sent");
                self.fields.values_mut().for_each(FieldState::reset);
                SubmissionResult::Success
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form submission failed");
                SubmissionResult::Failure(err.to_string())
            }
        };
        self.events
            .push_back(FormEvent::SubmissionFinished(outcome.clone()));
        outcome
    }

    /// Validate, send and record the answer in one go
    pub async fn submit(
        &mut self,
        gateway: &dyn SubmissionGateway,
        timeout: Option<Duration>,
    ) -> SubmitOutcome {
        match self.begin_submit() {
            SubmitStart::Busy => SubmitOutcome::Busy,
            SubmitStart::Invalid { first_invalid } => SubmitOutcome::Invalid { first_invalid },
            SubmitStart::Ready(pending) => {
                let result = dispatch(gateway, &pending.values, timeout).await;
                SubmitOutcome::Completed(self.finish_submit(result))
            }
        }
    }

    fn revalidate(&mut self, field: FieldId) -> ValidationOutcome {
        let (Some(rule), Some(state)) = (self.rules.get(field), self.fields.get_mut(&field)) else {
            return ValidationOutcome::Valid;
        };
        let outcome = validate(field, &state.value, rule);
        state.error = outcome.message().map(str::to_string);
        self.events.push_back(FormEvent::FieldValidated {
            field,
            outcome: outcome.clone(),
        });
        outcome
    }
}
