//! Application state definitions

use super::forms::{cycle_choice, FieldId, FieldKind, FormController, SubmissionResult};
use super::reveal_state::RevealState;

/// Dialog currently covering the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success,
    Failure(String),
}

impl Notification {
    pub const SUCCESS_TEXT: &'static str =
        "Message sent successfully! We'll get back to you soon.";
    pub const FAILURE_TEXT: &'static str =
        "Sorry, there was an error sending your message. Please try again.";
}

impl From<SubmissionResult> for Notification {
    fn from(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Success => Self::Success,
            SubmissionResult::Failure(reason) => Self::Failure(reason),
        }
    }
}

/// What keyboard input goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    SubmitButton,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub form: FormController,
    /// Index into the form's fields; one past the last is the submit button
    pub active_index: usize,
    pub notification: Option<Notification>,
    pub reveal: RevealState,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(form: FormController) -> Self {
        let mut state = Self {
            form,
            active_index: 0,
            notification: None,
            reveal: RevealState::new(),
            status_message: None,
        };
        if let Focus::Field(field) = state.focus() {
            state.form.on_field_focus(field);
        }
        state
    }

    /// Number of focus stops: every field plus the submit button
    pub fn focus_count(&self) -> usize {
        self.form.field_ids().len() + 1
    }

    pub fn focus(&self) -> Focus {
        match self.form.field_ids().get(self.active_index) {
            Some(field) => Focus::Field(*field),
            None => Focus::SubmitButton,
        }
    }

    pub fn active_field(&self) -> Option<FieldId> {
        match self.focus() {
            Focus::Field(field) => Some(field),
            Focus::SubmitButton => None,
        }
    }

    /// Move to the next focus stop (wraps around)
    pub fn next_focus(&mut self) {
        let next = (self.active_index + 1) % self.focus_count();
        self.move_focus(next);
    }

    /// Move to the previous focus stop (wraps around)
    pub fn prev_focus(&mut self) {
        let prev = if self.active_index == 0 {
            self.focus_count() - 1
        } else {
            self.active_index - 1
        };
        self.move_focus(prev);
    }

    /// Focus a specific field, blurring whatever had focus
    pub fn focus_field(&mut self, field: FieldId) {
        if let Some(index) = self.form.field_ids().iter().position(|f| *f == field) {
            self.move_focus(index);
        }
    }

    fn move_focus(&mut self, index: usize) {
        if index == self.active_index {
            return;
        }
        if let Some(field) = self.active_field() {
            self.form.on_field_blur(field);
        }
        self.active_index = index.min(self.focus_count() - 1);
        if let Some(field) = self.active_field() {
            self.form.on_field_focus(field);
        }
    }

    /// Append a character to the active field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active_field() else {
            return;
        };
        let Some(state) = self.form.field(field) else {
            return;
        };
        let mut value = state.value.clone();
        value.push(c);
        self.form.on_field_change(field, &value);
    }

    /// Remove the last character of the active field; a choice is cleared
    pub fn backspace(&mut self) {
        let Some(field) = self.active_field() else {
            return;
        };
        let Some(state) = self.form.field(field) else {
            return;
        };
        let value = if self.accepts_text() {
            let mut value = state.value.clone();
            value.pop();
            value
        } else {
            String::new()
        };
        self.form.on_field_change(field, &value);
    }

    /// Step the active choice field; no-op on other field kinds
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.active_field() else {
            return;
        };
        let Some(FieldKind::Choice(options)) = self.form.rules().get(field).map(|r| r.kind) else {
            return;
        };
        let current = self
            .form
            .field(field)
            .map(|s| s.value.as_str())
            .unwrap_or_default();
        let next = cycle_choice(options, current, forward);
        self.form.on_field_change(field, &next);
    }

    /// Whether typed characters go into the active field
    pub fn accepts_text(&self) -> bool {
        self.active_field()
            .and_then(|field| self.form.rules().get(field))
            .is_some_and(|rule| !matches!(rule.kind, FieldKind::Choice(_)))
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
