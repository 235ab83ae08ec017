//! Application state and core logic

use crate::config::ContactConfig;
use crate::gateway::{dispatch, SubmissionError, SubmissionGateway};
use crate::state::{
    AppState, FieldKind, Focus, FormController, FormEvent, Notification, RuleSet, SubmitStart,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// Receives the gateway's answer for the submission in flight
type InFlight = oneshot::Receiver<Result<(), SubmissionError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    gateway: Arc<dyn SubmissionGateway>,
    timeout: Option<Duration>,
    in_flight: Option<InFlight>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let rules = RuleSet::for_layout(config.layout())?;
        Ok(Self::with_gateway(
            rules,
            Arc::new(config.gateway()),
            config.submit_timeout(),
        ))
    }

    pub fn with_gateway(
        rules: RuleSet,
        gateway: Arc<dyn SubmissionGateway>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            state: AppState::new(FormController::new(rules)),
            gateway,
            timeout,
            in_flight: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is waiting on the gateway
    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Advance animations and collect a finished submission, once per frame
    pub fn tick(&mut self) {
        self.state.reveal.update();

        if let Some(rx) = self.in_flight.as_mut() {
            let result = match rx.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                // Sender dropped without answering: the send task died
                Err(TryRecvError::Closed) => Err(SubmissionError::Unexpected),
            };
            self.in_flight = None;
            self.state.form.finish_submit(result);
            self.apply_form_events();
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.state.reveal.is_complete() {
            self.state.reveal.skip();
        }

        if self.state.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notification();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Left => self.state.cycle_choice(false),
            KeyCode::Right => self.state.cycle_choice(true),
            KeyCode::Enter => match self.state.focus() {
                Focus::SubmitButton => self.submit(),
                Focus::Field(field) => {
                    let multiline = self
                        .state
                        .form
                        .rules()
                        .get(field)
                        .is_some_and(|rule| rule.kind.is_multiline());
                    if multiline {
                        self.state.input_char('\n');
                    } else {
                        self.state.next_focus();
                    }
                }
            },
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(c) if !ctrl && self.state.accepts_text() => self.state.input_char(c),
            _ => {}
        }

        self.apply_form_events();
    }

    /// Validate the form and, if clean, hand it to the gateway on a task
    fn submit(&mut self) {
        // Blur first so the active field is validated like the rest
        if let Some(field) = self.state.active_field() {
            self.state.form.on_field_blur(field);
            self.state.form.on_field_focus(field);
        }

        let SubmitStart::Ready(pending) = self.state.form.begin_submit() else {
            return;
        };

        let (tx, rx) = oneshot::channel();
        let gateway = Arc::clone(&self.gateway);
        let timeout = self.timeout;
        tokio::spawn(async move {
            let result = dispatch(gateway.as_ref(), &pending.values, timeout).await;
            if tx.send(result).is_err() {
                tracing::warn!(submission = %pending.id, "submission result dropped");
            }
        });
        self.in_flight = Some(rx);
    }

    /// Turn queued form events into UI state
    fn apply_form_events(&mut self) {
        for event in self.state.form.drain_events() {
            match event {
                FormEvent::FocusField(field) => self.state.focus_field(field),
                FormEvent::SubmittingChanged(true) => {
                    self.state.status_message = Some("Sending message...".to_string());
                }
                FormEvent::SubmittingChanged(false) => self.state.status_message = None,
                FormEvent::SubmissionFinished(result) => {
                    self.state.notification = Some(Notification::from(result));
                }
                FormEvent::FieldValidated { .. } => {}
            }
        }
    }

    /// Remaining characters for a capped field, if the active field is one
    pub fn remaining_chars(&self) -> Option<usize> {
        let field = self.state.active_field()?;
        let FieldKind::Capped(max) = self.state.form.rules().get(field)?.kind else {
            return None;
        };
        let used = self.state.form.field(field)?.char_count();
        Some(max.saturating_sub(used))
    }
}
