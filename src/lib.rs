//! Contact TUI - a "Contact Us" page for the terminal
//!
//! A Ratatui-based page with a hero banner, company details and a contact
//! form that validates as you type and sends through a simulated gateway.
//!
//! The form logic lives in [`state`] and is independent of the terminal:
//! [`state::FormController`] owns the field states, validates them against a
//! [`state::RuleSet`] and hands clean payloads to a
//! [`gateway::SubmissionGateway`].

pub mod app;
pub mod config;
pub mod gateway;
pub mod platform;
pub mod state;
pub mod ui;
