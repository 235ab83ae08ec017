//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::Notification;
use ratatui::{style::Color, Frame};

/// Render the send-failure dialog with the reason underneath
pub fn render_error_dialog(frame: &mut Frame, reason: &str) {
    let mut paragraphs = vec![Notification::FAILURE_TEXT];
    if !reason.is_empty() {
        paragraphs.push(reason);
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            paragraphs,
            max_width: 60,
        },
    );
}
