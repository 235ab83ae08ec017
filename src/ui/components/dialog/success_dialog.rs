//! Success dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::Notification;
use ratatui::{style::Color, Frame};

/// Render the message-sent confirmation
pub fn render_success_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Message Sent",
            accent: Color::Green,
            paragraphs: vec![Notification::SUCCESS_TEXT],
            max_width: 60,
        },
    );
}
