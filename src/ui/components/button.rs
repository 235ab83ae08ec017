//! Submit button component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending Message...";

/// Label for the submit button in its current state
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    }
}

/// Render the form's submit button, dimmed while a send is pending
pub fn render_submit_button(frame: &mut Frame, area: Rect, is_selected: bool, is_submitting: bool) {
    let border_style = if is_submitting {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Blue)
    };

    let text_style = if is_submitting {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let marker = if is_selected && !is_submitting { "▸ " } else { "" };
    let paragraph = Paragraph::new(format!("{marker}{}", submit_label(is_submitting)))
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_follows_submitting_flag() {
        assert_eq!(submit_label(false), "Send Message");
        assert_eq!(submit_label(true), "Sending Message...");
    }
}
