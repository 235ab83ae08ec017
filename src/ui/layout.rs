//! Page layout (hero, info panel, form, status bar)

use super::forms::field_hint;
use crate::app::App;
use crate::platform::{PREV_FIELD_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows for the hero banner
const HERO_HEIGHT: u16 = 5;

/// Screen regions of the contact page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub hero: Rect,
    pub info: Rect,
    pub form: Rect,
    pub status: Rect,
}

/// Split the page, pushing the body down by `reveal_offset` rows while it slides in
pub fn create_layout(area: Rect, reveal_offset: u16) -> PageLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HERO_HEIGHT), // Hero
            Constraint::Min(0),              // Body
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    let offset = reveal_offset.min(chunks[1].height);
    let body = Rect {
        y: chunks[1].y + offset,
        height: chunks[1].height - offset,
        ..chunks[1]
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(body);

    PageLayout {
        hero: chunks[0],
        info: columns[0],
        form: columns[1],
        status: chunks[2],
    }
}

/// Draw the status bar: the pending status, or key hints for the current focus
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let hint_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![];
    if let Some(status) = &app.state.status_message {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(status.as_str(), Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::raw(" "));
        for (key, action) in [
            ("Tab", "next"),
            (PREV_FIELD_SHORTCUT, "prev"),
            (SUBMIT_SHORTCUT, "send"),
            ("Esc", "quit"),
        ] {
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(format!(" {action}  "), hint_style));
        }
        if let Some(hint) = field_hint(app) {
            spans.push(Span::styled(format!("│ {hint}  "), hint_style));
        }
    }

    if let Some(remaining) = app.remaining_chars() {
        spans.push(Span::styled(
            format!("{remaining} characters left"),
            Style::default().fg(if remaining == 0 {
                Color::Red
            } else {
                Color::DarkGray
            }),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn test_layout_at_rest() {
        let layout = create_layout(area(), 0);
        assert_eq!(layout.hero, Rect::new(0, 0, 100, 5));
        assert_eq!(layout.status, Rect::new(0, 39, 100, 1));
        assert_eq!(layout.info.y, 5);
        assert_eq!(layout.info.height, 34);
        assert_eq!(layout.form.y, 5);
        assert_eq!(layout.info.width + layout.form.width, 100);
        assert!(layout.form.width > layout.info.width);
    }

    #[test]
    fn test_reveal_offset_pushes_body_down() {
        let layout = create_layout(area(), 3);
        assert_eq!(layout.info.y, 8);
        assert_eq!(layout.form.y, 8);
        assert_eq!(layout.form.height, 31);
        assert_eq!(layout.status.y, 39);
    }

    #[test]
    fn test_oversized_offset_is_clamped() {
        let layout = create_layout(Rect::new(0, 0, 40, 8), 10);
        assert_eq!(layout.form.height, 0);
    }
}
