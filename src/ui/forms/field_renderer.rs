//! Field rendering utilities for forms

use crate::state::{FieldId, FieldKind, FieldState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a single-line field takes: box plus error line
pub const FIELD_HEIGHT: u16 = 4;

/// Everything needed to draw one field
pub struct FieldView<'a> {
    pub id: FieldId,
    pub kind: FieldKind,
    pub required: bool,
    pub state: &'a FieldState,
    pub is_active: bool,
}

impl FieldView<'_> {
    fn border_color(&self) -> Color {
        if self.state.is_errored() {
            Color::Red
        } else if self.is_active {
            Color::Cyan
        } else if self.state.is_focused() {
            Color::White
        } else {
            Color::DarkGray
        }
    }

    fn title(&self) -> String {
        let marker = if self.required { " *" } else { "" };
        format!(" {}{} ", self.id.label(), marker)
    }
}

/// Draw a form field with its error line underneath
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let border_style = Style::default().fg(view.border_color());
    let mut block = Block::default()
        .title(view.title())
        .borders(Borders::ALL)
        .border_style(border_style);

    if let FieldKind::Capped(max) = view.kind {
        let counter = format!(" {}/{} ", view.state.char_count(), max);
        block = block.title_bottom(Line::from(counter).alignment(Alignment::Right));
    }

    let content = match view.kind {
        FieldKind::Choice(_) => choice_content(view),
        FieldKind::Capped(_) => multiline_content(view, chunks[0].height.saturating_sub(2)),
        FieldKind::Text | FieldKind::Phone => single_line_content(view),
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = &view.state.error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_line, chunks[1]);
    }
}

fn cursor(view: &FieldView) -> Span<'static> {
    if view.is_active {
        Span::styled("▌", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("")
    }
}

fn placeholder(view: &FieldView) -> Span<'static> {
    Span::styled(
        view.id.placeholder(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )
}

fn single_line_content<'a>(view: &FieldView<'a>) -> Paragraph<'a> {
    let value = view.state.value.as_str();
    let text = if value.is_empty() && !view.is_active {
        placeholder(view)
    } else {
        Span::raw(value)
    };
    Paragraph::new(Line::from(vec![text, cursor(view)]))
}

fn multiline_content<'a>(view: &FieldView<'a>, visible_rows: u16) -> Paragraph<'a> {
    let value = view.state.value.as_str();
    if value.is_empty() && !view.is_active {
        return Paragraph::new(Line::from(placeholder(view)));
    }

    let mut lines: Vec<Line> = value.split('\n').map(Line::from).collect();
    if view.is_active {
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor(view));
        }
    }

    // Keep the tail in view once the text outgrows the box
    let overflow = (lines.len() as u16).saturating_sub(visible_rows);
    Paragraph::new(lines).scroll((overflow, 0))
}

fn choice_content<'a>(view: &FieldView<'a>) -> Paragraph<'a> {
    let arrow_style = if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value = view.state.value.as_str();
    let label = if value.is_empty() {
        Span::styled(
            "Select a subject",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(value)
    };
    Paragraph::new(Line::from(vec![
        Span::styled("‹ ", arrow_style),
        label,
        Span::styled(" ›", arrow_style),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(state: &FieldState, is_active: bool) -> FieldView<'_> {
        FieldView {
            id: FieldId::Email,
            kind: FieldKind::Text,
            required: true,
            state,
            is_active,
        }
    }

    #[test]
    fn test_title_marks_required() {
        let state = FieldState::new();
        assert_eq!(view(&state, false).title(), " Email Address * ");
    }

    #[test]
    fn test_title_for_optional_field() {
        let state = FieldState::new();
        let view = FieldView {
            id: FieldId::Phone,
            kind: FieldKind::Phone,
            required: false,
            state: &state,
            is_active: false,
        };
        assert_eq!(view.title(), " Phone Number ");
    }

    #[test]
    fn test_error_wins_border_color() {
        let state = FieldState {
            error: Some("bad".to_string()),
            ..Default::default()
        };
        assert_eq!(view(&state, true).border_color(), Color::Red);
    }

    #[test]
    fn test_active_border_is_cyan() {
        let state = FieldState::new();
        assert_eq!(view(&state, true).border_color(), Color::Cyan);
    }

    #[test]
    fn test_filled_inactive_border_is_white() {
        let state = FieldState {
            value: "a@b.co".to_string(),
            ..Default::default()
        };
        assert_eq!(view(&state, false).border_color(), Color::White);
    }

    #[test]
    fn test_empty_inactive_border_is_gray() {
        let state = FieldState::new();
        assert_eq!(view(&state, false).border_color(), Color::DarkGray);
    }
}
