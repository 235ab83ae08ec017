//! Company contact details panel

use crate::state::company::{info_height, CONTACT_INFO, INFO_INTRO};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Contact Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(info_height()),
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    let intro = Paragraph::new(INFO_INTRO)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    let mut lines = Vec::new();
    for (i, item) in CONTACT_INFO.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", item.icon), Style::default().fg(Color::Cyan)),
            Span::styled(item.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        for text in item.lines {
            lines.push(Line::from(Span::styled(
                format!("  {text}"),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}
