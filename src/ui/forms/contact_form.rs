//! Contact form rendering

use super::field_renderer::{draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldId, FieldKind, Focus};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Minimum rows for the message box, error line included
const MESSAGE_MIN_HEIGHT: u16 = 7;

/// Field pairs that share a row
const PAIRED: &[(FieldId, FieldId)] = &[
    (FieldId::FirstName, FieldId::LastName),
    (FieldId::Email, FieldId::Phone),
    (FieldId::Name, FieldId::Email),
];

/// Group fields into display rows, side by side where a pair allows
pub fn form_rows(fields: &[FieldId]) -> Vec<Vec<FieldId>> {
    let mut rows = Vec::new();
    let mut i = 0;
    while i < fields.len() {
        let paired = fields
            .get(i + 1)
            .is_some_and(|next| PAIRED.contains(&(fields[i], *next)));
        if paired {
            rows.push(vec![fields[i], fields[i + 1]]);
            i += 2;
        } else {
            rows.push(vec![fields[i]]);
            i += 1;
        }
    }
    rows
}

/// Draw the contact form panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Send us a Message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.state.form;
    let rows = form_rows(&form.field_ids());

    let mut constraints: Vec<Constraint> = rows
        .iter()
        .map(|row| {
            let multiline = row.iter().any(|field| {
                form.rules()
                    .get(*field)
                    .is_some_and(|rule| rule.kind.is_multiline())
            });
            if multiline {
                Constraint::Min(MESSAGE_MIN_HEIGHT)
            } else {
                Constraint::Length(FIELD_HEIGHT)
            }
        })
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let focus = app.state.focus();
    for (row, row_area) in rows.iter().zip(chunks.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, row.len() as u32); row.len()])
            .spacing(1)
            .split(*row_area);

        for (field, cell) in row.iter().zip(cells.iter()) {
            let (Some(rule), Some(state)) = (form.rules().get(*field), form.field(*field)) else {
                continue;
            };
            let view = FieldView {
                id: *field,
                kind: rule.kind,
                required: rule.required,
                state,
                is_active: focus == Focus::Field(*field),
            };
            draw_field(frame, *cell, &view);
        }
    }

    if let Some(button_area) = chunks.last() {
        render_submit_button(
            frame,
            *button_area,
            focus == Focus::SubmitButton,
            form.is_submitting(),
        );
    }
}

/// Short hint for the active field, shown in the status bar
pub fn field_hint(app: &App) -> Option<&'static str> {
    let field = app.state.active_field()?;
    match app.state.form.rules().get(field)?.kind {
        FieldKind::Choice(_) => Some("←/→: choose"),
        FieldKind::Capped(_) => Some("Enter: new line"),
        FieldKind::Phone => Some("digits only"),
        FieldKind::Text => None,
    }
}
