//! Contact form view: collaboration cards, fields, submit button, banner

use super::components::{render_button, render_card, BUTTON_HEIGHT};
use crate::app::{App, FormFocus};
use crate::catalog::{self, UiText};
use crate::state::{Field, SubmitStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let has_optional = app.machine.data().selected_collaboration().is_some();

    let block = Block::default()
        .title(format!(" {} ", catalog::ui_text(app.locale, UiText::FormHeading)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(5), // Collaboration heading + cards
        Constraint::Length(3), // Name + Email
        Constraint::Length(3), // Subject
    ];
    if has_optional {
        constraints.push(Constraint::Length(3)); // Budget + Timeline
    }
    constraints.push(Constraint::Min(4)); // Message
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Send button
    constraints.push(Constraint::Length(1)); // Banner

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    draw_collaboration(frame, chunks[0], app);

    let name_email = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_field(frame, name_email[0], app, Field::Name, FormFocus::Name, false);
    draw_field(frame, name_email[1], app, Field::Email, FormFocus::Email, false);

    draw_field(frame, chunks[2], app, Field::Subject, FormFocus::Subject, false);

    let mut next = 3;
    if has_optional {
        let optional_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[next]);
        draw_select(frame, optional_row[0], app, Field::Budget, FormFocus::Budget);
        draw_select(
            frame,
            optional_row[1],
            app,
            Field::Timeline,
            FormFocus::Timeline,
        );
        next += 1;
    }

    draw_field(frame, chunks[next], app, Field::Message, FormFocus::Message, true);
    draw_send_button(frame, chunks[next + 1], app);
    draw_banner(frame, chunks[next + 2], app);
}

/// The collaboration type picker: a heading and one card per type.
fn draw_collaboration(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(4)])
        .split(area);

    let focused = app.focus == FormFocus::Collaboration;
    let heading_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            catalog::ui_text(app.locale, UiText::CollaborationHeading),
            heading_style,
        )),
        rows[0],
    );

    let types = catalog::collaboration_types(app.locale);
    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, types.len() as u32);
            types.len()
        ])
        .split(rows[1]);

    let selected = app.machine.data().selected_collaboration();
    for (idx, card) in types.iter().enumerate() {
        let is_highlighted = focused && idx == app.highlighted_collaboration;
        let is_selected = selected == Some(card.id);
        render_card(frame, card_areas[idx], card, is_highlighted, is_selected);
    }
}

/// Draw a text field with its label, placeholder, cursor and inline error.
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    field: Field,
    focus: FormFocus,
    is_multiline: bool,
) {
    let config = catalog::field_config(app.locale, field);
    let value = app.machine.data().get(field);
    let error = app
        .machine
        .errors()
        .get(field)
        .map(|e| catalog::validation_message(app.locale, e));
    let is_active = app.focus == focus;

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = match error {
        Some(message) => Line::from(vec![
            Span::raw(format!(" {}: ", config.label)),
            Span::styled(message, Style::default().fg(Color::Red)),
            Span::raw(" "),
        ]),
        None => Line::from(format!(" {} ", config.label)),
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = if value.is_empty() && !is_active {
        Paragraph::new(Span::styled(
            config.placeholder,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else if is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::raw(value),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a select-style field cycled with ◂ ▸.
fn draw_select(frame: &mut Frame, area: Rect, app: &App, field: Field, focus: FormFocus) {
    let config = catalog::field_config(app.locale, field);
    let value = app.machine.data().get(field);
    let is_active = app.focus == focus;

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let optional = catalog::ui_text(app.locale, UiText::OptionalHint);
    let title = format!(" {} ({optional}) ", config.label);

    let line = if value.is_empty() {
        Line::from(Span::styled(
            config.placeholder,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
    } else if is_active {
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(Color::Cyan)),
            Span::raw(value),
            Span::styled(" ▸", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(Span::raw(value))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_send_button(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.machine.status();
    let label = match status {
        SubmitStatus::Loading => catalog::ui_text(app.locale, UiText::SendingLabel),
        _ => catalog::ui_text(app.locale, UiText::SendButton),
    };

    let width = (label.chars().count() as u16 + 6).min(area.width);
    let centered = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        centered[1],
        label,
        app.focus == FormFocus::Send,
        status != SubmitStatus::Loading,
    );
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.machine.status() {
        SubmitStatus::Success => Line::from(Span::styled(
            format!("✓ {}", app.machine.banner()),
            Style::default().fg(Color::Green),
        )),
        SubmitStatus::Error => Line::from(Span::styled(
            format!("✗ {}", app.machine.banner()),
            Style::default().fg(Color::Red),
        )),
        _ => Line::default(),
    };
    frame.render_widget(Paragraph::new(line), area);
}
