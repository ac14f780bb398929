//! Contact information and social link panel (static content)

use crate::app::App;
use crate::catalog::{self, UiText};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Contact details
            Constraint::Min(0),    // Social links
        ])
        .split(area);

    draw_details(frame, chunks[0], app);
    draw_social(frame, chunks[1], app);
}

fn draw_details(frame: &mut Frame, area: Rect, app: &App) {
    let info = catalog::contact_info(app.locale);

    let lines = vec![
        Line::from(vec![
            Span::styled("✉ ", Style::default().fg(Color::Cyan)),
            Span::raw(info.email),
        ]),
        Line::from(vec![
            Span::styled("⌂ ", Style::default().fg(Color::Cyan)),
            Span::raw(info.location),
        ]),
        Line::from(Span::styled(
            info.affiliation,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            info.office,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(format!(" {} ", catalog::ui_text(app.locale, UiText::InfoHeading)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_social(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for link in catalog::social_links(app.locale) {
        lines.push(Line::from(Span::styled(
            link.name,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", link.url),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .title(format!(" {} ", catalog::ui_text(app.locale, UiText::SocialHeading)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
