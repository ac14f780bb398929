//! Layout and status bar

use crate::app::App;
use crate::catalog;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the contact info panel
const INFO_PANEL_WIDTH: u16 = 38;

/// Create the main layout: info panel on the left, form on the right,
/// with the bottom line reserved for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(INFO_PANEL_WIDTH), // Contact info
            Constraint::Min(0),                   // Form
        ])
        .split(vertical[0]);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Active locale
    spans.push(Span::styled(
        format!(" [{}] ", app.locale.code().to_uppercase()),
        Style::default().fg(Color::Blue),
    ));

    // Keyboard hints
    spans.push(Span::styled(
        "Tab:next  Enter:select/send  ^S:send  ^L:lang  ^C:quit",
        Style::default().fg(Color::DarkGray),
    ));

    // Transient toast
    if let Some(toast) = app.toasts.current() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            catalog::toast_message(app.locale, toast.kind),
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Endpoint on the right
    let endpoint = format!(" {} ", app.endpoint);
    let endpoint_width = endpoint.chars().count() as u16;
    if endpoint_width < area.width / 2 {
        let endpoint_area = Rect {
            x: area.width.saturating_sub(endpoint_width),
            y: area.height.saturating_sub(1),
            width: endpoint_width,
            height: 1,
        };
        let widget =
            Paragraph::new(endpoint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(widget, endpoint_area);
    }
}
