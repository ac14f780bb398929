//! UI module for rendering the TUI

mod components;
mod contact_info;
mod form;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (info_area, form_area) = layout::create_layout(area);

    contact_info::draw(frame, info_area, app);
    form::draw(frame, form_area, app);

    layout::draw_status_bar(frame, app);
}
