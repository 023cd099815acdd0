//! UI module for rendering the TUI

mod dashboard;
mod detail;
mod editor;
mod fill;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let main_area = layout::create_layout(area);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Dashboard => dashboard::draw(frame, main_area, app),
        View::FormCreate | View::FormEdit => editor::draw(frame, main_area, app),
        View::FormDetail => detail::draw(frame, main_area, app),
        View::FormFill => fill::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
