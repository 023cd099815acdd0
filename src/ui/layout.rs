//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
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

    // Connection status
    let conn_status = if app.state.store_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    // View-specific hints
    let hints = get_view_hints(&app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    // Storage errors; stay until dismissed so the user can retry
    if let Some(msg) = &app.state.error_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    // Copy/export feedback
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Dashboard => {
            "j/k:nav  Enter:open  n:new  e:edit  f:fill  d:delete  r:refresh  q:quit".to_string()
        }
        View::FormCreate | View::FormEdit => {
            "Tab:next  ^A:add q  ^D:del q  ^O:add opt  ^X:del opt  S-↑/↓:move  ^V:preview  ^W:save  ^Y:publish  Esc:cancel"
                .to_string()
        }
        View::FormDetail => {
            "Tab:tab  j/k:scroll  e:edit  f:fill  x:export csv  c:copy link  Esc:back".to_string()
        }
        View::FormFill => {
            "↑/↓:question  ←/→:option  Space:select  ^W:submit  Esc:back".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let area = Rect::new(0, 0, 80, 24);
        let content = create_layout(area);
        assert_eq!(content.height, 23);
        assert_eq!(content.width, 80);
    }

    #[test]
    fn test_every_view_has_hints() {
        for view in [
            View::Dashboard,
            View::FormCreate,
            View::FormEdit,
            View::FormDetail,
            View::FormFill,
        ] {
            assert!(!get_view_hints(&view).is_empty());
        }
    }
}
