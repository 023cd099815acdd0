//! Shared drawing helpers for fields and cards

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a labelled text field with an input cursor when active
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
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
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Inline editable value with a cursor, for fields rendered inside lists
pub fn inline_value<'a>(value: &'a str, is_active: bool) -> Vec<Span<'a>> {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let mut spans = vec![Span::styled(value, style)];
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    spans
}

/// Marker for an exclusive-choice option
pub fn radio_marker(selected: bool) -> &'static str {
    if selected {
        "(•)"
    } else {
        "( )"
    }
}

/// Marker for an independent toggle option
pub fn checkbox_marker(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Draw a small centered confirmation box over the given area
pub fn draw_confirm_box(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let width = (message.len() as u16 + 6).clamp(30, area.width);
    let height = 5;
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let content = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "y: confirm   n/Esc: cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );

    frame.render_widget(ratatui::widgets::Clear, popup);
    frame.render_widget(content, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers() {
        assert_eq!(radio_marker(true), "(•)");
        assert_eq!(radio_marker(false), "( )");
        assert_eq!(checkbox_marker(true), "[x]");
        assert_eq!(checkbox_marker(false), "[ ]");
    }

    #[test]
    fn test_inline_value_cursor_only_when_active() {
        assert_eq!(inline_value("abc", false).len(), 1);
        assert_eq!(inline_value("abc", true).len(), 2);
    }
}
