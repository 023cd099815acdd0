//! Dashboard view: the signed-in user's forms

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::widgets::draw_confirm_box;

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let forms = app.state.sorted_forms();

    if forms.is_empty() {
        let content = Paragraph::new(
            "No forms yet.\nCreate your first form to start collecting responses.\n\nPress 'n' to create a form.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .title(" Your Forms ")
                .borders(Borders::ALL),
        );
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = forms
        .iter()
        .enumerate()
        .map(|(index, form)| {
            let selected = index == app.state.selected_index;
            let marker = if selected { "> " } else { "  " };

            let status_style = if form.published {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };

            let title = if form.title.is_empty() {
                "(untitled)"
            } else {
                form.title.as_str()
            };

            let line = Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    title.to_string(),
                    if selected {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
                Span::raw("  "),
                Span::styled(form.status_label(), status_style),
                Span::styled(
                    format!(
                        "  {} response{}",
                        form.response_count,
                        if form.response_count == 1 { "" } else { "s" }
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", form.created_at.format("%Y-%m-%d")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Your Forms ({}) ", forms.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);

    // Delete confirmation overlay
    if let Some(form_id) = &app.state.confirm_delete {
        let title = app
            .state
            .form_by_id(form_id)
            .map(|f| f.title.clone())
            .unwrap_or_default();
        draw_confirm_box(
            frame,
            area,
            "Delete Form",
            &format!("Delete \"{}\" and all of its responses?", title),
        );
    }
}
