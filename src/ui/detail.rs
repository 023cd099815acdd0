//! Form detail view: stats, responses table, share pane

use crate::app::App;
use crate::state::{DetailTab, Form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Draw the form detail view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app
        .state
        .selected_form_id
        .as_deref()
        .and_then(|id| app.state.form_by_id(id))
    else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Stat cards
            Constraint::Length(1), // Tab line
            Constraint::Min(0),    // Tab content
        ])
        .split(area);

    draw_stats(frame, chunks[0], form);
    draw_tabs(frame, chunks[1], app);

    match app.state.detail_tab {
        DetailTab::Responses => draw_responses(frame, chunks[2], app, form),
        DetailTab::Share => draw_share(frame, chunks[2], app, form),
    }
}

fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: Span<'_>) {
    let content = Paragraph::new(Line::from(value)).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(content, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, form: &Form) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let status = if form.published {
        Span::styled("Published", Style::default().fg(Color::Green))
    } else {
        Span::styled("Draft", Style::default().fg(Color::Yellow))
    };
    stat_card(frame, cards[0], "Status", status);
    stat_card(
        frame,
        cards[1],
        "Responses",
        Span::raw(form.response_count.to_string()),
    );
    stat_card(
        frame,
        cards[2],
        "Created",
        Span::raw(form.created_at.format("%Y-%m-%d").to_string()),
    );
    stat_card(
        frame,
        cards[3],
        "Last Updated",
        Span::raw(form.updated_at.format("%Y-%m-%d").to_string()),
    );
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    for tab in [DetailTab::Responses, DetailTab::Share] {
        let active = app.state.detail_tab == tab;
        spans.push(Span::styled(
            format!(" {} ", tab.label()),
            if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_responses(frame: &mut Frame, area: Rect, app: &App, form: &Form) {
    if app.state.responses.is_empty() {
        let content = Paragraph::new(
            "No responses yet.\nShare your form to start collecting responses.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().title(" Responses ").borders(Borders::ALL));
        frame.render_widget(content, area);
        return;
    }

    let header = {
        let mut cells = vec![Cell::from("Date")];
        cells.extend(form.questions.iter().map(|q| Cell::from(q.title.clone())));
        Row::new(cells).style(Style::default().add_modifier(Modifier::BOLD))
    };

    let rows: Vec<Row> = app
        .state
        .responses
        .iter()
        .skip(app.state.scroll_offset)
        .map(|response| {
            let mut cells = vec![Cell::from(
                response.created_at.format("%Y-%m-%d").to_string(),
            )];
            for index in 0..form.questions.len() {
                let text = response
                    .answers
                    .get(index)
                    .map(|a| a.display())
                    .unwrap_or_default();
                cells.push(Cell::from(if text.is_empty() {
                    "-".to_string()
                } else {
                    text
                }));
            }
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(12)];
    widths.extend(
        form.questions
            .iter()
            .map(|_| Constraint::Min(10)),
    );

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Responses ({}) ", app.state.responses.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn draw_share(frame: &mut Frame, area: Rect, app: &App, form: &Form) {
    let url = app.config.share_url(&form.id);
    let mut lines = vec![
        Line::from("Share this link to collect responses:"),
        Line::from(""),
        Line::from(Span::styled(url, Style::default().fg(Color::Cyan))),
        Line::from(""),
        Line::from(Span::styled(
            "c: copy link to clipboard",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    if !form.published {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "This form is a draft. Publish it before sharing.",
            Style::default().fg(Color::Yellow),
        )));
    }

    let content =
        Paragraph::new(lines).block(Block::default().title(" Share ").borders(Borders::ALL));
    frame.render_widget(content, area);
}
