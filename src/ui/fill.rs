//! Fill view: answer a published form and submit

use crate::app::App;
use crate::state::{AnswerValue, FillState, QuestionType};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::widgets::{checkbox_marker, radio_marker};

/// Draw the fill view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(fill) = &app.state.fill else {
        return;
    };

    if fill.submitted {
        draw_submitted(frame, area);
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        fill.form.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !fill.form.description.is_empty() {
        lines.push(Line::from(Span::styled(
            fill.form.description.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(error) = &fill.error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));

    for index in 0..fill.form.questions.len() {
        let selected = index == fill.selected_question;
        lines.extend(question_lines(fill, index, selected));
    }

    if fill.form.questions.is_empty() {
        lines.push(Line::from(Span::styled(
            "This form has no questions.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the selected question in view
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines_before(fill, fill.selected_question)
        .saturating_sub(visible.saturating_sub(4).max(1));

    let content = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", fill.form.title))
                .borders(Borders::ALL),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(content, area);
}

/// Number of rendered lines for the questions before `index`, for scrolling
fn lines_before(fill: &FillState, index: usize) -> usize {
    let header = 2
        + usize::from(!fill.form.description.is_empty())
        + usize::from(fill.error.is_some());
    header
        + fill
            .form
            .questions
            .iter()
            .take(index)
            .map(|q| match q.question_type {
                QuestionType::MultipleChoice | QuestionType::Checkbox => 2 + q.options.len(),
                _ => 3,
            })
            .sum::<usize>()
}

/// Lines for one question and its answer affordance
fn question_lines(fill: &FillState, index: usize, selected: bool) -> Vec<Line<'static>> {
    let question = &fill.form.questions[index];
    let answer = fill.answers.get(index);

    let mut lines = Vec::new();

    let title_style = if selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut title_spans = vec![
        Span::raw(if selected { "> " } else { "  " }),
        Span::styled(question.title.clone(), title_style),
    ];
    if question.required {
        title_spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    lines.push(Line::from(title_spans));

    match question.question_type {
        QuestionType::MultipleChoice | QuestionType::Checkbox => {
            for (opt_index, option) in question.options.iter().enumerate() {
                let checked = fill.is_option_selected(index, option);
                let marker = if question.question_type == QuestionType::Checkbox {
                    checkbox_marker(checked)
                } else {
                    radio_marker(checked)
                };
                let highlighted = selected && opt_index == fill.selected_option;
                lines.push(Line::from(Span::styled(
                    format!("    {} {}", marker, option),
                    if highlighted {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default()
                    },
                )));
            }
        }
        QuestionType::Dropdown => {
            let current = match answer {
                Some(AnswerValue::Text(s)) if !s.is_empty() => s.clone(),
                _ => "Select an option".to_string(),
            };
            lines.push(Line::from(Span::styled(
                format!("    [ {} ▾ ]", current),
                if selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                },
            )));
            if selected {
                for (opt_index, option) in question.options.iter().enumerate() {
                    let highlighted = opt_index == fill.selected_option;
                    let checked = fill.is_option_selected(index, option);
                    lines.push(Line::from(Span::styled(
                        format!(
                            "      {} {}",
                            if checked { "•" } else { " " },
                            option
                        ),
                        if highlighted {
                            Style::default().fg(Color::Cyan)
                        } else {
                            Style::default()
                        },
                    )));
                }
            }
        }
        _ => {
            // Text-like input: show the current answer or the placeholder
            let text = match answer {
                Some(AnswerValue::Text(s)) => s.clone(),
                _ => String::new(),
            };
            let (shown, style) = if text.is_empty() && !selected {
                (
                    question.placeholder_text().to_string(),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                (text, Style::default())
            };
            let cursor = if selected { "▌" } else { "" };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(shown, style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines
}

/// Confirmation screen after the store accepted the submission
fn draw_submitted(frame: &mut Frame, area: Rect) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Form Submitted",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Thank you for your response!"),
        Line::from("Your response has been recorded successfully."),
        Line::from(""),
        Line::from(Span::styled(
            "r: submit another response   Esc: back",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .centered()
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(content, area);
}
