//! Form editor view: meta fields plus the ordered question cards

use crate::app::App;
use crate::state::{EditorFocus, EditorState, Question, QuestionField, QuestionType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::widgets::{checkbox_marker, draw_field, inline_value, radio_marker};

/// Draw the editor (create and edit modes share this view)
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(editor) = &app.state.editor else {
        return;
    };

    if editor.preview {
        draw_preview(frame, area, editor);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Form title
            Constraint::Length(3), // Description
            Constraint::Min(0),    // Questions
        ])
        .split(area);

    draw_field(
        frame,
        chunks[0],
        "Form Title",
        &editor.title,
        editor.focus == EditorFocus::FormTitle,
        false,
    );
    draw_field(
        frame,
        chunks[1],
        "Description",
        &editor.description,
        editor.focus == EditorFocus::FormDescription,
        false,
    );

    draw_questions(frame, chunks[2], editor);
}

/// Lines for one question card in edit mode
fn question_lines<'a>(editor: &'a EditorState, index: usize, question: &'a Question) -> Vec<Line<'a>> {
    let focused_field = match editor.focus {
        EditorFocus::Question { index: i, field } if i == index => Some(field),
        _ => None,
    };

    let mut lines = Vec::new();

    // Title row
    let mut title_spans = vec![Span::styled(
        format!("{}. ", index + 1),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    title_spans.extend(inline_value(
        &question.title,
        focused_field == Some(QuestionField::Title),
    ));
    if question.required {
        title_spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    lines.push(Line::from(title_spans));

    // Type and required row
    let type_active = focused_field == Some(QuestionField::Type);
    let required_active = focused_field == Some(QuestionField::Required);
    lines.push(Line::from(vec![
        Span::raw("   Type: "),
        Span::styled(
            if type_active {
                format!("< {} >", question.question_type.label())
            } else {
                question.question_type.label().to_string()
            },
            if type_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            },
        ),
        Span::raw("   Required: "),
        Span::styled(
            checkbox_marker(question.required),
            if required_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            },
        ),
    ]));

    // Placeholder row, only for the bearing types
    if question.question_type.is_placeholder_bearing() {
        let active = focused_field == Some(QuestionField::Placeholder);
        let mut spans = vec![Span::raw("   Placeholder: ")];
        spans.extend(inline_value(question.placeholder_text(), active));
        lines.push(Line::from(spans));
    }

    // Option rows, only for the bearing types
    if question.question_type.is_option_bearing() {
        for (opt_index, option) in question.options.iter().enumerate() {
            let active = focused_field == Some(QuestionField::Option(opt_index));
            let mut spans = vec![Span::raw(format!("   Option {}: ", opt_index + 1))];
            spans.extend(inline_value(option, active));
            lines.push(Line::from(spans));
        }
        if question.options.is_empty() {
            lines.push(Line::from(Span::styled(
                "   (no options — press ^O to add one)",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines
}

/// Number of rendered lines for the cards before `index`, for scrolling
fn lines_before(editor: &EditorState, index: usize) -> usize {
    editor
        .questions
        .iter()
        .take(index)
        .map(|q| {
            let mut count = 3; // title, type/required, trailing blank
            if q.question_type.is_placeholder_bearing() {
                count += 1;
            }
            if q.question_type.is_option_bearing() {
                count += q.options.len().max(1);
            }
            count
        })
        .sum()
}

fn draw_questions(frame: &mut Frame, area: Rect, editor: &EditorState) {
    let mut lines = Vec::new();
    for (index, question) in editor.questions.iter().enumerate() {
        lines.extend(question_lines(editor, index, question));
    }
    if editor.questions.is_empty() {
        lines.push(Line::from(Span::styled(
            "No questions. Press ^A to add one.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    // Keep the focused card in view
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = match editor.focused_question_index() {
        Some(index) => {
            let offset = lines_before(editor, index);
            offset.saturating_sub(visible.saturating_sub(4).max(1))
        }
        None => 0,
    };

    let block = Block::default()
        .title(format!(" Questions ({}) ", editor.questions.len()))
        .borders(Borders::ALL)
        .border_style(
            if matches!(editor.focus, EditorFocus::Question { .. }) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        );

    let content = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(content, area);
}

/// Read-only preview of the form as respondents will see it
fn draw_preview(frame: &mut Frame, area: Rect, editor: &EditorState) {
    let mut lines = vec![Line::from(Span::styled(
        if editor.title.is_empty() {
            "Untitled Form".to_string()
        } else {
            editor.title.clone()
        },
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !editor.description.is_empty() {
        lines.push(Line::from(Span::styled(
            editor.description.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    for (index, question) in editor.questions.iter().enumerate() {
        let title = if question.title.is_empty() {
            format!("Question {}", index + 1)
        } else {
            question.title.clone()
        };
        let mut spans = vec![Span::raw(title)];
        if question.required {
            spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        lines.push(Line::from(spans));

        match question.question_type {
            QuestionType::MultipleChoice => {
                for option in &question.options {
                    lines.push(Line::from(format!("  {} {}", radio_marker(false), option)));
                }
            }
            QuestionType::Checkbox => {
                for option in &question.options {
                    lines.push(Line::from(format!(
                        "  {} {}",
                        checkbox_marker(false),
                        option
                    )));
                }
            }
            QuestionType::Dropdown => {
                lines.push(Line::from(Span::styled(
                    "  [ Select an option ▾ ]",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            QuestionType::Date => {
                lines.push(Line::from(Span::styled(
                    "  [ YYYY-MM-DD ]",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            _ => {
                lines.push(Line::from(Span::styled(
                    format!("  [ {} ]", question.placeholder_text()),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    let content = Paragraph::new(lines).block(
        Block::default()
            .title(" Preview (^V to edit) ")
            .borders(Borders::ALL),
    );
    frame.render_widget(content, area);
}
