//! CSV export of form responses.
//!
//! Header row: `Submission Date` followed by one column per question title.
//! Each data row: the submission date (`YYYY-MM-DD`) followed by the answer
//! at each position; missing answers render as empty cells.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::UserDirs;

use crate::state::{AnswerValue, Form, ResponseRecord};

/// Quote a textual cell, doubling embedded quotes
fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render the responses for a form as CSV text
pub fn responses_csv(form: &Form, responses: &[ResponseRecord]) -> String {
    let mut header: Vec<String> = vec!["Submission Date".to_string()];
    header.extend(form.questions.iter().map(|q| csv_cell(&q.title)));

    let mut lines = vec![header.join(",")];
    for response in responses {
        let date = response.created_at.format("%Y-%m-%d").to_string();
        let mut row = vec![date];
        for index in 0..form.questions.len() {
            let cell = match response.answers.get(index) {
                Some(answer) if !answer.is_empty() => csv_cell(&answer.display()),
                _ => String::new(),
            };
            row.push(cell);
        }
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// File name for a form's export, with path separators stripped
fn export_file_name(form: &Form) -> String {
    let title: String = form
        .title
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}_responses.csv", title)
}

/// Write the responses CSV next to the user's other downloads.
/// Returns the written path.
pub fn export_responses(form: &Form, responses: &[ResponseRecord]) -> Result<PathBuf> {
    let dirs = UserDirs::new().ok_or_else(|| anyhow!("Could not resolve user directories"))?;
    let dir = dirs
        .download_dir()
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| dirs.home_dir().to_path_buf());

    let path = dir.join(export_file_name(form));
    fs::write(&path, responses_csv(form, responses))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Question, QuestionType};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn form_with(questions: Vec<Question>) -> Form {
        Form {
            id: "f-1".to_string(),
            title: "Event Signup".to_string(),
            description: String::new(),
            questions,
            user_id: "u-1".to_string(),
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            response_count: 0,
        }
    }

    fn response(answers: Vec<AnswerValue>) -> ResponseRecord {
        ResponseRecord {
            id: "r-1".to_string(),
            form_id: "f-1".to_string(),
            answers,
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
        }
    }

    fn titled(title: &str) -> Question {
        let mut q = Question::new(QuestionType::ShortText);
        q.title = title.to_string();
        q
    }

    #[test]
    fn test_header_row() {
        let form = form_with(vec![titled("Name"), titled("City")]);
        let csv = responses_csv(&form, &[]);
        assert_eq!(csv, "Submission Date,\"Name\",\"City\"");
    }

    #[test]
    fn test_row_has_date_then_answers() {
        let form = form_with(vec![titled("Name")]);
        let responses = vec![response(vec![AnswerValue::Text("Alice".to_string())])];
        let csv = responses_csv(&form, &responses);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2024-03-09,\"Alice\"");
    }

    #[test]
    fn test_commas_and_quotes_are_escaped() {
        let form = form_with(vec![titled("Quote")]);
        let responses = vec![response(vec![AnswerValue::Text(
            "She said \"hi\", twice".to_string(),
        )])];
        let csv = responses_csv(&form, &responses);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "2024-03-09,\"She said \"\"hi\"\", twice\"");
    }

    #[test]
    fn test_checkbox_answers_join_and_escape() {
        let mut q = Question::new(QuestionType::Checkbox);
        q.title = "Toppings".to_string();
        q.options = vec!["Cheese".to_string(), "Ham".to_string()];
        let form = form_with(vec![q]);
        let responses = vec![response(vec![AnswerValue::Selections(vec![
            "Cheese".to_string(),
            "Ham".to_string(),
        ])])];
        let csv = responses_csv(&form, &responses);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "2024-03-09,\"Cheese, Ham\"");
    }

    #[test]
    fn test_missing_answers_are_empty_cells() {
        let form = form_with(vec![titled("A"), titled("B"), titled("C")]);
        // answer vector shorter than the question list: trailing cells empty
        let responses = vec![response(vec![AnswerValue::Text("x".to_string())])];
        let csv = responses_csv(&form, &responses);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "2024-03-09,\"x\",,");
    }

    #[test]
    fn test_empty_answers_are_empty_cells() {
        let form = form_with(vec![titled("A"), titled("B")]);
        let responses = vec![response(vec![
            AnswerValue::Text(String::new()),
            AnswerValue::Text("y".to_string()),
        ])];
        let csv = responses_csv(&form, &responses);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "2024-03-09,,\"y\"");
    }

    #[test]
    fn test_one_row_per_response() {
        let form = form_with(vec![titled("A")]);
        let responses = vec![
            response(vec![AnswerValue::Text("1".to_string())]),
            response(vec![AnswerValue::Text("2".to_string())]),
        ];
        let csv = responses_csv(&form, &responses);
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn test_export_file_name_strips_separators() {
        let mut form = form_with(vec![]);
        form.title = "a/b\\c".to_string();
        assert_eq!(export_file_name(&form), "a_b_c_responses.csv");
    }
}
