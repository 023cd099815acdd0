//! Fill session: positional answer collection and required-field validation
//! for a fetched form.
//!
//! The answer vector always has exactly one position per question; a missing
//! answer is an empty value at its position, never an omission. Validation
//! runs only at submit time and never clears entered answers.

use thiserror::Error;

use super::schema::{AnswerValue, Form, QuestionType, SubmissionPayload};

/// Recoverable submit-time validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequired,
}

/// Check the answer vector against the form's required flags.
///
/// Fails iff at least one required question has an empty-equivalent answer
/// (empty string, or empty selection set for checkbox) at its position. An
/// answer vector shorter than the question list counts the missing tail as
/// empty.
pub fn validate(form: &Form, answers: &[AnswerValue]) -> Result<(), ValidationError> {
    let missing = form.questions.iter().enumerate().any(|(index, question)| {
        question.required && answers.get(index).map(|a| a.is_empty()).unwrap_or(true)
    });
    if missing {
        Err(ValidationError::MissingRequired)
    } else {
        Ok(())
    }
}

/// In-memory state for one respondent session against a published form
#[derive(Debug, Clone)]
pub struct FillState {
    pub form: Form,
    pub answers: Vec<AnswerValue>,
    /// Question the keyboard is on
    pub selected_question: usize,
    /// Highlighted option within an option-bearing question
    pub selected_option: usize,
    /// Inline validation message from the last submit attempt
    pub error: Option<ValidationError>,
    /// True once the store accepted the submission
    pub submitted: bool,
}

impl FillState {
    /// Start a session with one empty answer per question
    pub fn new(form: Form) -> Self {
        let answers = form
            .questions
            .iter()
            .map(|q| AnswerValue::empty_for(q.question_type))
            .collect();
        Self {
            form,
            answers,
            selected_question: 0,
            selected_option: 0,
            error: None,
            submitted: false,
        }
    }

    /// Reset for another submission against the same form
    pub fn reset(&mut self) {
        let form = self.form.clone();
        *self = Self::new(form);
    }

    /// Replace the answer at `index`; out-of-range is a silent no-op
    pub fn set_answer(&mut self, index: usize, value: AnswerValue) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = value;
        }
    }

    /// Move to the next question (clamped)
    pub fn next_question(&mut self) {
        if self.selected_question + 1 < self.form.questions.len() {
            self.selected_question += 1;
            self.selected_option = 0;
        }
    }

    /// Move to the previous question (clamped)
    pub fn prev_question(&mut self) {
        if self.selected_question > 0 {
            self.selected_question -= 1;
            self.selected_option = 0;
        }
    }

    /// Move the option highlight down within the selected question
    pub fn next_option(&mut self) {
        let count = self.selected_option_count();
        if count > 0 && self.selected_option + 1 < count {
            self.selected_option += 1;
        }
    }

    /// Move the option highlight up within the selected question
    pub fn prev_option(&mut self) {
        if self.selected_option > 0 {
            self.selected_option -= 1;
        }
    }

    fn selected_option_count(&self) -> usize {
        self.form
            .questions
            .get(self.selected_question)
            .map(|q| q.options.len())
            .unwrap_or(0)
    }

    /// Act on the highlighted option of the selected question.
    ///
    /// Checkbox: read the current selection set, add or remove the toggled
    /// option, write the set back (membership only; toggle order does not
    /// matter). Multiple choice and dropdown: exclusive select, replacing
    /// any prior selection at this position.
    pub fn toggle_selected_option(&mut self) {
        let index = self.selected_question;
        let Some(question) = self.form.questions.get(index) else {
            return;
        };
        let Some(option) = question.options.get(self.selected_option).cloned() else {
            return;
        };

        match question.question_type {
            QuestionType::Checkbox => {
                let mut set = match self.answers.get(index) {
                    Some(AnswerValue::Selections(s)) => s.clone(),
                    _ => Vec::new(),
                };
                if let Some(pos) = set.iter().position(|s| *s == option) {
                    set.remove(pos);
                } else {
                    set.push(option);
                }
                self.set_answer(index, AnswerValue::Selections(set));
            }
            QuestionType::MultipleChoice | QuestionType::Dropdown => {
                self.set_answer(index, AnswerValue::Text(option));
            }
            _ => {}
        }
    }

    /// True when the given option is part of the answer at `index`
    pub fn is_option_selected(&self, index: usize, option: &str) -> bool {
        match self.answers.get(index) {
            Some(AnswerValue::Text(s)) => s == option,
            Some(AnswerValue::Selections(s)) => s.iter().any(|v| v == option),
            None => false,
        }
    }

    /// Push a character into the selected question's text answer.
    /// Number and date inputs accept only the characters their semantic
    /// type allows.
    pub fn input_char(&mut self, c: char) {
        let index = self.selected_question;
        let Some(question) = self.form.questions.get(index) else {
            return;
        };
        let accept = match question.question_type {
            QuestionType::ShortText
            | QuestionType::LongText
            | QuestionType::Email => true,
            QuestionType::Number => c.is_ascii_digit() || c == '.' || c == '-',
            QuestionType::Date => c.is_ascii_digit() || c == '-',
            QuestionType::MultipleChoice
            | QuestionType::Checkbox
            | QuestionType::Dropdown => false,
        };
        if !accept {
            return;
        }
        if let Some(AnswerValue::Text(s)) = self.answers.get_mut(index) {
            s.push(c);
        }
    }

    /// Remove the last character from the selected question's text answer
    pub fn backspace(&mut self) {
        let index = self.selected_question;
        if let Some(AnswerValue::Text(s)) = self.answers.get_mut(index) {
            s.pop();
        }
    }

    /// Validate required answers, recording the inline error on failure.
    /// Entered answers are preserved either way.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let result = validate(&self.form, &self.answers);
        self.error = result.err();
        result
    }

    /// Package the answer vector for handoff to the form store.
    /// Only called after `validate` succeeds.
    pub fn submission_payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            form_id: self.form.id.clone(),
            answers: self.answers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::schema::Question;
    use chrono::Utc;

    fn form_with(questions: Vec<Question>) -> Form {
        Form {
            id: "f-1".to_string(),
            title: "Survey".to_string(),
            description: String::new(),
            questions,
            user_id: "u-1".to_string(),
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            response_count: 0,
        }
    }

    fn checkbox_question(options: &[&str]) -> Question {
        let mut q = Question::new(QuestionType::Checkbox);
        q.options = options.iter().map(|s| s.to_string()).collect();
        q
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fails_when_required_text_is_empty() {
            let mut required = Question::new(QuestionType::ShortText);
            required.required = true;
            let optional = Question::new(QuestionType::Number);
            let form = form_with(vec![required, optional]);

            let answers = vec![
                AnswerValue::Text(String::new()),
                AnswerValue::Text("5".to_string()),
            ];
            assert_eq!(
                validate(&form, &answers),
                Err(ValidationError::MissingRequired)
            );
        }

        #[test]
        fn test_succeeds_when_only_optional_is_empty() {
            let mut required = Question::new(QuestionType::ShortText);
            required.required = true;
            let optional = Question::new(QuestionType::Number);
            let form = form_with(vec![required, optional]);

            let answers = vec![
                AnswerValue::Text("Alice".to_string()),
                AnswerValue::Text(String::new()),
            ];
            assert_eq!(validate(&form, &answers), Ok(()));
        }

        #[test]
        fn test_required_checkbox_needs_nonempty_set() {
            let mut q = checkbox_question(&["A"]);
            q.required = true;
            let form = form_with(vec![q]);

            assert_eq!(
                validate(&form, &[AnswerValue::Selections(vec![])]),
                Err(ValidationError::MissingRequired)
            );
            assert_eq!(
                validate(&form, &[AnswerValue::Selections(vec!["A".to_string()])]),
                Ok(())
            );
        }

        #[test]
        fn test_short_answer_vector_counts_as_missing() {
            let mut q = Question::new(QuestionType::ShortText);
            q.required = true;
            let form = form_with(vec![q]);
            assert_eq!(validate(&form, &[]), Err(ValidationError::MissingRequired));
        }

        #[test]
        fn test_form_without_required_always_validates() {
            let form = form_with(vec![
                Question::new(QuestionType::ShortText),
                checkbox_question(&["A"]),
            ]);
            let answers = vec![
                AnswerValue::Text(String::new()),
                AnswerValue::Selections(vec![]),
            ];
            assert_eq!(validate(&form, &answers), Ok(()));
        }
    }

    mod fill_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_initializes_one_empty_answer_per_question() {
            let form = form_with(vec![
                Question::new(QuestionType::ShortText),
                checkbox_question(&["A", "B"]),
                Question::new(QuestionType::Date),
            ]);
            let fill = FillState::new(form);
            assert_eq!(
                fill.answers,
                vec![
                    AnswerValue::Text(String::new()),
                    AnswerValue::Selections(vec![]),
                    AnswerValue::Text(String::new()),
                ]
            );
        }

        #[test]
        fn test_set_answer_out_of_range_is_noop() {
            let form = form_with(vec![Question::new(QuestionType::ShortText)]);
            let mut fill = FillState::new(form);
            fill.set_answer(5, AnswerValue::Text("x".to_string()));
            assert_eq!(fill.answers, vec![AnswerValue::Text(String::new())]);
        }

        #[test]
        fn test_checkbox_toggle_membership() {
            let form = form_with(vec![checkbox_question(&["A", "B"])]);
            let mut fill = FillState::new(form);

            // toggle A on
            fill.selected_option = 0;
            fill.toggle_selected_option();
            assert_eq!(
                fill.answers,
                vec![AnswerValue::Selections(vec!["A".to_string()])]
            );

            // toggle B on
            fill.selected_option = 1;
            fill.toggle_selected_option();
            assert_eq!(
                fill.answers,
                vec![AnswerValue::Selections(vec![
                    "A".to_string(),
                    "B".to_string()
                ])]
            );

            // toggle A off
            fill.selected_option = 0;
            fill.toggle_selected_option();
            assert_eq!(
                fill.answers,
                vec![AnswerValue::Selections(vec!["B".to_string()])]
            );
        }

        #[test]
        fn test_radio_select_is_exclusive() {
            let mut q = Question::new(QuestionType::MultipleChoice);
            q.options = vec!["Yes".to_string(), "No".to_string()];
            let form = form_with(vec![q]);
            let mut fill = FillState::new(form);

            fill.selected_option = 0;
            fill.toggle_selected_option();
            assert_eq!(fill.answers[0], AnswerValue::Text("Yes".to_string()));

            // selecting the other option clears the first
            fill.selected_option = 1;
            fill.toggle_selected_option();
            assert_eq!(fill.answers[0], AnswerValue::Text("No".to_string()));
        }

        #[test]
        fn test_number_input_accepts_digits_only() {
            let form = form_with(vec![Question::new(QuestionType::Number)]);
            let mut fill = FillState::new(form);
            for c in ['4', 'x', '2', '.', '5'] {
                fill.input_char(c);
            }
            assert_eq!(fill.answers[0], AnswerValue::Text("42.5".to_string()));
        }

        #[test]
        fn test_text_input_and_backspace() {
            let form = form_with(vec![Question::new(QuestionType::ShortText)]);
            let mut fill = FillState::new(form);
            fill.input_char('h');
            fill.input_char('i');
            fill.backspace();
            assert_eq!(fill.answers[0], AnswerValue::Text("h".to_string()));
        }

        #[test]
        fn test_validate_records_error_and_keeps_answers() {
            let mut required = Question::new(QuestionType::ShortText);
            required.required = true;
            let optional = Question::new(QuestionType::ShortText);
            let form = form_with(vec![required, optional]);
            let mut fill = FillState::new(form);

            fill.selected_question = 1;
            fill.input_char('x');
            assert!(fill.validate().is_err());
            assert_eq!(fill.error, Some(ValidationError::MissingRequired));
            // entered answers survive the failed submit
            assert_eq!(fill.answers[1], AnswerValue::Text("x".to_string()));

            fill.selected_question = 0;
            fill.input_char('y');
            assert!(fill.validate().is_ok());
            assert_eq!(fill.error, None);
        }

        #[test]
        fn test_submission_payload_is_positionally_aligned() {
            let form = form_with(vec![
                Question::new(QuestionType::ShortText),
                checkbox_question(&["A"]),
            ]);
            let mut fill = FillState::new(form);
            fill.input_char('z');
            fill.next_question();
            fill.toggle_selected_option();

            let payload = fill.submission_payload();
            assert_eq!(payload.form_id, "f-1");
            assert_eq!(
                payload.answers,
                vec![
                    AnswerValue::Text("z".to_string()),
                    AnswerValue::Selections(vec!["A".to_string()]),
                ]
            );
        }

        #[test]
        fn test_reset_clears_answers_and_flags() {
            let form = form_with(vec![Question::new(QuestionType::ShortText)]);
            let mut fill = FillState::new(form);
            fill.input_char('a');
            fill.submitted = true;
            fill.reset();
            assert_eq!(fill.answers, vec![AnswerValue::Text(String::new())]);
            assert!(!fill.submitted);
            assert_eq!(fill.selected_question, 0);
        }

        #[test]
        fn test_question_navigation_clamps() {
            let form = form_with(vec![
                Question::new(QuestionType::ShortText),
                Question::new(QuestionType::Date),
            ]);
            let mut fill = FillState::new(form);
            fill.prev_question();
            assert_eq!(fill.selected_question, 0);
            fill.next_question();
            fill.next_question();
            assert_eq!(fill.selected_question, 1);
        }

        #[test]
        fn test_end_to_end_fill_round_trip() {
            // serialize a form payload, parse it back, fill it, submit
            let mut name = Question::new(QuestionType::ShortText);
            name.required = true;
            let toppings = checkbox_question(&["Cheese", "Ham"]);
            let payload = crate::state::schema::FormPayload {
                title: "Pizza".to_string(),
                description: String::new(),
                questions: vec![name, toppings],
                user_id: "u-1".to_string(),
                published: true,
            };
            let json = serde_json::to_string(&payload).unwrap();
            let parsed: crate::state::schema::FormPayload = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.questions, payload.questions);

            let form = form_with(parsed.questions);
            let mut fill = FillState::new(form);
            assert!(fill.validate().is_err());

            fill.input_char('B');
            fill.input_char('o');
            fill.next_question();
            fill.selected_option = 1;
            fill.toggle_selected_option();

            assert!(fill.validate().is_ok());
            let submission = fill.submission_payload();
            assert_eq!(
                submission.answers,
                vec![
                    AnswerValue::Text("Bo".to_string()),
                    AnswerValue::Selections(vec!["Ham".to_string()]),
                ]
            );
        }
    }
}
