//! In-memory form editor: pure operations over the ordered question list
//! plus the interactive editing state for the editor view.
//!
//! Every operation treats the question list as an immutable value and
//! produces a new list (whole-list replacement), so editor state transitions
//! stay trivially testable and a history stack can be layered on later.

use super::schema::{Form, FormPayload, Question, QuestionType};

/// A single-field edit applied to one question.
///
/// Switching the type deliberately leaves now-irrelevant `options` /
/// `placeholder` data in place; fields that are meaningless for the current
/// type are simply not rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionEdit {
    Title(String),
    Type(QuestionType),
    Required(bool),
    Placeholder(String),
}

/// Append a new question with a fresh unique id and default shape
pub fn add_question(questions: &[Question]) -> Vec<Question> {
    let mut next = questions.to_vec();
    next.push(Question::new(QuestionType::ShortText));
    next
}

/// Apply a single-field edit to the question matching `id`.
/// Unknown ids are a silent no-op.
pub fn update_question(questions: &[Question], id: &str, edit: QuestionEdit) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id != id {
                return q.clone();
            }
            let mut q = q.clone();
            match edit.clone() {
                QuestionEdit::Title(value) => q.title = value,
                QuestionEdit::Type(value) => q.question_type = value,
                QuestionEdit::Required(value) => q.required = value,
                QuestionEdit::Placeholder(value) => q.placeholder = Some(value),
            }
            q
        })
        .collect()
}

/// Remove the question matching `id`; unknown ids are a silent no-op
pub fn remove_question(questions: &[Question], id: &str) -> Vec<Question> {
    questions.iter().filter(|q| q.id != id).cloned().collect()
}

/// Append a default-labelled option ("Option N", N = current length + 1)
/// to the question matching `id`
pub fn add_option(questions: &[Question], id: &str) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id != id {
                return q.clone();
            }
            let mut q = q.clone();
            q.options.push(format!("Option {}", q.options.len() + 1));
            q
        })
        .collect()
}

/// Replace the option at `index` on the question matching `id`.
/// Unknown id or out-of-range index is a silent no-op.
pub fn update_option(questions: &[Question], id: &str, index: usize, value: &str) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id != id || index >= q.options.len() {
                return q.clone();
            }
            let mut q = q.clone();
            q.options[index] = value.to_string();
            q
        })
        .collect()
}

/// Remove the option at `index` on the question matching `id`.
/// Unknown id or out-of-range index is a silent no-op.
pub fn remove_option(questions: &[Question], id: &str, index: usize) -> Vec<Question> {
    questions
        .iter()
        .map(|q| {
            if q.id != id || index >= q.options.len() {
                return q.clone();
            }
            let mut q = q.clone();
            q.options.remove(index);
            q
        })
        .collect()
}

/// Stable move: take the element at `source` and reinsert it at
/// `destination`, preserving every other element's relative order.
/// Out-of-range or equal indices are a silent no-op.
pub fn reorder(questions: &[Question], source: usize, destination: usize) -> Vec<Question> {
    let mut next = questions.to_vec();
    if source >= next.len() || destination >= next.len() || source == destination {
        return next;
    }
    let moved = next.remove(source);
    next.insert(destination, moved);
    next
}

/// Which editor field currently has keyboard focus within a question card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    Title,
    Type,
    Required,
    Placeholder,
    Option(usize),
}

/// Editor keyboard focus: the form meta fields or one field of one question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    FormTitle,
    FormDescription,
    Question { index: usize, field: QuestionField },
}

impl Default for EditorFocus {
    fn default() -> Self {
        EditorFocus::FormTitle
    }
}

/// In-memory state for the form editor view.
///
/// Exists only for the duration of the editing session; it is materialized
/// to the form store on explicit save/publish and lost on navigation away.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Some when editing an existing form, None when creating
    pub form_id: Option<String>,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub focus: EditorFocus,
    /// Read-only rendered preview instead of the edit cards
    pub preview: bool,
}

impl EditorState {
    /// Editor for a brand-new form, seeded with one name question
    pub fn new() -> Self {
        let mut seed = Question::new(QuestionType::ShortText);
        seed.title = "What is your name?".to_string();
        seed.required = true;
        seed.placeholder = Some("Enter your name".to_string());

        Self {
            form_id: None,
            title: "Untitled Form".to_string(),
            description: String::new(),
            questions: vec![seed],
            focus: EditorFocus::FormTitle,
            preview: false,
        }
    }

    /// Editor loaded from an existing form
    pub fn from_form(form: &Form) -> Self {
        Self {
            form_id: Some(form.id.clone()),
            title: form.title.clone(),
            description: form.description.clone(),
            questions: form.questions.clone(),
            focus: EditorFocus::FormTitle,
            preview: false,
        }
    }

    /// The editable fields of one question, in traversal order.
    /// Placeholder and option fields appear only for the bearing types.
    pub fn fields_for(question: &Question) -> Vec<QuestionField> {
        let mut fields = vec![
            QuestionField::Title,
            QuestionField::Type,
            QuestionField::Required,
        ];
        if question.question_type.is_placeholder_bearing() {
            fields.push(QuestionField::Placeholder);
        }
        if question.question_type.is_option_bearing() {
            for i in 0..question.options.len() {
                fields.push(QuestionField::Option(i));
            }
        }
        fields
    }

    /// Index of the question owning the current focus, if any
    pub fn focused_question_index(&self) -> Option<usize> {
        match self.focus {
            EditorFocus::Question { index, .. } => Some(index),
            _ => None,
        }
    }

    /// The question owning the current focus, if any
    pub fn focused_question(&self) -> Option<&Question> {
        self.focused_question_index()
            .and_then(|i| self.questions.get(i))
    }

    /// Flat traversal order over every focusable field in the editor
    fn focus_ring(&self) -> Vec<EditorFocus> {
        let mut ring = vec![EditorFocus::FormTitle, EditorFocus::FormDescription];
        for (index, question) in self.questions.iter().enumerate() {
            for field in Self::fields_for(question) {
                ring.push(EditorFocus::Question { index, field });
            }
        }
        ring
    }

    /// Move focus to the next field (wraps around)
    pub fn next_field(&mut self) {
        let ring = self.focus_ring();
        let pos = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(pos + 1) % ring.len()];
    }

    /// Move focus to the previous field (wraps around)
    pub fn prev_field(&mut self) {
        let ring = self.focus_ring();
        let pos = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = ring[(pos + ring.len() - 1) % ring.len()];
    }

    /// Snap focus back to a valid field after the list or a type changed
    fn normalize_focus(&mut self) {
        if let EditorFocus::Question { index, field } = self.focus {
            if self.questions.is_empty() {
                self.focus = EditorFocus::FormTitle;
                return;
            }
            let index = index.min(self.questions.len() - 1);
            let valid = Self::fields_for(&self.questions[index]);
            let field = if valid.contains(&field) {
                field
            } else {
                QuestionField::Title
            };
            self.focus = EditorFocus::Question { index, field };
        }
    }

    /// Append a new question and focus its title
    pub fn add_question(&mut self) {
        self.questions = add_question(&self.questions);
        self.focus = EditorFocus::Question {
            index: self.questions.len() - 1,
            field: QuestionField::Title,
        };
    }

    /// Remove the focused question
    pub fn remove_focused_question(&mut self) {
        if let Some(question) = self.focused_question() {
            let id = question.id.clone();
            self.questions = remove_question(&self.questions, &id);
            self.normalize_focus();
        }
    }

    /// Apply a single-field edit to the focused question
    pub fn edit_focused(&mut self, edit: QuestionEdit) {
        if let Some(question) = self.focused_question() {
            let id = question.id.clone();
            self.questions = update_question(&self.questions, &id, edit);
            self.normalize_focus();
        }
    }

    /// Cycle the focused question's type forward or backward.
    /// Only applies while focus is on the type field.
    pub fn cycle_type(&mut self, forward: bool) {
        if !matches!(
            self.focus,
            EditorFocus::Question {
                field: QuestionField::Type,
                ..
            }
        ) {
            return;
        }
        if let Some(question) = self.focused_question() {
            let next = if forward {
                question.question_type.next()
            } else {
                question.question_type.prev()
            };
            self.edit_focused(QuestionEdit::Type(next));
        }
    }

    /// Toggle the focused question's required flag
    pub fn toggle_required(&mut self) {
        if let Some(question) = self.focused_question() {
            let flag = !question.required;
            self.edit_focused(QuestionEdit::Required(flag));
        }
    }

    /// Append a default-labelled option to the focused question and focus it
    pub fn add_option_to_focused(&mut self) {
        if let Some(index) = self.focused_question_index() {
            let question = &self.questions[index];
            if !question.question_type.is_option_bearing() {
                return;
            }
            let id = question.id.clone();
            self.questions = add_option(&self.questions, &id);
            self.focus = EditorFocus::Question {
                index,
                field: QuestionField::Option(self.questions[index].options.len() - 1),
            };
        }
    }

    /// Remove the focused option, if focus is on one
    pub fn remove_focused_option(&mut self) {
        if let EditorFocus::Question { index, field: QuestionField::Option(opt) } = self.focus {
            if let Some(question) = self.questions.get(index) {
                let id = question.id.clone();
                self.questions = remove_option(&self.questions, &id, opt);
                self.normalize_focus();
            }
        }
    }

    /// Move the focused question one position up (stable move)
    pub fn move_focused_up(&mut self) {
        if let EditorFocus::Question { index, field } = self.focus {
            if index > 0 {
                self.questions = reorder(&self.questions, index, index - 1);
                self.focus = EditorFocus::Question { index: index - 1, field };
                self.normalize_focus();
            }
        }
    }

    /// Move the focused question one position down (stable move)
    pub fn move_focused_down(&mut self) {
        if let EditorFocus::Question { index, field } = self.focus {
            if index + 1 < self.questions.len() {
                self.questions = reorder(&self.questions, index, index + 1);
                self.focus = EditorFocus::Question { index: index + 1, field };
                self.normalize_focus();
            }
        }
    }

    /// Push a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            EditorFocus::FormTitle => self.title.push(c),
            EditorFocus::FormDescription => self.description.push(c),
            EditorFocus::Question { index, field } => {
                let Some(question) = self.questions.get(index) else {
                    return;
                };
                let id = question.id.clone();
                match field {
                    QuestionField::Title => {
                        let mut value = question.title.clone();
                        value.push(c);
                        self.questions =
                            update_question(&self.questions, &id, QuestionEdit::Title(value));
                    }
                    QuestionField::Placeholder => {
                        let mut value = question.placeholder_text().to_string();
                        value.push(c);
                        self.questions =
                            update_question(&self.questions, &id, QuestionEdit::Placeholder(value));
                    }
                    QuestionField::Option(opt) => {
                        let Some(current) = question.options.get(opt) else {
                            return;
                        };
                        let mut value = current.clone();
                        value.push(c);
                        self.questions = update_option(&self.questions, &id, opt, &value);
                    }
                    // Type cycles with arrows, Required toggles with space
                    QuestionField::Type | QuestionField::Required => {}
                }
            }
        }
    }

    /// Remove the last character from the focused text field
    pub fn backspace(&mut self) {
        match self.focus {
            EditorFocus::FormTitle => {
                self.title.pop();
            }
            EditorFocus::FormDescription => {
                self.description.pop();
            }
            EditorFocus::Question { index, field } => {
                let Some(question) = self.questions.get(index) else {
                    return;
                };
                let id = question.id.clone();
                match field {
                    QuestionField::Title => {
                        let mut value = question.title.clone();
                        value.pop();
                        self.questions =
                            update_question(&self.questions, &id, QuestionEdit::Title(value));
                    }
                    QuestionField::Placeholder => {
                        let mut value = question.placeholder_text().to_string();
                        value.pop();
                        self.questions =
                            update_question(&self.questions, &id, QuestionEdit::Placeholder(value));
                    }
                    QuestionField::Option(opt) => {
                        let Some(current) = question.options.get(opt) else {
                            return;
                        };
                        let mut value = current.clone();
                        value.pop();
                        self.questions = update_option(&self.questions, &id, opt, &value);
                    }
                    QuestionField::Type | QuestionField::Required => {}
                }
            }
        }
    }

    /// Package the editor state for handoff to the form store.
    ///
    /// There is no validation gate: a form with zero questions or an empty
    /// title may be saved or published.
    pub fn to_payload(&self, user_id: &str, publish: bool) -> FormPayload {
        FormPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            questions: self.questions.clone(),
            user_id: user_id.to_string(),
            published: publish,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
