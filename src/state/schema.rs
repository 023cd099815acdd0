//! Form schema definitions: question types, questions, forms, and the
//! payload shapes exchanged with the form store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed enumeration of question types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    ShortText,
    LongText,
    MultipleChoice,
    Checkbox,
    Dropdown,
    Date,
    Number,
    Email,
}

impl QuestionType {
    /// All question types in display order
    pub const ALL: [QuestionType; 8] = [
        QuestionType::ShortText,
        QuestionType::LongText,
        QuestionType::MultipleChoice,
        QuestionType::Checkbox,
        QuestionType::Dropdown,
        QuestionType::Date,
        QuestionType::Number,
        QuestionType::Email,
    ];

    /// Wire identifier for this type (matches the stored `type` field)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortText => "short_text",
            Self::LongText => "long_text",
            Self::MultipleChoice => "multiple_choice",
            Self::Checkbox => "checkbox",
            Self::Dropdown => "dropdown",
            Self::Date => "date",
            Self::Number => "number",
            Self::Email => "email",
        }
    }

    /// Parse a wire identifier; None for unknown strings
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortText => "Short Text",
            Self::LongText => "Long Text",
            Self::MultipleChoice => "Multiple Choice",
            Self::Checkbox => "Checkbox",
            Self::Dropdown => "Dropdown",
            Self::Date => "Date",
            Self::Number => "Number",
            Self::Email => "Email",
        }
    }

    /// True for types whose semantics include a selectable list of choices
    pub fn is_option_bearing(&self) -> bool {
        matches!(
            self,
            Self::MultipleChoice | Self::Checkbox | Self::Dropdown
        )
    }

    /// True for types whose input affordance supports a hint string
    pub fn is_placeholder_bearing(&self) -> bool {
        matches!(
            self,
            Self::ShortText | Self::LongText | Self::Number | Self::Email
        )
    }

    /// Next type in display order (wraps around)
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous type in display order (wraps around)
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One question definition within a form schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub title: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl Question {
    /// Create a question of the given type with a fresh unique id and
    /// type-appropriate defaults: option-bearing types get one seed option,
    /// placeholder-bearing types get a hint string.
    pub fn new(question_type: QuestionType) -> Self {
        let mut question = Self {
            id: format!("q-{}", Uuid::new_v4()),
            question_type,
            title: "New Question".to_string(),
            required: false,
            options: Vec::new(),
            placeholder: None,
        };
        if question_type.is_option_bearing() {
            question.options.push("Option 1".to_string());
        }
        if question_type.is_placeholder_bearing() {
            question.placeholder = Some("Enter your answer".to_string());
        }
        question
    }

    /// Placeholder text, empty if absent
    pub fn placeholder_text(&self) -> &str {
        self.placeholder.as_deref().unwrap_or("")
    }
}

/// A stored form: ordered questions plus metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub user_id: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub response_count: u32,
}

impl Form {
    pub fn status_label(&self) -> &'static str {
        if self.published {
            "Published"
        } else {
            "Draft"
        }
    }
}

/// One answer position in a submission: free text, or a selection set for
/// checkbox questions. Serializes to `string | string[]` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Selections(Vec<String>),
}

impl Default for AnswerValue {
    fn default() -> Self {
        AnswerValue::Text(String::new())
    }
}

impl AnswerValue {
    /// The empty value for a question of the given type
    pub fn empty_for(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Checkbox => AnswerValue::Selections(Vec::new()),
            _ => AnswerValue::Text(String::new()),
        }
    }

    /// True for an empty string or an empty selection set
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.is_empty(),
            AnswerValue::Selections(s) => s.is_empty(),
        }
    }

    /// Human-readable rendering for tables and exports
    pub fn display(&self) -> String {
        match self {
            AnswerValue::Text(s) => s.clone(),
            AnswerValue::Selections(s) => s.join(", "),
        }
    }
}

/// One respondent's stored answer vector against a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: String,
    pub form_id: String,
    pub answers: Vec<AnswerValue>,
    pub created_at: DateTime<Utc>,
}

/// Editor output handed to the form store on save/publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormPayload {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
    pub user_id: String,
    pub published: bool,
}

/// Fill-session output handed to the form store on submit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub form_id: String,
    pub answers: Vec<AnswerValue>,
}
