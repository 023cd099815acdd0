//! gRPC client for communicating with the form store
//!
//! This module provides a client for the hosted Formhive form store,
//! converting between the generated proto types and the application's
//! schema types. Authentication is a bearer token attached as request
//! metadata; ownership checks happen server-side.

use crate::config::FormhiveConfig;
use crate::state::{AnswerValue, Form, FormPayload, Question, QuestionType, ResponseRecord, SubmissionPayload};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tonic::metadata::MetadataValue;

use super::traits::FormStoreTrait;

// Include the generated proto types.
//
// Normally this would be `tonic::include_proto!("formhive")`, pulling in the
// output that `build.rs` generates via `tonic-build`. That path requires
// `protoc` at build time; to keep the crate buildable in environments without
// it, the generated module is checked in verbatim and included here instead.
pub mod proto {
    include!("proto_generated.rs");
}

use proto::form_store_client::FormStoreClient as GrpcFormStore;

/// Default form store address
const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50061";

/// Convert a stored question record into the schema type.
/// Unknown type strings fall back to short_text rather than failing the
/// whole fetch.
fn question_from_proto(q: proto::QuestionRecord) -> Question {
    let question_type = QuestionType::parse(&q.r#type).unwrap_or_else(|| {
        tracing::warn!("unknown question type '{}', rendering as short_text", q.r#type);
        QuestionType::ShortText
    });
    Question {
        id: q.id,
        question_type,
        title: q.title,
        required: q.required,
        options: q.options,
        placeholder: if q.placeholder.is_empty() {
            None
        } else {
            Some(q.placeholder)
        },
    }
}

fn question_to_proto(q: &Question) -> proto::QuestionRecord {
    proto::QuestionRecord {
        id: q.id.clone(),
        r#type: q.question_type.as_str().to_string(),
        title: q.title.clone(),
        required: q.required,
        options: q.options.clone(),
        placeholder: q.placeholder.clone().unwrap_or_default(),
    }
}

fn answer_from_proto(a: proto::AnswerRecord) -> AnswerValue {
    match a.value {
        Some(proto::answer_record::Value::Text(s)) => AnswerValue::Text(s),
        Some(proto::answer_record::Value::Selections(list)) => {
            AnswerValue::Selections(list.values)
        }
        None => AnswerValue::Text(String::new()),
    }
}

fn answer_to_proto(a: &AnswerValue) -> proto::AnswerRecord {
    let value = match a {
        AnswerValue::Text(s) => proto::answer_record::Value::Text(s.clone()),
        AnswerValue::Selections(s) => {
            proto::answer_record::Value::Selections(proto::SelectionList { values: s.clone() })
        }
    };
    proto::AnswerRecord { value: Some(value) }
}

/// Parse an RFC 3339 timestamp from storage; epoch on malformed input
fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

fn form_from_proto(f: proto::FormRecord) -> Form {
    Form {
        id: f.id,
        title: f.title,
        description: f.description,
        questions: f.questions.into_iter().map(question_from_proto).collect(),
        user_id: f.user_id,
        published: f.published,
        created_at: parse_timestamp(&f.created_at),
        updated_at: parse_timestamp(&f.updated_at),
        response_count: f.response_count,
    }
}

fn response_from_proto(r: proto::ResponseRecord) -> ResponseRecord {
    ResponseRecord {
        id: r.id,
        form_id: r.form_id,
        answers: r.answers.into_iter().map(answer_from_proto).collect(),
        created_at: parse_timestamp(&r.created_at),
    }
}

/// Client for communicating with the form store
pub struct FormStoreClient {
    /// The gRPC client
    client: Option<GrpcFormStore<tonic::transport::Channel>>,
    /// The form store address
    address: String,
    /// Bearer token for the hosted auth session
    access_token: Option<String>,
}

impl FormStoreClient {
    /// Create a new form store client
    pub async fn new(config: &FormhiveConfig) -> Result<Self> {
        let address = std::env::var("FORMHIVE_STORE_ADDRESS")
            .ok()
            .or_else(|| config.store_address.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        // Try to connect to the store
        let client = match GrpcFormStore::connect(address.clone()).await {
            Ok(client) => Some(client),
            Err(_) => None,
        };

        Ok(Self {
            client,
            address,
            access_token: config.access_token.clone(),
        })
    }

    /// Ensure connection is established
    async fn ensure_connected(
        &mut self,
    ) -> Result<&mut GrpcFormStore<tonic::transport::Channel>> {
        if self.client.is_none() {
            self.client = Some(
                GrpcFormStore::connect(self.address.clone())
                    .await
                    .map_err(|e| anyhow!("Failed to connect to form store: {}", e))?,
            );
        }
        self.client
            .as_mut()
            .ok_or_else(|| anyhow!("Client not connected"))
    }

    /// Wrap a message in a request carrying the session token
    fn authed_request<T>(token: &Option<String>, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        if let Some(token) = token {
            if let Ok(value) = format!("Bearer {}", token).parse::<MetadataValue<_>>() {
                request.metadata_mut().insert("authorization", value);
            }
        }
        request
    }
}

#[async_trait]
impl FormStoreTrait for FormStoreClient {
    async fn check_connection(&self) -> bool {
        self.client.is_some()
    }

    async fn list_forms(&mut self, user_id: &str) -> Result<Vec<Form>> {
        let token = self.access_token.clone();
        let client = self.ensure_connected().await?;

        let request = Self::authed_request(
            &token,
            proto::ListFormsRequest {
                user_id: user_id.to_string(),
            },
        );

        let response = client
            .list_forms(request)
            .await
            .map_err(|e| anyhow!("Failed to list forms: {}", e))?;

        Ok(response
            .into_inner()
            .forms
            .into_iter()
            .map(form_from_proto)
            .collect())
    }

    async fn get_form(&mut self, form_id: &str) -> Result<Form> {
        let token = self.access_token.clone();
        let client = self.ensure_connected().await?;

        let request = Self::authed_request(
            &token,
            proto::GetFormRequest {
                form_id: form_id.to_string(),
            },
        );

        let response = client
            .get_form(request)
            .await
            .map_err(|e| anyhow!("Failed to fetch form: {}", e))?;

        response
            .into_inner()
            .form
            .map(form_from_proto)
            .ok_or_else(|| anyhow!("Form not found"))
    }

    async fn create_form(&mut self, payload: &FormPayload) -> Result<String> {
        let token = self.access_token.clone();
        let message = proto::CreateFormRequest {
            title: payload.title.clone(),
            description: payload.description.clone(),
            questions: payload.questions.iter().map(question_to_proto).collect(),
            user_id: payload.user_id.clone(),
            published: payload.published,
        };
        let client = self.ensure_connected().await?;

        let response = client
            .create_form(Self::authed_request(&token, message))
            .await
            .map_err(|e| anyhow!("Failed to save form: {}", e))?;

        Ok(response.into_inner().form_id)
    }

    async fn update_form(&mut self, form_id: &str, payload: &FormPayload) -> Result<()> {
        let token = self.access_token.clone();
        let message = proto::UpdateFormRequest {
            form_id: form_id.to_string(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            questions: payload.questions.iter().map(question_to_proto).collect(),
            published: payload.published,
        };
        let client = self.ensure_connected().await?;

        client
            .update_form(Self::authed_request(&token, message))
            .await
            .map_err(|e| anyhow!("Failed to update form: {}", e))?;

        Ok(())
    }

    async fn delete_form(&mut self, form_id: &str) -> Result<()> {
        let token = self.access_token.clone();
        let client = self.ensure_connected().await?;

        client
            .delete_form(Self::authed_request(
                &token,
                proto::DeleteFormRequest {
                    form_id: form_id.to_string(),
                },
            ))
            .await
            .map_err(|e| anyhow!("Failed to delete form: {}", e))?;

        Ok(())
    }

    async fn submit_response(&mut self, submission: &SubmissionPayload) -> Result<String> {
        let token = self.access_token.clone();
        let message = proto::SubmitResponseRequest {
            form_id: submission.form_id.clone(),
            answers: submission.answers.iter().map(answer_to_proto).collect(),
        };
        let client = self.ensure_connected().await?;

        let response = client
            .submit_response(Self::authed_request(&token, message))
            .await
            .map_err(|e| anyhow!("Failed to submit response: {}", e))?;

        Ok(response.into_inner().response_id)
    }

    async fn list_responses(&mut self, form_id: &str) -> Result<Vec<ResponseRecord>> {
        let token = self.access_token.clone();
        let client = self.ensure_connected().await?;

        let request = Self::authed_request(
            &token,
            proto::ListResponsesRequest {
                form_id: form_id.to_string(),
            },
        );

        let response = client
            .list_responses(request)
            .await
            .map_err(|e| anyhow!("Failed to list responses: {}", e))?;

        Ok(response
            .into_inner()
            .responses
            .into_iter()
            .map(response_from_proto)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod conversions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_question_round_trip() {
            let mut q = Question::new(QuestionType::Dropdown);
            q.title = "Pick one".to_string();
            q.required = true;
            q.options = vec!["A".to_string(), "B".to_string()];

            let back = question_from_proto(question_to_proto(&q));
            assert_eq!(back, q);
        }

        #[test]
        fn test_question_round_trip_with_placeholder() {
            let q = Question::new(QuestionType::Email);
            let back = question_from_proto(question_to_proto(&q));
            assert_eq!(back, q);
        }

        #[test]
        fn test_unknown_type_falls_back_to_short_text() {
            let record = proto::QuestionRecord {
                id: "q1".to_string(),
                r#type: "likert".to_string(),
                title: "Rate".to_string(),
                required: false,
                options: vec![],
                placeholder: String::new(),
            };
            let q = question_from_proto(record);
            assert_eq!(q.question_type, QuestionType::ShortText);
        }

        #[test]
        fn test_empty_placeholder_becomes_none() {
            let record = proto::QuestionRecord {
                id: "q1".to_string(),
                r#type: "date".to_string(),
                title: "When".to_string(),
                required: false,
                options: vec![],
                placeholder: String::new(),
            };
            assert!(question_from_proto(record).placeholder.is_none());
        }

        #[test]
        fn test_answer_round_trip() {
            let text = AnswerValue::Text("hello".to_string());
            assert_eq!(answer_from_proto(answer_to_proto(&text)), text);

            let set = AnswerValue::Selections(vec!["A".to_string(), "B".to_string()]);
            assert_eq!(answer_from_proto(answer_to_proto(&set)), set);
        }

        #[test]
        fn test_missing_answer_value_reads_as_empty_text() {
            let record = proto::AnswerRecord { value: None };
            assert_eq!(answer_from_proto(record), AnswerValue::Text(String::new()));
        }

        #[test]
        fn test_parse_timestamp_rfc3339() {
            let ts = parse_timestamp("2024-03-09T12:30:00Z");
            assert_eq!(ts.format("%Y-%m-%d %H:%M").to_string(), "2024-03-09 12:30");
        }

        #[test]
        fn test_parse_timestamp_malformed_defaults_to_epoch() {
            let ts = parse_timestamp("yesterday");
            assert_eq!(ts.timestamp(), 0);
        }

        #[test]
        fn test_form_from_proto_preserves_question_order() {
            let record = proto::FormRecord {
                id: "f-1".to_string(),
                title: "T".to_string(),
                description: String::new(),
                questions: vec![
                    proto::QuestionRecord {
                        id: "q1".to_string(),
                        r#type: "short_text".to_string(),
                        title: "First".to_string(),
                        required: false,
                        options: vec![],
                        placeholder: String::new(),
                    },
                    proto::QuestionRecord {
                        id: "q2".to_string(),
                        r#type: "checkbox".to_string(),
                        title: "Second".to_string(),
                        required: true,
                        options: vec!["A".to_string()],
                        placeholder: String::new(),
                    },
                ],
                user_id: "u-1".to_string(),
                published: true,
                created_at: "2024-03-09T12:00:00Z".to_string(),
                updated_at: "2024-03-10T12:00:00Z".to_string(),
                response_count: 3,
            };

            let form = form_from_proto(record);
            assert_eq!(form.questions.len(), 2);
            assert_eq!(form.questions[0].id, "q1");
            assert_eq!(form.questions[1].question_type, QuestionType::Checkbox);
            assert_eq!(form.response_count, 3);
        }
    }
}
