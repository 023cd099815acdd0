//! Trait abstraction for the form-store client to enable mocking in tests

use crate::state::{Form, FormPayload, ResponseRecord, SubmissionPayload};
use anyhow::Result;
use async_trait::async_trait;

/// Trait for form-store operations, enabling mocking in tests
#[allow(dead_code)]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormStoreTrait: Send + Sync {
    /// Check if the form store is reachable
    async fn check_connection(&self) -> bool;

    /// List the forms owned by a user, as stored
    async fn list_forms(&mut self, user_id: &str) -> Result<Vec<Form>>;

    /// Fetch one form with its full question schema
    async fn get_form(&mut self, form_id: &str) -> Result<Form>;

    /// Create a form from an editor payload; returns the new form id
    async fn create_form(&mut self, payload: &FormPayload) -> Result<String>;

    /// Update an existing form from an editor payload
    async fn update_form(&mut self, form_id: &str, payload: &FormPayload) -> Result<()>;

    /// Delete a form (responses cascade server-side)
    async fn delete_form(&mut self, form_id: &str) -> Result<()>;

    /// Submit one response; returns the new response id
    async fn submit_response(&mut self, submission: &SubmissionPayload) -> Result<String>;

    /// List the stored responses for a form, newest first
    async fn list_responses(&mut self, form_id: &str) -> Result<Vec<ResponseRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AnswerValue, Question, QuestionType};
    use chrono::Utc;

    fn sample_form() -> Form {
        Form {
            id: "f-1".to_string(),
            title: "Survey".to_string(),
            description: String::new(),
            questions: vec![Question::new(QuestionType::ShortText)],
            user_id: "u-1".to_string(),
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            response_count: 2,
        }
    }

    #[tokio::test]
    async fn test_mock_serves_fetch_and_submit_round_trip() {
        let mut store = MockFormStoreTrait::new();
        store
            .expect_get_form()
            .withf(|id| id == "f-1")
            .returning(|_| Ok(sample_form()));
        store
            .expect_submit_response()
            .withf(|s| s.form_id == "f-1" && s.answers.len() == 1)
            .returning(|_| Ok("r-1".to_string()));

        let store: &mut dyn FormStoreTrait = &mut store;
        let form = store.get_form("f-1").await.unwrap();
        assert_eq!(form.questions.len(), 1);

        let submission = SubmissionPayload {
            form_id: form.id.clone(),
            answers: vec![AnswerValue::Text("hi".to_string())],
        };
        let response_id = store.submit_response(&submission).await.unwrap();
        assert_eq!(response_id, "r-1");
    }

    #[tokio::test]
    async fn test_mock_surfaces_storage_errors() {
        let mut store = MockFormStoreTrait::new();
        store
            .expect_list_forms()
            .returning(|_| Err(anyhow::anyhow!("store unavailable")));

        let store: &mut dyn FormStoreTrait = &mut store;
        let result = store.list_forms("u-1").await;
        assert!(result.is_err());
    }
}
