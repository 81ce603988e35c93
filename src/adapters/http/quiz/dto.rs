//! HTTP DTOs for quiz endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::quiz::{FieldKey, QuizError, QuizStateMachine, REQUIRED_FIELD_COUNT};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to set one answer. `null` or a missing value clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerRequest {
    #[serde(default)]
    pub value: Value,
}

impl AnswerRequest {
    /// The value as the user would have typed it.
    pub fn into_text(self) -> String {
        match self.value {
            Value::Null => String::new(),
            Value::String(text) => text,
            other => other.to_string(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// The question currently being asked.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub key: &'static str,
    pub label: &'static str,
}

impl From<FieldKey> for QuestionView {
    fn from(key: FieldKey) -> Self {
        Self {
            key: key.as_str(),
            label: key.label(),
        }
    }
}

/// Quiz view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub id: String,
    pub state: String,
    pub position: usize,
    pub total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    pub answers: BTreeMap<&'static str, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&QuizStateMachine> for QuizResponse {
    fn from(quiz: &QuizStateMachine) -> Self {
        Self {
            id: quiz.id().to_string(),
            state: quiz.status().to_string(),
            position: quiz.position(),
            total: REQUIRED_FIELD_COUNT,
            question: quiz.current_field().map(QuestionView::from),
            answers: quiz
                .answers()
                .iter()
                .map(|(key, value)| (key.as_str(), value.to_string()))
                .collect(),
            financial_goals: quiz.answers().financial_goals().map(str::to_string),
            error: quiz.last_error().map(str::to_string),
            created_at: quiz.created_at().to_rfc3339(),
            updated_at: quiz.updated_at().to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    /// Response carrying the quiz error's code.
    pub fn from_quiz_error(error: &QuizError, message: impl Into<String>) -> Self {
        Self {
            code: error.code().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_field(mut self, field: FieldKey) -> Self {
        self.details = Some(serde_json::json!({ "field": field.as_str() }));
        self
    }
}
