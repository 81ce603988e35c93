//! HTTP DTOs for the advice endpoint.
//!
//! The request body is read as loose JSON: each answer may be a number or a
//! numeric string, and `null` counts as missing.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::value::RawValue;
use serde_json::Value;

use crate::domain::advice::AdviceResult;
use crate::domain::quiz::{AnswerSet, AnswerSetError, FieldKey, FINANCIAL_GOALS_KEY};

/// Message returned when the request cannot be processed at all.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate advice";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Why a request body could not be turned into answers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BodyError {
    #[error("request body is not valid JSON: {0}")]
    NotJson(String),

    #[error("request body is not a JSON object")]
    NotAnObject,
}

/// Builds an answer set from a raw request body.
///
/// Numbers are kept in their JSON text form so the validator sees exactly
/// what was sent; values of any other type become text that fails
/// validation.
pub fn answers_from_body(body: &[u8]) -> Result<AnswerSet, BodyError> {
    let raw: Box<RawValue> =
        serde_json::from_slice(body).map_err(|e| BodyError::NotJson(e.to_string()))?;
    if !raw.get().trim_start().starts_with('{') {
        return Err(BodyError::NotAnObject);
    }
    let object: HashMap<String, Box<RawValue>> =
        serde_json::from_str(raw.get()).map_err(|e| BodyError::NotJson(e.to_string()))?;
    Ok(answers_from_object(&object))
}

fn answers_from_object(object: &HashMap<String, Box<RawValue>>) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for key in FieldKey::ALL {
        if let Some(text) = object.get(key.as_str()).and_then(|raw| answer_text(raw)) {
            answers.set(key, text);
        }
    }
    if let Some(raw) = object.get(FINANCIAL_GOALS_KEY) {
        if let Ok(Value::String(goals)) = serde_json::from_str::<Value>(raw.get()) {
            answers.set_financial_goals(Some(goals));
        }
    }
    answers
}

fn answer_text(raw: &RawValue) -> Option<String> {
    match serde_json::from_str::<Value>(raw.get()) {
        Ok(Value::Null) => None,
        Ok(Value::String(text)) => Some(text),
        Ok(other) => Some(other.to_string()),
        // numbers outside the f64 range keep their literal text
        Err(_) => Some(raw.get().to_string()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Successful advice response.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceResponse {
    pub advice: Vec<String>,
    pub status: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl From<AdviceResult> for AdviceResponse {
    fn from(result: AdviceResult) -> Self {
        let fallback = result.is_fallback();
        Self {
            advice: result.into_advice(),
            status: "success",
            fallback,
        }
    }
}

/// Error response for the advice endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceErrorResponse {
    pub message: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AdviceErrorResponse {
    pub fn invalid_input(error: &AnswerSetError) -> Self {
        Self {
            message: error.to_string(),
            status: "error",
            field: Some(error.field().as_str().to_string()),
        }
    }

    pub fn internal() -> Self {
        Self {
            message: GENERATION_FAILED_MESSAGE.to_string(),
            status: "error",
            field: None,
        }
    }
}
