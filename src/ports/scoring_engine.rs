//! Scoring Engine Port - Interface for the external advice generator.
//!
//! The engine is a black box: it receives the answer set as one JSON argument
//! and writes zero or more lines of text. Only the last non-empty line
//! matters, and it must be a JSON list of strings.
//!
//! # Example
//!
//! ```ignore
//! struct CannedEngine;
//!
//! #[async_trait]
//! impl ScoringEngine for CannedEngine {
//!     async fn score(&self, _request: EngineRequest) -> Result<EngineReply, EngineError> {
//!         Ok(EngineReply::from_output("[\"Save more\"]\n"))
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::ErrorCode;
use crate::domain::quiz::ValidatedAnswerSet;

/// Port for scoring-engine invocations.
///
/// Exactly one call per advice request; implementations must not retry.
#[async_trait]
pub trait ScoringEngine: Send + Sync {
    /// Runs the engine once for `request`.
    async fn score(&self, request: EngineRequest) -> Result<EngineReply, EngineError>;

    /// Short name used in logs.
    fn name(&self) -> &str;
}

/// Wire shape of the engine's single argument: numbers, not text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineRequest {
    pub age: f64,
    pub income: f64,
    pub savings: f64,
    pub debt: f64,
    pub expenses: f64,
    pub investment_risk: f64,
    pub dependents: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_goals: Option<String>,
}

impl EngineRequest {
    /// JSON text passed to the engine.
    pub fn to_argument(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|e| EngineError::Serialization(e.to_string()))
    }
}

impl From<&ValidatedAnswerSet> for EngineRequest {
    fn from(answers: &ValidatedAnswerSet) -> Self {
        Self {
            age: answers.age(),
            income: answers.income(),
            savings: answers.savings(),
            debt: answers.debt(),
            expenses: answers.expenses(),
            investment_risk: answers.investment_risk(),
            dependents: answers.dependents(),
            financial_goals: answers.financial_goals().map(str::to_string),
        }
    }
}

/// Everything the engine wrote to its output channel, split into lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineReply {
    lines: Vec<String>,
}

impl EngineReply {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Splits raw output text into lines.
    pub fn from_output(output: &str) -> Self {
        Self::new(output.lines().map(str::to_string).collect())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The last line with any non-whitespace content.
    pub fn last_non_empty_line(&self) -> Option<&str> {
        self.lines
            .iter()
            .rev()
            .map(|line| line.trim())
            .find(|line| !line.is_empty())
    }

    /// Decodes the meaningful line as JSON.
    ///
    /// Only checks that it is JSON; whether it is a list of strings is the
    /// normalizer's call.
    pub fn payload(&self) -> Result<Value, EngineError> {
        let line = self.last_non_empty_line().ok_or(EngineError::EmptyReply)?;
        serde_json::from_str(line).map_err(|e| EngineError::MalformedReply(e.to_string()))
    }
}

/// Ways a single engine invocation can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to start scoring engine: {0}")]
    Spawn(String),

    #[error("Scoring engine exited with status {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },

    #[error("Scoring engine produced no output")]
    EmptyReply,

    #[error("Scoring engine reply is not valid JSON: {0}")]
    MalformedReply(String),

    #[error("Scoring engine did not answer within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("Failed to serialize engine request: {0}")]
    Serialization(String),

    #[error("Scoring engine task ended unexpectedly: {0}")]
    Aborted(String),
}

impl EngineError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, EngineError::Timeout { .. })
    }

    pub fn code(&self) -> ErrorCode {
        if self.is_timeout() {
            ErrorCode::EngineTimeout
        } else {
            ErrorCode::EngineFailure
        }
    }
}
