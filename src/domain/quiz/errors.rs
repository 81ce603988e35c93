//! Quiz-specific error types.

use thiserror::Error;

use super::field::FieldKey;
use crate::domain::foundation::{DomainError, ErrorCode, QuizSessionId};

/// Message shown when the user tries to move on without a usable answer.
pub const ADVANCE_REJECTED_MESSAGE: &str = "Please enter a valid number before proceeding";

/// Message shown when an entered value is rejected outright.
pub const INVALID_VALUE_MESSAGE: &str = "Please enter a valid non-negative number";

/// Quiz-specific errors.
///
/// Each variant belongs to exactly one cause: bad input
/// (`InvalidValue`, `IncompleteAnswer`), a request that does not fit the
/// current state (`InvalidState`), or broken local state (`CorruptedState`,
/// `Infrastructure`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Quiz not found: {0}")]
    NotFound(QuizSessionId),

    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: FieldKey, value: String },

    #[error("{field} needs a valid answer before the quiz can move on")]
    IncompleteAnswer { field: FieldKey },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Stored answers are corrupted: {0}")]
    CorruptedState(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl QuizError {
    pub fn invalid_state(message: impl Into<String>) -> Self {
        QuizError::InvalidState(message.into())
    }

    pub fn corrupted(message: impl Into<String>) -> Self {
        QuizError::CorruptedState(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        QuizError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuizError::NotFound(_) => ErrorCode::QuizNotFound,
            QuizError::InvalidValue { .. } => ErrorCode::InvalidValue,
            QuizError::IncompleteAnswer { .. } => ErrorCode::MissingField,
            QuizError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            QuizError::CorruptedState(_) => ErrorCode::CorruptedState,
            QuizError::Infrastructure(_) => ErrorCode::StorageFailure,
        }
    }

    /// True for errors caused by what the user typed.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidValue { .. } | QuizError::IncompleteAnswer { .. }
        )
    }
}

impl From<DomainError> for QuizError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => QuizError::InvalidState(err.message),
            ErrorCode::CorruptedState => QuizError::CorruptedState(err.message),
            _ => QuizError::Infrastructure(err.to_string()),
        }
    }
}
