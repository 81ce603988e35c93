//! Session Result Store Port - hands the advice from submission to display.
//!
//! One slot per quiz session (browser tab). Reads never fail: a missing,
//! unreadable or corrupted entry is reported as absent, and callers send the
//! user back to the start of the quiz.

use async_trait::async_trait;

use crate::domain::advice::AdviceResult;
use crate::domain::foundation::QuizSessionId;

/// Storage key holding the JSON-encoded advice for a session.
pub const ADVICE_STORAGE_KEY: &str = "financial_advice";

/// Errors from writing or clearing the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to encode advice: {0}")]
    Encode(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Port for the tab-scoped advice hand-off.
#[async_trait]
pub trait SessionResultStore: Send + Sync {
    /// Stores the result for a session, replacing any previous one.
    async fn put(&self, session: QuizSessionId, result: &AdviceResult) -> Result<(), StoreError>;

    /// Returns the stored result, or `None` if absent or unreadable.
    async fn get(&self, session: QuizSessionId) -> Option<AdviceResult>;

    /// Removes the stored result. Later reads return `None`.
    async fn clear(&self, session: QuizSessionId) -> Result<(), StoreError>;
}
