//! Quiz repository port.
//!
//! Keeps one [`QuizStateMachine`] per quiz session until the session is
//! ended or the process stops. Nothing outlives the browsing session.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, QuizSessionId};
use crate::domain::quiz::QuizStateMachine;

/// Repository port for quiz aggregates.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Inserts or replaces a quiz.
    ///
    /// # Errors
    ///
    /// - `StorageFailure` if the backing store is unusable
    async fn save(&self, quiz: &QuizStateMachine) -> Result<(), DomainError>;

    /// Finds a quiz by its session ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &QuizSessionId) -> Result<Option<QuizStateMachine>, DomainError>;

    /// Removes a quiz. Returns `false` if there was nothing to remove.
    async fn delete(&self, id: &QuizSessionId) -> Result<bool, DomainError>;
}
