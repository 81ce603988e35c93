//! In-Memory Quiz Repository Adapter
//!
//! Holds quiz aggregates until their session ends.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, QuizSessionId};
use crate::domain::quiz::QuizStateMachine;
use crate::ports::QuizRepository;

/// In-memory storage for quiz state machines.
#[derive(Debug, Clone, Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<QuizSessionId, QuizStateMachine>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored quizzes
    pub async fn count(&self) -> usize {
        self.quizzes.read().await.len()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn save(&self, quiz: &QuizStateMachine) -> Result<(), DomainError> {
        self.quizzes.write().await.insert(*quiz.id(), quiz.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &QuizSessionId) -> Result<Option<QuizStateMachine>, DomainError> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &QuizSessionId) -> Result<bool, DomainError> {
        Ok(self.quizzes.write().await.remove(id).is_some())
    }
}
