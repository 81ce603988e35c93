//! GetQuizHandler - Query handler for reading a quiz.

use std::sync::Arc;

use super::load_quiz;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizError, QuizStateMachine};
use crate::ports::QuizRepository;

/// Query for a single quiz.
#[derive(Debug, Clone)]
pub struct GetQuizQuery {
    pub quiz_id: QuizSessionId,
}

pub struct GetQuizHandler {
    repository: Arc<dyn QuizRepository>,
}

impl GetQuizHandler {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetQuizQuery) -> Result<QuizStateMachine, QuizError> {
        load_quiz(self.repository.as_ref(), &query.quiz_id).await
    }
}
