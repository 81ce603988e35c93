//! StartQuizHandler - creates a quiz at the first question.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizError, QuizStateMachine};
use crate::ports::QuizRepository;

/// Handler for starting quizzes.
pub struct StartQuizHandler {
    repository: Arc<dyn QuizRepository>,
}

impl StartQuizHandler {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<QuizStateMachine, QuizError> {
        let quiz = QuizStateMachine::new(QuizSessionId::new());
        self.repository.save(&quiz).await?;
        info!(quiz_id = %quiz.id(), "quiz started");
        Ok(quiz)
    }
}
