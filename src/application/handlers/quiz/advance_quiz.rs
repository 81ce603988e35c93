//! AdvanceQuizHandler - moves past the current question.

use std::sync::Arc;

use super::load_quiz;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizError, QuizStateMachine};
use crate::ports::QuizRepository;

/// Command to move to the next question.
#[derive(Debug, Clone)]
pub struct AdvanceQuizCommand {
    pub quiz_id: QuizSessionId,
}

pub struct AdvanceQuizHandler {
    repository: Arc<dyn QuizRepository>,
}

impl AdvanceQuizHandler {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AdvanceQuizCommand) -> Result<QuizStateMachine, QuizError> {
        let mut quiz = load_quiz(self.repository.as_ref(), &cmd.quiz_id).await?;

        match quiz.advance() {
            Ok(()) => {
                self.repository.save(&quiz).await?;
                Ok(quiz)
            }
            Err(err) if err.is_input_error() => {
                self.repository.save(&quiz).await?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}
