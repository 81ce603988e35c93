//! RestartQuizHandler - wipes answers and stored advice.

use std::sync::Arc;

use tracing::warn;

use super::load_quiz;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizError, QuizStateMachine};
use crate::ports::{QuizRepository, SessionResultStore};

/// Command to start the quiz over.
#[derive(Debug, Clone)]
pub struct RestartQuizCommand {
    pub quiz_id: QuizSessionId,
}

pub struct RestartQuizHandler {
    repository: Arc<dyn QuizRepository>,
    store: Arc<dyn SessionResultStore>,
}

impl RestartQuizHandler {
    pub fn new(repository: Arc<dyn QuizRepository>, store: Arc<dyn SessionResultStore>) -> Self {
        Self { repository, store }
    }

    pub async fn handle(&self, cmd: RestartQuizCommand) -> Result<QuizStateMachine, QuizError> {
        let mut quiz = load_quiz(self.repository.as_ref(), &cmd.quiz_id).await?;
        quiz.restart();

        if let Err(e) = self.store.clear(cmd.quiz_id).await {
            warn!(quiz_id = %cmd.quiz_id, error = %e, "failed to clear stored advice");
        }

        self.repository.save(&quiz).await?;
        Ok(quiz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryQuizRepository, InMemorySessionResultStore};
    use crate::application::handlers::quiz::test_support::ready_quiz;
    use crate::domain::advice::normalize_list;
    use crate::domain::quiz::{FieldKey, QuizStatus};

    #[tokio::test]
    async fn restart_clears_answers_and_advice() {
        let repo = Arc::new(InMemoryQuizRepository::new());
        let store = Arc::new(InMemorySessionResultStore::new());
        let quiz = ready_quiz();
        let quiz_id = *quiz.id();
        repo.save(&quiz).await.unwrap();
        store
            .put(quiz_id, &normalize_list(vec!["old".to_string()]))
            .await
            .unwrap();

        let handler = RestartQuizHandler::new(repo.clone(), store.clone());
        let quiz = handler.handle(RestartQuizCommand { quiz_id }).await.unwrap();

        assert_eq!(quiz.status(), QuizStatus::Asking);
        assert_eq!(quiz.current_field(), Some(FieldKey::Age));
        assert!(quiz.answers().is_empty());
        assert!(store.get(quiz_id).await.is_none());
        assert_eq!(repo.find_by_id(&quiz_id).await.unwrap(), Some(quiz));
    }

    #[tokio::test]
    async fn unknown_quiz_is_not_found() {
        let handler = RestartQuizHandler::new(
            Arc::new(InMemoryQuizRepository::new()),
            Arc::new(InMemorySessionResultStore::new()),
        );
        let quiz_id = QuizSessionId::new();

        let err = handler.handle(RestartQuizCommand { quiz_id }).await.unwrap_err();

        assert_eq!(err, QuizError::NotFound(quiz_id));
    }
}
