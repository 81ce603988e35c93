//! EndQuizHandler - drops a finished session and its stored advice.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::QuizError;
use crate::ports::{QuizRepository, SessionResultStore};

/// Command to end a quiz session, e.g. when the tab closes.
#[derive(Debug, Clone)]
pub struct EndQuizCommand {
    pub quiz_id: QuizSessionId,
}

pub struct EndQuizHandler {
    repository: Arc<dyn QuizRepository>,
    store: Arc<dyn SessionResultStore>,
}

impl EndQuizHandler {
    pub fn new(repository: Arc<dyn QuizRepository>, store: Arc<dyn SessionResultStore>) -> Self {
        Self { repository, store }
    }

    pub async fn handle(&self, cmd: EndQuizCommand) -> Result<(), QuizError> {
        if let Err(e) = self.store.clear(cmd.quiz_id).await {
            warn!(quiz_id = %cmd.quiz_id, error = %e, "failed to clear stored advice");
        }

        if !self.repository.delete(&cmd.quiz_id).await? {
            return Err(QuizError::NotFound(cmd.quiz_id));
        }

        info!(quiz_id = %cmd.quiz_id, "quiz session ended");
        Ok(())
    }
}
