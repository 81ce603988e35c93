//! SubmitQuizHandler - sends the answers for advice and records the result.
//!
//! Flow: ReadyToSubmit -> Submitting (saved) -> engine call -> result stored
//! for the session -> ShowingResults (saved). A fallback result counts as a
//! successful submission. Two concurrent submits can both pass the load
//! before either saves `Submitting`; both then call the engine and the later
//! save wins.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::load_quiz;
use crate::application::handlers::advice::AdviceClient;
use crate::domain::advice::AdviceResult;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::QuizError;
use crate::ports::{QuizRepository, SessionResultStore};

/// Command to submit a completed quiz.
#[derive(Debug, Clone)]
pub struct SubmitQuizCommand {
    pub quiz_id: QuizSessionId,
}

pub struct SubmitQuizHandler {
    repository: Arc<dyn QuizRepository>,
    store: Arc<dyn SessionResultStore>,
    client: AdviceClient,
}

impl SubmitQuizHandler {
    pub fn new(
        repository: Arc<dyn QuizRepository>,
        store: Arc<dyn SessionResultStore>,
        client: AdviceClient,
    ) -> Self {
        Self {
            repository,
            store,
            client,
        }
    }

    pub async fn handle(&self, cmd: SubmitQuizCommand) -> Result<AdviceResult, QuizError> {
        // 1. Load and start the submission
        let mut quiz = load_quiz(self.repository.as_ref(), &cmd.quiz_id).await?;
        let answers = match quiz.begin_submission() {
            Ok(answers) => answers,
            Err(err @ QuizError::CorruptedState(_)) => {
                error!(quiz_id = %cmd.quiz_id, error = %err, "stored answers failed validation");
                self.repository.save(&quiz).await?;
                return Err(err);
            }
            Err(err) => return Err(err),
        };
        self.repository.save(&quiz).await?;

        // 2. One engine call, never fails
        let result = self.client.request_advice(&answers).await;

        // 3. Hand the result to the results view
        if let Err(e) = self.store.put(cmd.quiz_id, &result).await {
            warn!(quiz_id = %cmd.quiz_id, error = %e, "failed to store advice for session");
        }

        // 4. Close the round
        quiz.record_results()?;
        self.repository.save(&quiz).await?;

        info!(
            quiz_id = %cmd.quiz_id,
            origin = ?result.origin(),
            "quiz submitted"
        );
        Ok(result)
    }
}
