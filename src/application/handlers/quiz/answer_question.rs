//! AnswerQuestionHandler - stores one answer on a quiz.

use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use super::load_quiz;
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{FieldKey, QuizError, QuizStateMachine, UnknownField, FINANCIAL_GOALS_KEY};
use crate::ports::QuizRepository;

/// Which input an answer is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerTarget {
    Field(FieldKey),
    FinancialGoals,
}

impl FromStr for AnswerTarget {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == FINANCIAL_GOALS_KEY {
            Ok(AnswerTarget::FinancialGoals)
        } else {
            s.parse().map(AnswerTarget::Field)
        }
    }
}

/// Command to set or clear an answer.
#[derive(Debug, Clone)]
pub struct AnswerQuestionCommand {
    pub quiz_id: QuizSessionId,
    pub target: AnswerTarget,
    pub value: String,
}

pub struct AnswerQuestionHandler {
    repository: Arc<dyn QuizRepository>,
}

impl AnswerQuestionHandler {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// Applies the answer. A rejected value is still saved so the quiz
    /// carries the error message; the error is then returned.
    pub async fn handle(&self, cmd: AnswerQuestionCommand) -> Result<QuizStateMachine, QuizError> {
        let mut quiz = load_quiz(self.repository.as_ref(), &cmd.quiz_id).await?;

        let applied = match cmd.target {
            AnswerTarget::Field(key) => quiz.set_answer(key, &cmd.value),
            AnswerTarget::FinancialGoals => quiz.set_financial_goals(&cmd.value),
        };

        match applied {
            Ok(()) => {
                self.repository.save(&quiz).await?;
                Ok(quiz)
            }
            Err(err) if err.is_input_error() => {
                debug!(quiz_id = %cmd.quiz_id, error = %err, "answer rejected");
                self.repository.save(&quiz).await?;
                Err(err)
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryQuizRepository;
    use crate::application::handlers::quiz::test_support::ready_quiz;
    use crate::domain::quiz::INVALID_VALUE_MESSAGE;

    async fn setup() -> (AnswerQuestionHandler, Arc<InMemoryQuizRepository>, QuizSessionId) {
        let repo = Arc::new(InMemoryQuizRepository::new());
        let quiz = QuizStateMachine::new(QuizSessionId::new());
        repo.save(&quiz).await.unwrap();
        (AnswerQuestionHandler::new(repo.clone()), repo, *quiz.id())
    }

    fn command(quiz_id: QuizSessionId, target: AnswerTarget, value: &str) -> AnswerQuestionCommand {
        AnswerQuestionCommand {
            quiz_id,
            target,
            value: value.to_string(),
        }
    }

    #[test]
    fn targets_parse_from_wire_names() {
        assert_eq!(
            "investmentRisk".parse::<AnswerTarget>().unwrap(),
            AnswerTarget::Field(FieldKey::InvestmentRisk)
        );
        assert_eq!(
            "financialGoals".parse::<AnswerTarget>().unwrap(),
            AnswerTarget::FinancialGoals
        );
        assert!("salary".parse::<AnswerTarget>().is_err());
    }

    #[tokio::test]
    async fn valid_answer_is_saved() {
        let (handler, repo, quiz_id) = setup().await;

        let quiz = handler
            .handle(command(quiz_id, AnswerTarget::Field(FieldKey::Age), " 42 "))
            .await
            .unwrap();

        assert_eq!(quiz.answers().get(FieldKey::Age), Some("42"));
        let stored = repo.find_by_id(&quiz_id).await.unwrap().unwrap();
        assert_eq!(stored.answers().get(FieldKey::Age), Some("42"));
    }

    #[tokio::test]
    async fn rejected_answer_keeps_error_on_saved_quiz() {
        let (handler, repo, quiz_id) = setup().await;

        let err = handler
            .handle(command(quiz_id, AnswerTarget::Field(FieldKey::Age), "-5"))
            .await
            .unwrap_err();

        assert!(matches!(err, QuizError::InvalidValue { field: FieldKey::Age, .. }));
        let stored = repo.find_by_id(&quiz_id).await.unwrap().unwrap();
        assert_eq!(stored.last_error(), Some(INVALID_VALUE_MESSAGE));
        assert_eq!(stored.answers().get(FieldKey::Age), None);
    }

    #[tokio::test]
    async fn goals_are_free_text() {
        let (handler, _, quiz_id) = setup().await;

        let quiz = handler
            .handle(command(quiz_id, AnswerTarget::FinancialGoals, "buy a house"))
            .await
            .unwrap();

        assert_eq!(quiz.answers().financial_goals(), Some("buy a house"));
    }

    #[tokio::test]
    async fn answers_are_refused_once_ready() {
        let repo = Arc::new(InMemoryQuizRepository::new());
        let quiz = ready_quiz();
        repo.save(&quiz).await.unwrap();
        let handler = AnswerQuestionHandler::new(repo);

        let err = handler
            .handle(command(*quiz.id(), AnswerTarget::Field(FieldKey::Age), "31"))
            .await
            .unwrap_err();

        assert!(matches!(err, QuizError::InvalidState(_)));
    }

    #[tokio::test]
    async fn unknown_quiz_is_not_found() {
        let (handler, _, _) = setup().await;
        let missing = QuizSessionId::new();

        let err = handler
            .handle(command(missing, AnswerTarget::Field(FieldKey::Age), "1"))
            .await
            .unwrap_err();

        assert_eq!(err, QuizError::NotFound(missing));
    }
}
