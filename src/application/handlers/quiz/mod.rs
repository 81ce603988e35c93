//! Quiz command and query handlers.
//!
//! Each handler loads the quiz aggregate, applies one operation and saves it
//! back. Rejected input is saved too, so the error message stays visible on
//! the next read.

mod advance_quiz;
mod answer_question;
mod end_quiz;
mod get_quiz;
mod get_results;
mod restart_quiz;
mod start_quiz;
mod submit_quiz;

pub use advance_quiz::{AdvanceQuizCommand, AdvanceQuizHandler};
pub use answer_question::{AnswerQuestionCommand, AnswerQuestionHandler, AnswerTarget};
pub use end_quiz::{EndQuizCommand, EndQuizHandler};
pub use get_quiz::{GetQuizHandler, GetQuizQuery};
pub use get_results::{GetResultsHandler, GetResultsQuery};
pub use restart_quiz::{RestartQuizCommand, RestartQuizHandler};
pub use start_quiz::StartQuizHandler;
pub use submit_quiz::{SubmitQuizCommand, SubmitQuizHandler};

use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizError, QuizStateMachine};
use crate::ports::QuizRepository;

async fn load_quiz(
    repository: &dyn QuizRepository,
    quiz_id: &QuizSessionId,
) -> Result<QuizStateMachine, QuizError> {
    repository
        .find_by_id(quiz_id)
        .await?
        .ok_or(QuizError::NotFound(*quiz_id))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::quiz::{FieldKey, QuizStateMachine};

    pub const SAMPLE: [(FieldKey, &str); 7] = [
        (FieldKey::Age, "30"),
        (FieldKey::Income, "5000"),
        (FieldKey::Savings, "10000"),
        (FieldKey::Debt, "2000"),
        (FieldKey::Expenses, "3000"),
        (FieldKey::InvestmentRisk, "5"),
        (FieldKey::Dependents, "1"),
    ];

    /// A quiz with every answer entered and the cursor at the end.
    pub fn ready_quiz() -> QuizStateMachine {
        let mut quiz = QuizStateMachine::new(Default::default());
        for (key, value) in SAMPLE {
            quiz.set_answer(key, value).unwrap();
            quiz.advance().unwrap();
        }
        quiz
    }
}
