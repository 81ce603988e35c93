//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod advice;
pub mod quiz;

pub use advice::{AdviceClient, DEFAULT_TIMEOUT};
pub use quiz::{
    AdvanceQuizCommand, AdvanceQuizHandler, AnswerQuestionCommand, AnswerQuestionHandler,
    AnswerTarget, EndQuizCommand, EndQuizHandler, GetQuizHandler, GetQuizQuery, GetResultsHandler, GetResultsQuery,
    RestartQuizCommand, RestartQuizHandler, StartQuizHandler, SubmitQuizCommand,
    SubmitQuizHandler,
};
