//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    AdvanceQuizCommand, AdvanceQuizHandler, AdviceClient, AnswerQuestionCommand,
    AnswerQuestionHandler, AnswerTarget, EndQuizCommand, EndQuizHandler, GetQuizHandler, GetQuizQuery, GetResultsHandler,
    GetResultsQuery, RestartQuizCommand, RestartQuizHandler, StartQuizHandler,
    SubmitQuizCommand, SubmitQuizHandler, DEFAULT_TIMEOUT,
};
