//! HTTP adapter for quiz endpoints.
//!
//! Drives the quiz state machine server-side, one quiz per browser tab.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnswerRequest, ErrorResponse, QuestionView, QuizResponse};
pub use handlers::QuizAppState;
pub use routes::quiz_router;
