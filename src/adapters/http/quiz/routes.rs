//! Route configuration for quiz endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    advance_quiz, answer_question, end_quiz, get_quiz, get_results, restart_quiz, start_quiz,
    submit_quiz, QuizAppState,
};

/// Creates the quiz router with all endpoints.
///
/// Routes:
/// - `POST /api/quiz` - Start a quiz
/// - `GET /api/quiz/:id` - Current quiz view
/// - `DELETE /api/quiz/:id` - End the session
/// - `PUT /api/quiz/:id/answers/:field` - Set or clear an answer
/// - `POST /api/quiz/:id/advance` - Move to the next question
/// - `POST /api/quiz/:id/submit` - Request advice
/// - `GET /api/quiz/:id/results` - Stored advice (redirects to `/` when absent)
/// - `POST /api/quiz/:id/restart` - Start over
pub fn quiz_router() -> Router<QuizAppState> {
    Router::new()
        .route("/api/quiz", post(start_quiz))
        .route("/api/quiz/:id", get(get_quiz).delete(end_quiz))
        .route("/api/quiz/:id/answers/:field", put(answer_question))
        .route("/api/quiz/:id/advance", post(advance_quiz))
        .route("/api/quiz/:id/submit", post(submit_quiz))
        .route("/api/quiz/:id/results", get(get_results))
        .route("/api/quiz/:id/restart", post(restart_quiz))
}
