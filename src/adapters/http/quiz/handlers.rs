//! HTTP handlers for quiz endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tracing::debug;

use crate::adapters::http::advice::AdviceResponse;
use crate::application::handlers::{
    AdvanceQuizCommand, AdvanceQuizHandler, AdviceClient, AnswerQuestionCommand,
    AnswerQuestionHandler, AnswerTarget, EndQuizCommand, EndQuizHandler, GetQuizHandler, GetQuizQuery, GetResultsHandler,
    GetResultsQuery, RestartQuizCommand, RestartQuizHandler, StartQuizHandler, SubmitQuizCommand,
    SubmitQuizHandler,
};
use crate::domain::foundation::QuizSessionId;
use crate::domain::quiz::{QuizError, ADVANCE_REJECTED_MESSAGE, INVALID_VALUE_MESSAGE};
use crate::ports::{QuizRepository, SessionResultStore};

use super::dto::{AnswerRequest, ErrorResponse, QuizResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application state for quiz handlers.
///
/// Cloned for each request; handlers are built on demand from the shared
/// ports.
#[derive(Clone)]
pub struct QuizAppState {
    pub repository: Arc<dyn QuizRepository>,
    pub store: Arc<dyn SessionResultStore>,
    pub client: AdviceClient,
}

impl QuizAppState {
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

    pub fn start_handler(&self) -> StartQuizHandler {
        StartQuizHandler::new(self.repository.clone())
    }

    pub fn get_handler(&self) -> GetQuizHandler {
        GetQuizHandler::new(self.repository.clone())
    }

    pub fn answer_handler(&self) -> AnswerQuestionHandler {
        AnswerQuestionHandler::new(self.repository.clone())
    }

    pub fn advance_handler(&self) -> AdvanceQuizHandler {
        AdvanceQuizHandler::new(self.repository.clone())
    }

    pub fn submit_handler(&self) -> SubmitQuizHandler {
        SubmitQuizHandler::new(
            self.repository.clone(),
            self.store.clone(),
            self.client.clone(),
        )
    }

    pub fn results_handler(&self) -> GetResultsHandler {
        GetResultsHandler::new(self.store.clone())
    }

    pub fn restart_handler(&self) -> RestartQuizHandler {
        RestartQuizHandler::new(self.repository.clone(), self.store.clone())
    }

    pub fn end_handler(&self) -> EndQuizHandler {
        EndQuizHandler::new(self.repository.clone(), self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/quiz - Start a quiz
pub async fn start_quiz(State(state): State<QuizAppState>) -> Response {
    match state.start_handler().handle().await {
        Ok(quiz) => (StatusCode::CREATED, Json(QuizResponse::from(&quiz))).into_response(),
        Err(e) => handle_quiz_error(e),
    }
}

/// GET /api/quiz/:id - Current quiz view
pub async fn get_quiz(State(state): State<QuizAppState>, Path(quiz_id): Path<String>) -> Response {
    let quiz_id = match parse_quiz_id(&quiz_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.get_handler().handle(GetQuizQuery { quiz_id }).await {
        Ok(quiz) => (StatusCode::OK, Json(QuizResponse::from(&quiz))).into_response(),
        Err(e) => handle_quiz_error(e),
    }
}

/// PUT /api/quiz/:id/answers/:field - Set or clear one answer
pub async fn answer_question(
    State(state): State<QuizAppState>,
    Path((quiz_id, field)): Path<(String, String)>,
    body: Result<Json<AnswerRequest>, JsonRejection>,
) -> Response {
    let quiz_id = match parse_quiz_id(&quiz_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                rejection.status(),
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };
    let target = match field.parse::<AnswerTarget>() {
        Ok(target) => target,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = AnswerQuestionCommand {
        quiz_id,
        target,
        value: req.into_text(),
    };

    match state.answer_handler().handle(cmd).await {
        Ok(quiz) => (StatusCode::OK, Json(QuizResponse::from(&quiz))).into_response(),
        Err(e) => handle_quiz_error(e),
    }
}

/// POST /api/quiz/:id/advance - Move past the current question
pub async fn advance_quiz(
    State(state): State<QuizAppState>,
    Path(quiz_id): Path<String>,
) -> Response {
    let quiz_id = match parse_quiz_id(&quiz_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.advance_handler().handle(AdvanceQuizCommand { quiz_id }).await {
        Ok(quiz) => (StatusCode::OK, Json(QuizResponse::from(&quiz))).into_response(),
        Err(e) => handle_quiz_error(e),
    }
}

/// POST /api/quiz/:id/submit - Request advice for a completed quiz
pub async fn submit_quiz(
    State(state): State<QuizAppState>,
    Path(quiz_id): Path<String>,
) -> Response {
    let quiz_id = match parse_quiz_id(&quiz_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.submit_handler().handle(SubmitQuizCommand { quiz_id }).await {
        Ok(result) => (StatusCode::OK, Json(AdviceResponse::from(result))).into_response(),
        Err(e) => handle_quiz_error(e),
    }
}

/// GET /api/quiz/:id/results - Stored advice, or back to the start
pub async fn get_results(
    State(state): State<QuizAppState>,
    Path(quiz_id): Path<String>,
) -> Response {
    let Ok(quiz_id) = quiz_id.parse::<QuizSessionId>() else {
        return Redirect::to("/").into_response();
    };

    match state.results_handler().handle(GetResultsQuery { quiz_id }).await {
        Some(result) => (StatusCode::OK, Json(AdviceResponse::from(result))).into_response(),
        None => {
            debug!(quiz_id = %quiz_id, "no stored advice, redirecting to start");
            Redirect::to("/").into_response()
        }
    }
}

/// POST /api/quiz/:id/restart - Start over
pub async fn restart_quiz(
    State(state): State<QuizAppState>,
    Path(quiz_id): Path<String>,
) -> Response {
    let quiz_id = match parse_quiz_id(&quiz_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.restart_handler().handle(RestartQuizCommand { quiz_id }).await {
        Ok(quiz) => (StatusCode::OK, Json(QuizResponse::from(&quiz))).into_response(),
        Err(e) => handle_quiz_error(e),
    }
}

/// DELETE /api/quiz/:id - End the session and forget its data
pub async fn end_quiz(State(state): State<QuizAppState>, Path(quiz_id): Path<String>) -> Response {
    let quiz_id = match parse_quiz_id(&quiz_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.end_handler().handle(EndQuizCommand { quiz_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_quiz_error(e),
    }
}

fn parse_quiz_id(raw: &str) -> Result<QuizSessionId, Response> {
    raw.parse::<QuizSessionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid quiz ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_quiz_error(error: QuizError) -> Response {
    match &error {
        QuizError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Quiz", &id.to_string())),
        )
            .into_response(),
        QuizError::InvalidValue { field, .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::from_quiz_error(&error, INVALID_VALUE_MESSAGE).with_field(*field)),
        )
            .into_response(),
        QuizError::IncompleteAnswer { field } => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::from_quiz_error(&error, ADVANCE_REJECTED_MESSAGE).with_field(*field),
            ),
        )
            .into_response(),
        QuizError::InvalidState(msg) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::from_quiz_error(&error, msg.clone())),
        )
            .into_response(),
        QuizError::CorruptedState(_) | QuizError::Infrastructure(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::from_quiz_error(&error, error.to_string())),
        )
            .into_response(),
    }
}
