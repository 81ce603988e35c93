//! HTTP handler for the advice endpoint.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::application::handlers::AdviceClient;
use crate::domain::quiz::validate_answer_set;

use super::dto::{answers_from_body, AdviceErrorResponse, AdviceResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AdviceAppState {
    pub client: AdviceClient,
}

impl AdviceAppState {
    pub fn new(client: AdviceClient) -> Self {
        Self { client }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/advice - Validate answers and produce five recommendations
///
/// The body is read as raw bytes so a missing or wrong content type does not
/// change the outcome.
pub async fn request_advice(State(state): State<AdviceAppState>, body: Bytes) -> Response {
    let answers = match answers_from_body(&body) {
        Ok(answers) => answers,
        Err(e) => {
            error!(error = %e, "unreadable advice request");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AdviceErrorResponse::internal()),
            )
                .into_response();
        }
    };

    let validated = match validate_answer_set(&answers) {
        Ok(validated) => validated,
        Err(e) => {
            debug!(field = %e.field(), error = %e, "advice request rejected");
            return (
                StatusCode::BAD_REQUEST,
                Json(AdviceErrorResponse::invalid_input(&e)),
            )
                .into_response();
        }
    };

    let result = state.client.request_advice(&validated).await;
    (StatusCode::OK, Json(AdviceResponse::from(result))).into_response()
}
