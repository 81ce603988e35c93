//! Route configuration for the advice endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{request_advice, AdviceAppState};

/// Creates the advice router.
///
/// Routes:
/// - `POST /api/advice` - Answers in, five recommendations out
///
/// Any other method on the path gets `405 Method Not Allowed`.
pub fn advice_router() -> Router<AdviceAppState> {
    Router::new().route("/api/advice", post(request_advice))
}
