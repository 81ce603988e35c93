//! HTTP adapters - REST API implementations.
//!
//! - `advice` - stateless `POST /api/advice`
//! - `quiz` - server-side quiz sessions
//!
//! [`app_router`] merges both with the health check and the shared
//! tower-http layers.

pub mod advice;
pub mod quiz;

// Re-export key types for convenience
pub use advice::{advice_router, AdviceAppState};
pub use quiz::{quiz_router, QuizAppState};

use axum::{routing::get, Json, Router};
use http::{header, HeaderValue, Method};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

/// GET /health - Liveness check
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the full application router.
pub fn app_router(config: &ServerConfig, advice: AdviceAppState, quiz: QuizAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(advice_router().with_state(advice))
        .merge(quiz_router().with_state(quiz))
        .layer(cors_layer(&config.cors_origins_list()))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins. No origins means same-origin only; `*`
/// allows any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
