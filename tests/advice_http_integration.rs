//! Integration tests for the advice and quiz HTTP contract.
//!
//! Every request goes through `app_router`, the same router the server runs:
//! 1. Stateless `POST /api/advice` with engine success, failure and timeout
//! 2. A full quiz session from first question to stored results
//! 3. The process-backed engine behind the router (unix only)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use finance_advisor::adapters::http::{app_router, AdviceAppState, QuizAppState};
use finance_advisor::adapters::{
    InMemoryQuizRepository, InMemorySessionResultStore, MockScoringEngine, ProcessScoringEngine,
};
use finance_advisor::application::AdviceClient;
use finance_advisor::config::ServerConfig;
use finance_advisor::domain::advice::FILLER_ADVICE;
use finance_advisor::ports::{EngineError, ScoringEngine};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn sample_answers() -> Value {
    json!({
        "age": 30,
        "income": "5000",
        "savings": "10000",
        "debt": "2000",
        "expenses": "3000",
        "investmentRisk": "5",
        "dependents": "1"
    })
}

fn app_with(engine: Arc<dyn ScoringEngine>, timeout: Duration) -> Router {
    let client = AdviceClient::new(engine).with_timeout(timeout);
    app_router(
        &ServerConfig::default(),
        AdviceAppState::new(client.clone()),
        QuizAppState::new(
            Arc::new(InMemoryQuizRepository::new()),
            Arc::new(InMemorySessionResultStore::new()),
            client,
        ),
    )
}

fn app(engine: MockScoringEngine) -> Router {
    app_with(Arc::new(engine), Duration::from_millis(200))
}

fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// POST /api/advice
// =============================================================================

#[tokio::test]
async fn short_engine_list_is_padded_with_filler() {
    let app = app(MockScoringEngine::new().with_advice(&["A", "B", "C"]));

    let response = send(
        &app,
        json_request(Method::POST, "/api/advice", Some(sample_answers())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({
            "advice": ["A", "B", "C", FILLER_ADVICE, FILLER_ADVICE],
            "status": "success"
        })
    );
}

#[tokio::test]
async fn engine_failure_returns_flagged_fallback() {
    let app = app(MockScoringEngine::new().with_error(EngineError::Spawn(
        "python3: not found".to_string(),
    )));

    let response = send(
        &app,
        json_request(Method::POST, "/api/advice", Some(sample_answers())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], json!("success"));
    assert_eq!(body["fallback"], json!(true));
    let advice: Vec<&str> = body["advice"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(advice.len(), 5);
    assert!(advice.iter().any(|item| item.ends_with("save 1000 monthly")));
}

#[tokio::test]
async fn empty_income_is_rejected_by_name() {
    let engine = MockScoringEngine::new();
    let app = app(engine.clone());
    let mut answers = sample_answers();
    answers["income"] = json!("");

    let response = send(&app, json_request(Method::POST, "/api/advice", Some(answers))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["status"], json!("error"));
    assert_eq!(body["field"], json!("income"));
    assert!(body["message"].as_str().unwrap().contains("income"));
    assert_eq!(engine.call_count(), 0);
}

#[tokio::test]
async fn slow_engine_is_cut_off_at_the_timeout() {
    let app = app(MockScoringEngine::new().with_delay(Duration::from_secs(10)));

    let started = Instant::now();
    let response = send(
        &app,
        json_request(Method::POST, "/api/advice", Some(sample_answers())),
    )
    .await;

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["fallback"], json!(true));
}

// =============================================================================
// Quiz session flow
// =============================================================================

#[tokio::test]
async fn full_quiz_session_stores_and_clears_advice() {
    let app = app(MockScoringEngine::new().with_advice(&["A", "B", "C", "D", "E", "F"]));

    let response = send(&app, json_request(Method::POST, "/api/quiz", None)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = read_json(response).await["id"].as_str().unwrap().to_string();

    // Results before submission send the user back to the start
    let response = send(
        &app,
        json_request(Method::GET, &format!("/api/quiz/{}/results", id), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // A rejected value leaves the cursor on the first question
    let response = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/quiz/{}/answers/age", id),
            Some(json!({"value": "-5"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let answers = sample_answers();
    for key in [
        "age",
        "income",
        "savings",
        "debt",
        "expenses",
        "investmentRisk",
        "dependents",
    ] {
        let response = send(
            &app,
            json_request(
                Method::PUT,
                &format!("/api/quiz/{}/answers/{}", id, key),
                Some(json!({"value": answers[key]})),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "answer {}", key);

        let response = send(
            &app,
            json_request(Method::POST, &format!("/api/quiz/{}/advance", id), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "advance past {}", key);
    }

    let response = send(
        &app,
        json_request(Method::GET, &format!("/api/quiz/{}", id), None),
    )
    .await;
    let view = read_json(response).await;
    assert_eq!(view["state"], json!("ready_to_submit"));
    assert_eq!(view["position"], json!(7));

    let response = send(
        &app,
        json_request(Method::POST, &format!("/api/quiz/{}/submit", id), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let submitted = read_json(response).await;
    assert_eq!(submitted["advice"], json!(["A", "B", "C", "D", "E"]));

    let response = send(
        &app,
        json_request(Method::GET, &format!("/api/quiz/{}/results", id), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, submitted);

    let response = send(
        &app,
        json_request(Method::POST, &format!("/api/quiz/{}/restart", id), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let view = read_json(response).await;
    assert_eq!(view["state"], json!("asking"));
    assert_eq!(view["answers"], json!({}));

    let response = send(
        &app,
        json_request(Method::GET, &format!("/api/quiz/{}/results", id), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    // Closing the tab ends the session
    let response = send(
        &app,
        json_request(Method::DELETE, &format!("/api/quiz/{}", id), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(
        &app,
        json_request(Method::GET, &format!("/api/quiz/{}", id), None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Process engine behind the router
// =============================================================================

#[cfg(unix)]
#[tokio::test]
async fn process_engine_last_line_is_used() {
    let engine = ProcessScoringEngine::new("sh").with_args([
        "-c",
        r#"echo "model loaded"; echo '["Cut subscriptions","Refinance the loan"]'"#,
    ]);
    let app = app_with(Arc::new(engine), Duration::from_secs(5));

    let response = send(
        &app,
        json_request(Method::POST, "/api/advice", Some(sample_answers())),
    )
    .await;

    let body = read_json(response).await;
    assert!(body.get("fallback").is_none());
    assert_eq!(body["advice"][0], json!("Cut subscriptions"));
    assert_eq!(body["advice"][4], json!(FILLER_ADVICE));
}

#[cfg(unix)]
#[tokio::test]
async fn hung_process_engine_falls_back() {
    let engine = ProcessScoringEngine::new("sh").with_args(["-c", "sleep 10"]);
    let app = app_with(Arc::new(engine), Duration::from_millis(200));

    let started = Instant::now();
    let response = send(
        &app,
        json_request(Method::POST, "/api/advice", Some(sample_answers())),
    )
    .await;

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(read_json(response).await["fallback"], json!(true));
}
