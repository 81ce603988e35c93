//! Finance Advisor server entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use finance_advisor::adapters::http::{app_router, AdviceAppState, QuizAppState};
use finance_advisor::adapters::{
    InMemoryQuizRepository, InMemorySessionResultStore, ProcessScoringEngine,
};
use finance_advisor::application::AdviceClient;
use finance_advisor::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let engine = Arc::new(ProcessScoringEngine::from_config(&config.engine));
    let client = AdviceClient::new(engine).with_timeout(config.engine.timeout());

    let app = app_router(
        &config.server,
        AdviceAppState::new(client.clone()),
        QuizAppState::new(
            Arc::new(InMemoryQuizRepository::new()),
            Arc::new(InMemorySessionResultStore::new()),
            client,
        ),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        engine = %config.engine.program,
        engine_timeout_ms = config.engine.timeout_ms,
        "finance advisor listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).compact().init();
    }
}
