mod analysis;
mod assessment;
mod config;
mod db;
mod errors;
mod i18n;
mod llm_client;
mod models;
mod questions;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::narrative::{LlmNarrativeGenerator, NarrativeGenerator};
use crate::assessment::store::{AssessmentStore, PgAssessmentStore};
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::llm_client::LlmClient;
use crate::questions::generator::{LlmQuestionGenerator, QuestionGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wellness API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Integrations: database={}, llm={}",
        config.database_configured(),
        config.llm_configured()
    );

    let (question_generator, narrative_generator) = build_generators(&config)?;
    let store = build_store(&config).await;

    let state = AppState {
        question_generator,
        narrative_generator,
        store,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

type Generators = (
    Option<Arc<dyn QuestionGenerator>>,
    Option<Arc<dyn NarrativeGenerator>>,
);

/// Both generators share one LLM client. Without an API key neither is installed.
fn build_generators(config: &Config) -> Result<Generators> {
    let Some(api_key) = config.anthropic_api_key.clone() else {
        warn!("ANTHROPIC_API_KEY not set, using default questions and deterministic analysis");
        return Ok((None, None));
    };

    let llm = LlmClient::new(api_key, Duration::from_secs(config.llm_timeout_secs))?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm_client::MODEL,
        config.llm_timeout_secs
    );

    let questions: Arc<dyn QuestionGenerator> = Arc::new(LlmQuestionGenerator(llm.clone()));
    let narrative: Arc<dyn NarrativeGenerator> = Arc::new(LlmNarrativeGenerator(llm));
    Ok((Some(questions), Some(narrative)))
}

/// Connects the store when a database is configured. Schema failures are logged
/// and the store stays installed; each request then degrades on its own.
async fn build_store(config: &Config) -> Option<Arc<dyn AssessmentStore>> {
    let Some(url) = config.database_url.as_deref() else {
        match config.rejected_database_scheme.as_deref() {
            Some(scheme) => warn!(
                "DATABASE_URL has unsupported scheme '{scheme}' (expected postgres:// or \
                 postgresql://), assessments will not be saved"
            ),
            None => warn!("Database not configured, assessments will not be saved"),
        }
        return None;
    };

    let pool = match create_pool(url, config.db_max_connections) {
        Ok(pool) => pool,
        Err(e) => {
            warn!("Invalid database configuration, assessments will not be saved: {e}");
            return None;
        }
    };

    if let Err(e) = ensure_schema(&pool).await {
        warn!("Failed to initialize assessment schema: {e}");
    }

    let store: Arc<dyn AssessmentStore> = Arc::new(PgAssessmentStore::new(pool));
    Some(store)
}
