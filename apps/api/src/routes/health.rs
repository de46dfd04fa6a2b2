use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which integrations are active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "integrations": {
            "questionGenerator": state.question_generator.is_some(),
            "narrativeGenerator": state.narrative_generator.is_some(),
            "store": state.store.is_some(),
        }
    }))
}
