pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assessment::handlers as assessment;
use crate::i18n::handlers as i18n;
use crate::questions::handlers as questions;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Questions API
        .route("/api/v1/questions", get(questions::handle_get_questions))
        .route(
            "/api/v1/questions/generate",
            post(questions::handle_generate_questions),
        )
        // Assessments API
        .route(
            "/api/v1/assessments",
            post(assessment::handle_submit_assessment),
        )
        .route(
            "/api/v1/assessments/analyze",
            post(analysis::handle_analyze),
        )
        .route("/api/v1/stats", get(assessment::handle_get_stats))
        // Translations
        .route("/api/v1/i18n/:lang", get(i18n::handle_get_translations))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::analysis::narrative::{NarrativeGenerator, NarrativeRequest};
    use crate::analysis::report::NarrativeAnalysis;
    use crate::assessment::stats::{AssessmentStats, OverallStats};
    use crate::assessment::store::{AssessmentStore, NewAssessment, StoreError};
    use crate::i18n::Language;
    use crate::llm_client::LlmError;
    use crate::models::assessment::SavedAssessmentRow;
    use crate::models::profile::Profile;
    use crate::questions::generator::{GeneratedQuestions, QuestionGenerator};

    #[derive(Default)]
    struct FakeStore {
        fail: bool,
        saves: AtomicUsize,
    }

    #[async_trait]
    impl AssessmentStore for FakeStore {
        async fn save(&self, _assessment: &NewAssessment) -> Result<SavedAssessmentRow, StoreError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(SavedAssessmentRow {
                id: Uuid::nil(),
                created_at: Utc::now(),
            })
        }

        async fn stats(&self) -> Result<AssessmentStats, StoreError> {
            if self.fail {
                return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(AssessmentStats {
                overall: OverallStats {
                    total: 2,
                    average_score: 40.0,
                    min_score: 20,
                    max_score: 60,
                },
                by_level: Vec::new(),
            })
        }
    }

    struct FailingQuestions;

    #[async_trait]
    impl QuestionGenerator for FailingQuestions {
        async fn generate(
            &self,
            _profile: &Profile,
            _language: Language,
        ) -> Result<GeneratedQuestions, LlmError> {
            Err(LlmError::Api {
                status: 529,
                message: "overloaded".to_string(),
            })
        }
    }

    struct KindNarrative;

    #[async_trait]
    impl NarrativeGenerator for KindNarrative {
        async fn analyze(
            &self,
            request: &NarrativeRequest<'_>,
        ) -> Result<NarrativeAnalysis, LlmError> {
            Ok(NarrativeAnalysis {
                personalized_feedback: Some(format!("Score {} noted.", request.baseline.score)),
                ..NarrativeAnalysis::default()
            })
        }
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        let request = match body {
            Some(body) => request.body(Body::from(body.to_string())).unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn with_store(store: Arc<FakeStore>) -> AppState {
        AppState {
            store: Some(store),
            ..AppState::default()
        }
    }

    #[tokio::test]
    async fn test_health_reports_integrations() {
        let (status, body) = send(build_router(AppState::default()), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["integrations"]["store"], false);
    }

    #[tokio::test]
    async fn test_get_questions_returns_bank() {
        let (status, body) = send(
            build_router(AppState::default()),
            "GET",
            "/api/v1/questions?language=ar",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"].as_array().unwrap().len(), 15);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["language"], "ar");
        assert_eq!(body["questions"][0]["options"][0]["text"], "أبداً");
    }

    #[tokio::test]
    async fn test_get_questions_defaults_to_french_text() {
        let (status, body) = send(
            build_router(AppState::default()),
            "GET",
            "/api/v1/questions",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "fr");
        assert_eq!(body["questions"][0]["options"][3]["text"], "Presque tous les jours");
        assert_eq!(
            body["questions"][9]["text"],
            "À quelle fréquence vous sentez-vous dépassé par les responsabilités quotidiennes ?"
        );
    }

    #[tokio::test]
    async fn test_generate_questions_falls_back_on_generator_error() {
        let state = AppState {
            question_generator: Some(Arc::new(FailingQuestions)),
            ..AppState::default()
        };
        let (status, body) = send(
            build_router(state),
            "POST",
            "/api/v1/questions/generate",
            Some(json!({"userInfo": {"name": "Sara", "age": 29}, "language": "en"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "fallback");
        assert_eq!(body["context"], "Using default assessment questions");
    }

    #[tokio::test]
    async fn test_submit_scores_and_saves() {
        let store = Arc::new(FakeStore::default());
        let (status, body) = send(
            build_router(with_store(store.clone())),
            "POST",
            "/api/v1/assessments",
            Some(json!({
                "answers": [2, 2, 2, 2],
                "profile": {"supportSystem": "none", "stressLevel": "high"}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["score"], 50);
        assert_eq!(body["result"]["level"], "Moderate");
        assert_eq!(body["result"]["aiPowered"], false);
        assert!(!body["result"]["riskFactors"].as_array().unwrap().is_empty());
        assert_eq!(body["record"]["id"], Uuid::nil().to_string());
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_with_null_answer_is_rejected_before_saving() {
        let store = Arc::new(FakeStore::default());
        let (status, body) = send(
            build_router(with_store(store.clone())),
            "POST",
            "/api/v1/assessments",
            Some(json!({"answers": [1, null, 3]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_with_out_of_range_value_is_rejected() {
        let store = Arc::new(FakeStore::default());
        let (status, _) = send(
            build_router(with_store(store.clone())),
            "POST",
            "/api/v1/assessments",
            Some(json!({"answers": [0, 5]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_survives_store_failure() {
        let store = Arc::new(FakeStore {
            fail: true,
            ..FakeStore::default()
        });
        let (status, body) = send(
            build_router(with_store(store.clone())),
            "POST",
            "/api/v1/assessments",
            Some(json!({"answers": [4, 4, 4, 4]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["level"], "Severe");
        assert_eq!(body["record"], Value::Null);
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_submit_overlays_client_analysis_without_rescoring() {
        let (status, body) = send(
            build_router(AppState::default()),
            "POST",
            "/api/v1/assessments",
            Some(json!({
                "answers": [0, 0, 0, 0],
                "aiAnalysis": {"score": 90, "level": "Severe", "description": "Calm and steady."}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["score"], 0);
        assert_eq!(body["result"]["level"], "Low");
        assert_eq!(body["result"]["description"], "Calm and steady.");
        assert_eq!(body["result"]["aiPowered"], true);
        assert_eq!(body["record"], Value::Null);
    }

    #[tokio::test]
    async fn test_analyze_without_generator_returns_deterministic_result() {
        let (status, body) = send(
            build_router(AppState::default()),
            "POST",
            "/api/v1/assessments/analyze",
            Some(json!({"answers": [3, 3, 3, 3]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["aiPowered"], false);
        assert!(body.get("analysis").is_none());
        assert_eq!(body["result"]["score"], 75);
        assert_eq!(body["result"]["level"], "High");
    }

    #[tokio::test]
    async fn test_analyze_with_generator_enriches_result() {
        let state = AppState {
            narrative_generator: Some(Arc::new(KindNarrative)),
            ..AppState::default()
        };
        let (status, body) = send(
            build_router(state),
            "POST",
            "/api/v1/assessments/analyze",
            Some(json!({"answers": [1, 1, 1, 1], "language": "fr"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["aiPowered"], true);
        assert_eq!(body["analysis"]["personalizedFeedback"], "Score 25 noted.");
        assert_eq!(body["result"]["personalizedFeedback"], "Score 25 noted.");
        assert_eq!(body["result"]["level"], "Low");
    }

    #[tokio::test]
    async fn test_stats_without_store_are_zeroed() {
        let (status, body) = send(build_router(AppState::default()), "GET", "/api/v1/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall"]["total"], 0);
        assert_eq!(body["byLevel"], json!([]));
    }

    #[tokio::test]
    async fn test_stats_from_store() {
        let store = Arc::new(FakeStore::default());
        let (status, body) = send(build_router(with_store(store)), "GET", "/api/v1/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["overall"]["total"], 2);
        assert_eq!(body["overall"]["maxScore"], 60);
    }

    #[tokio::test]
    async fn test_stats_store_failure_is_a_database_error() {
        let store = Arc::new(FakeStore {
            fail: true,
            ..FakeStore::default()
        });
        let (status, body) = send(build_router(with_store(store)), "GET", "/api/v1/stats", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_translations_for_supported_and_unknown_languages() {
        let (status, body) = send(
            build_router(AppState::default()),
            "GET",
            "/api/v1/i18n/ar",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "ar");
        assert!(body["messages"].is_object());

        let (status, body) = send(
            build_router(AppState::default()),
            "GET",
            "/api/v1/i18n/xx",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
