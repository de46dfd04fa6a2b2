//! Assessment Store: optional persistence behind a trait seam.
//!
//! Rows are insert-only. `AppState` holds an `Option<Arc<dyn AssessmentStore>>`;
//! when it is absent nothing is saved and statistics are zeroed.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::analysis::report::AssessmentReport;
use crate::assessment::stats::AssessmentStats;
use crate::i18n::Language;
use crate::models::assessment::{LevelStatsRow, OverallStatsRow, SavedAssessmentRow};
use crate::models::profile::{present, Profile};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Everything persisted for one submission.
#[derive(Debug, Clone)]
pub struct NewAssessment {
    pub profile: Profile,
    pub answers: Vec<u8>,
    pub report: AssessmentReport,
    pub language: Language,
}

#[async_trait]
pub trait AssessmentStore: Send + Sync {
    async fn save(&self, assessment: &NewAssessment) -> Result<SavedAssessmentRow, StoreError>;
    async fn stats(&self) -> Result<AssessmentStats, StoreError>;
}

pub struct PgAssessmentStore {
    pool: PgPool,
}

impl PgAssessmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentStore for PgAssessmentStore {
    async fn save(&self, assessment: &NewAssessment) -> Result<SavedAssessmentRow, StoreError> {
        let NewAssessment {
            profile,
            answers,
            report,
            language,
        } = assessment;

        let row: SavedAssessmentRow = sqlx::query_as(
            r#"
            INSERT INTO assessments
                (id, user_name, age_range, gender, occupation, location,
                 previous_therapy, current_medication, support_system, stress_level,
                 score, level, answers, report, ai_powered, language)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(present(&profile.name))
        .bind(present(&profile.age))
        .bind(present(&profile.gender))
        .bind(present(&profile.occupation))
        .bind(present(&profile.location))
        .bind(present(&profile.previous_therapy))
        .bind(present(&profile.current_medication))
        .bind(present(&profile.support_system))
        .bind(present(&profile.stress_level))
        .bind(report.result.score as i32)
        .bind(report.result.level.as_str())
        .bind(Json(answers))
        .bind(Json(report))
        .bind(report.ai_powered)
        .bind(language.code())
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Assessment {} saved (score {}, level {})",
            row.id,
            report.result.score,
            report.result.level.as_str()
        );
        Ok(row)
    }

    async fn stats(&self) -> Result<AssessmentStats, StoreError> {
        let overall: OverallStatsRow = sqlx::query_as(
            r#"
            SELECT COUNT(*) AS total,
                   AVG(score)::float8 AS average_score,
                   MIN(score) AS min_score,
                   MAX(score) AS max_score
            FROM assessments
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let by_level: Vec<LevelStatsRow> = sqlx::query_as(
            r#"
            SELECT level,
                   COUNT(*) AS count,
                   AVG(score)::float8 AS average_score
            FROM assessments
            GROUP BY level
            ORDER BY average_score DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(AssessmentStats::from_rows(overall, by_level))
    }
}
