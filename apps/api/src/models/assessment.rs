use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Identity assigned to a stored assessment by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedAssessmentRow {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct OverallStatsRow {
    pub total: i64,
    pub average_score: Option<f64>,
    pub min_score: Option<i32>,
    pub max_score: Option<i32>,
}

#[derive(Debug, Clone, FromRow)]
pub struct LevelStatsRow {
    pub level: String,
    pub count: i64,
    pub average_score: Option<f64>,
}
