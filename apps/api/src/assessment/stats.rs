//! Aggregate statistics over stored assessments.

use serde::Serialize;
use tracing::warn;

use crate::assessment::store::{AssessmentStore, StoreError};
use crate::models::assessment::{LevelStatsRow, OverallStatsRow};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total: i64,
    pub average_score: f64,
    pub min_score: i32,
    pub max_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    pub level: String,
    pub count: i64,
    pub average_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStats {
    pub overall: OverallStats,
    pub by_level: Vec<LevelStats>,
}

impl AssessmentStats {
    /// All-zero statistics, reported when nothing is stored.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Aggregates from query rows. NULL aggregates (empty table) become 0 and
    /// levels are ordered by average score, highest first.
    pub fn from_rows(overall: OverallStatsRow, by_level: Vec<LevelStatsRow>) -> Self {
        let mut by_level: Vec<LevelStats> = by_level
            .into_iter()
            .map(|row| LevelStats {
                level: row.level,
                count: row.count,
                average_score: row.average_score.unwrap_or(0.0),
            })
            .collect();
        by_level.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));

        Self {
            overall: OverallStats {
                total: overall.total,
                average_score: overall.average_score.unwrap_or(0.0),
                min_score: overall.min_score.unwrap_or(0),
                max_score: overall.max_score.unwrap_or(0),
            },
            by_level,
        }
    }
}

/// Statistics from the store, or zeroed statistics when none is configured.
pub async fn load_stats(
    store: Option<&dyn AssessmentStore>,
) -> Result<AssessmentStats, StoreError> {
    match store {
        Some(store) => store.stats().await,
        None => {
            warn!("Assessment store not configured, returning empty statistics");
            Ok(AssessmentStats::empty())
        }
    }
}
