use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Creates a lazily connecting PostgreSQL pool.
///
/// No connection is opened here; an unreachable database surfaces on first use,
/// where the store path degrades instead of stopping the service.
pub fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(database_url)?;

    info!("PostgreSQL pool configured (max {max_connections} connections)");
    Ok(pool)
}

/// Creates the `assessments` table and its indexes if missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS assessments (
            id                 UUID PRIMARY KEY,
            user_name          VARCHAR(255),
            age_range          VARCHAR(50),
            gender             VARCHAR(50),
            occupation         VARCHAR(255),
            location           VARCHAR(255),
            previous_therapy   VARCHAR(50),
            current_medication VARCHAR(50),
            support_system     VARCHAR(50),
            stress_level       VARCHAR(50),
            score              INTEGER NOT NULL,
            level              VARCHAR(50) NOT NULL,
            answers            JSONB NOT NULL,
            report             JSONB NOT NULL,
            ai_powered         BOOLEAN NOT NULL DEFAULT FALSE,
            language           VARCHAR(8) NOT NULL,
            created_at         TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // One statement per query: the extended protocol rejects multi-statement strings.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_assessments_created_at ON assessments(created_at)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_assessments_level ON assessments(level)")
        .execute(pool)
        .await?;

    info!("Assessment schema ready");
    Ok(())
}
