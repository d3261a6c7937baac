//! PostgreSQL document store
//!
//! Records are kept as JSONB documents in a single `status_checks` table.
//! The table imposes no ordering on reads.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool};
use sqlx::types::Json;
use sqlx::Row;
use std::str::FromStr;
use tracing::{info, warn};

use crate::domain::StatusCheck;
use crate::error::Result;
use crate::store::StatusStore;

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS status_checks (
    seq BIGSERIAL PRIMARY KEY,
    doc JSONB NOT NULL
)
"#;

/// Status-check store backed by PostgreSQL
pub struct PostgresStatusStore {
    pool: PgPool,
}

impl PostgresStatusStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url`, optionally overriding its database name
    pub async fn connect(database_url: &str, db_name: Option<&str>) -> Result<Self> {
        let mut options = PgConnectOptions::from_str(database_url)?;
        if let Some(name) = db_name {
            options = options.database(name);
        }

        let pool = PgPool::connect_with(options).await?;
        let store = Self::new(pool);
        store.ensure_schema().await?;

        info!("Connected to status-check store");
        Ok(store)
    }

    /// Create the backing table if missing
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl StatusStore for PostgresStatusStore {
    async fn insert(&self, check: &StatusCheck) -> Result<()> {
        sqlx::query("INSERT INTO status_checks (doc) VALUES ($1)")
            .bind(Json(check.to_document()))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>> {
        let rows = sqlx::query("SELECT doc FROM status_checks LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        let mut checks = Vec::with_capacity(rows.len());
        for row in rows {
            let Json(doc): Json<serde_json::Value> = row.try_get("doc")?;
            match StatusCheck::from_document(doc) {
                Ok(check) => checks.push(check),
                Err(e) => warn!("Skipping unreadable status check document: {}", e),
            }
        }

        Ok(checks)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("Status-check store closed");
    }
}
