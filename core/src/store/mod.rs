//! Status-check persistence

use async_trait::async_trait;

use crate::domain::StatusCheck;
use crate::error::Result;

pub mod postgres;

pub use postgres::PostgresStatusStore;

/// Upper bound on records returned by a single listing
pub const LIST_LIMIT: i64 = 1000;

/// Append-only document store for status checks
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Persist a record
    async fn insert(&self, check: &StatusCheck) -> Result<()>;

    /// Fetch up to `limit` records in store order
    async fn list(&self, limit: i64) -> Result<Vec<StatusCheck>>;

    /// Release the underlying connections
    async fn close(&self) {}
}

/// Create, persist and return a new status check
pub async fn record_status_check(
    store: &dyn StatusStore,
    client_name: impl Into<String>,
) -> Result<StatusCheck> {
    let check = StatusCheck::new(client_name);
    store.insert(&check).await?;
    Ok(check)
}

/// List stored status checks, capped at [`LIST_LIMIT`]
pub async fn list_status_checks(store: &dyn StatusStore) -> Result<Vec<StatusCheck>> {
    store.list(LIST_LIMIT).await
}
