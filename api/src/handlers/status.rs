//! Status-check handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;
use passguard_core::domain::{StatusCheck, StatusCheckCreate};
use passguard_core::store;

/// Record a new status check
pub async fn create_status_check(
    State(state): State<AppState>,
    payload: Result<Json<StatusCheckCreate>, JsonRejection>,
) -> ApiResult<Json<StatusCheck>> {
    let Json(req) = payload?;
    let check = store::record_status_check(state.store.as_ref(), req.client_name).await?;

    info!(id = %check.id, "Recorded status check");
    Ok(Json(check))
}

/// List stored status checks
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StatusCheck>>> {
    let checks = store::list_status_checks(state.store.as_ref()).await?;
    Ok(Json(checks))
}
