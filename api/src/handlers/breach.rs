//! Password breach check handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::error::ApiResult;
use crate::state::AppState;
use passguard_core::domain::{PasswordCheckRequest, PasswordCheckResponse};

/// Check a password against the breach corpus via k-anonymity range lookup
pub async fn check_password_breach(
    State(state): State<AppState>,
    payload: Result<Json<PasswordCheckRequest>, JsonRejection>,
) -> ApiResult<Json<PasswordCheckResponse>> {
    let Json(req) = payload?;
    let outcome = state.breach_checker.check(&req.password).await?;
    Ok(Json(outcome.into_response()))
}
