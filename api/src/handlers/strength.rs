//! Password strength analysis handler

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::ApiResult;
use passguard_core::breach::validate_password;
use passguard_core::domain::PasswordCheckRequest;
use passguard_core::strength::{self, StrengthReport};

/// Score a password locally; nothing is sent to remote services
pub async fn analyze_password(
    payload: Result<Json<PasswordCheckRequest>, JsonRejection>,
) -> ApiResult<Json<StrengthReport>> {
    let Json(req) = payload?;
    validate_password(&req.password)?;
    Ok(Json(strength::analyze(&req.password)))
}
