//! Admin endpoints for adjusting deduction limits. Mounted behind
//! [`super::auth::admin_auth`].

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tax_core::{validate_k_receipt_cap, validate_personal_deduction};
use tracing::info;

use super::dto::{AmountRequest, KReceiptResponse, PersonalDeductionResponse};
use crate::AppState;
use crate::error::ApiResult;

/// POST /admin/deductions/personal
pub async fn set_personal_deduction(
    State(state): State<AppState>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> ApiResult<Json<PersonalDeductionResponse>> {
    let Json(request) = payload?;
    let amount = validate_personal_deduction(request.amount)?;

    let stored = state.repo.update_personal_deduction(amount).await?;
    info!(personal_deduction = %stored, "personal deduction changed");

    Ok(Json(PersonalDeductionResponse {
        personal_deduction: stored,
    }))
}

/// POST /admin/deductions/k-receipt
pub async fn set_k_receipt_cap(
    State(state): State<AppState>,
    payload: Result<Json<AmountRequest>, JsonRejection>,
) -> ApiResult<Json<KReceiptResponse>> {
    let Json(request) = payload?;
    let amount = validate_k_receipt_cap(request.amount)?;

    let stored = state.repo.update_k_receipt_cap(amount).await?;
    info!(k_receipt = %stored, "k-receipt cap changed");

    Ok(Json(KReceiptResponse { k_receipt: stored }))
}
