//! Tax calculation endpoints.

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection, rejection::JsonRejection},
};
use rust_decimal::Decimal;
use tax_core::calculations::{TaxInput, check_amount};
use tax_data::{BatchTaxReport, compute_batch, csv_loader};
use tracing::debug;

use super::dto::{CalculationRequest, CalculationResponse};
use crate::AppState;
use crate::error::{ApiError, ApiResult};

/// Multipart field carrying the CSV document.
pub const CSV_FIELD: &str = "taxes.csv";

/// Rejects unknown allowance types and any amount outside `0..=MAX_AMOUNT`.
fn to_input(request: CalculationRequest) -> ApiResult<TaxInput> {
    let total_income = check_amount("totalIncome", request.total_income)?;
    let wht = check_amount("wht", request.wht)?;

    let mut input = TaxInput::new(total_income, wht);
    for allowance in &request.allowances {
        let amount = check_amount("amount", allowance.amount)?;
        input.claim(&allowance.allowance_type, amount)?;
    }
    Ok(input)
}

/// POST /tax/calculations
pub async fn calculate_tax(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> ApiResult<Json<CalculationResponse>> {
    let Json(request) = payload?;
    let input = to_input(request)?;

    let limits = state.repo.get_deduction_limits().await?;
    let result = state.calculator.compute(&input, &limits)?;
    debug!(
        total_income = %input.total_income,
        net_tax = %result.net_tax,
        "calculated tax"
    );

    Ok(Json(CalculationResponse::from(result)))
}

/// POST /tax/calculations/upload-csv
///
/// The whole upload fails on the first bad row; no partial report is sent.
pub async fn calculate_tax_csv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<BatchTaxReport>> {
    let mut multipart = multipart?;

    let mut contents = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() == Some(CSV_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(e.body_text()))?;
            contents = Some(bytes);
            break;
        }
    }

    let contents = contents
        .ok_or_else(|| ApiError::BadRequest(format!("missing multipart field '{CSV_FIELD}'")))?;
    let records = csv_loader::parse(&contents[..])?;

    let limits = state.repo.get_deduction_limits().await?;
    let report = compute_batch(&records, &state.calculator, &limits)?;
    debug!(rows = report.taxes.len(), "calculated tax batch from upload");

    Ok(Json(report))
}
