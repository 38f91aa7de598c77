//! Batch computation over parsed CSV records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax_core::calculations::TaxOutcome;
use tax_core::{DeductionLimits, TaxCalculator};

use crate::csv_loader::{CsvBatchError, CsvTaxRecord};

/// Result for one CSV row. Exactly one of `tax` / `tax_refund` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchTaxResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,

    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub tax: Option<Decimal>,

    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub tax_refund: Option<Decimal>,
}

impl BatchTaxResult {
    pub fn new(
        total_income: Decimal,
        outcome: TaxOutcome,
    ) -> Self {
        let (tax, tax_refund) = match outcome {
            TaxOutcome::Due(amount) => (Some(amount), None),
            TaxOutcome::Refund(amount) => (None, Some(amount)),
        };
        Self {
            total_income,
            tax,
            tax_refund,
        }
    }
}

/// The `{"taxes": [...]}` document returned for a batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchTaxReport {
    pub taxes: Vec<BatchTaxResult>,
}

/// Computes every record independently under the same limits, keeping
/// input order.
///
/// # Errors
///
/// [`CsvBatchError::Calculation`] for the first record the calculator
/// refuses, with its 1-based row. No partial report is returned.
pub fn compute_batch(
    records: &[CsvTaxRecord],
    calculator: &TaxCalculator,
    limits: &DeductionLimits,
) -> Result<BatchTaxReport, CsvBatchError> {
    let taxes = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            calculator
                .compute(&record.to_input(), limits)
                .map(|result| BatchTaxResult::new(record.total_income, result.outcome()))
                .map_err(|source| CsvBatchError::Calculation { row: idx + 1, source })
        })
        .collect::<Result<Vec<_>, CsvBatchError>>()?;

    tracing::debug!(rows = taxes.len(), "computed tax batch");
    Ok(BatchTaxReport { taxes })
}
