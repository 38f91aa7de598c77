//! JSON request and response bodies.
//!
//! Field names are camelCase on the wire and amounts are plain JSON numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tax_core::calculations::{TaxLevelAmount, TaxOutcome, TaxResult};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceRequest {
    pub allowance_type: String,
    pub amount: Decimal,
}

/// Body of `POST /tax/calculations`. `wht` and `allowances` may be omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub total_income: Decimal,
    #[serde(default)]
    pub wht: Decimal,
    #[serde(default)]
    pub allowances: Vec<AllowanceRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxLevelResponse {
    pub level: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

impl From<TaxLevelAmount> for TaxLevelResponse {
    fn from(level: TaxLevelAmount) -> Self {
        Self {
            level: level.level,
            tax: level.tax,
        }
    }
}

/// Exactly one of `tax` / `tax_refund` is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    #[serde(with = "rust_decimal::serde::float_option", skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float_option", skip_serializing_if = "Option::is_none")]
    pub tax_refund: Option<Decimal>,
    pub tax_level: Vec<TaxLevelResponse>,
}

impl From<TaxResult> for CalculationResponse {
    fn from(result: TaxResult) -> Self {
        let (tax, tax_refund) = match result.outcome() {
            TaxOutcome::Due(amount) => (Some(amount), None),
            TaxOutcome::Refund(amount) => (None, Some(amount)),
        };
        Self {
            tax,
            tax_refund,
            tax_level: result.levels.into_iter().map(TaxLevelResponse::from).collect(),
        }
    }
}

/// Body of both admin update endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AmountRequest {
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDeductionResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub personal_deduction: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KReceiptResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub k_receipt: Decimal,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn result(net_tax: Decimal) -> TaxResult {
        TaxResult {
            taxable_income: dec!(0),
            total_tax: dec!(0),
            net_tax,
            levels: vec![TaxLevelAmount {
                level: "0 - 150,000".to_string(),
                tax: dec!(0),
            }],
        }
    }

    #[test]
    fn request_defaults_wht_and_allowances() {
        let request: CalculationRequest =
            serde_json::from_value(json!({"totalIncome": 500000.0})).expect("should parse");

        assert_eq!(request.total_income, dec!(500000));
        assert_eq!(request.wht, dec!(0));
        assert!(request.allowances.is_empty());
    }

    #[test]
    fn request_reads_camel_case_allowances() {
        let request: CalculationRequest = serde_json::from_value(json!({
            "totalIncome": 500000.0,
            "wht": 25000.5,
            "allowances": [{"allowanceType": "donation", "amount": 200000}]
        }))
        .expect("should parse");

        assert_eq!(request.wht, dec!(25000.5));
        assert_eq!(request.allowances[0].allowance_type, "donation");
        assert_eq!(request.allowances[0].amount, dec!(200000));
    }

    #[test]
    fn request_without_income_is_rejected() {
        let parsed = serde_json::from_value::<CalculationRequest>(json!({"wht": 0}));
        assert!(parsed.is_err());
    }

    #[test]
    fn due_response_omits_refund() {
        let response = CalculationResponse::from(result(dec!(29000)));

        assert_eq!(
            serde_json::to_value(&response).expect("should serialize"),
            json!({"tax": 29000.0, "taxLevel": [{"level": "0 - 150,000", "tax": 0.0}]})
        );
    }

    #[test]
    fn refund_response_omits_tax() {
        let response = CalculationResponse::from(result(dec!(-1000)));

        assert_eq!(response.tax, None);
        assert_eq!(response.tax_refund, Some(dec!(1000)));
        let json = serde_json::to_value(&response).expect("should serialize");
        assert_eq!(json["taxRefund"], json!(1000.0));
        assert!(json.get("tax").is_none());
    }

    #[test]
    fn admin_responses_use_wire_names() {
        let personal = PersonalDeductionResponse {
            personal_deduction: dec!(70000),
        };
        let k_receipt = KReceiptResponse {
            k_receipt: dec!(30000),
        };

        assert_eq!(
            serde_json::to_value(&personal).expect("should serialize"),
            json!({"personalDeduction": 70000.0})
        );
        assert_eq!(
            serde_json::to_value(&k_receipt).expect("should serialize"),
            json!({"kReceipt": 30000.0})
        );
    }
}
