use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::AllowanceType;

/// Fixed ceiling for the donation allowance.
pub const DONATION_CAP: Decimal = dec!(100000);

/// Exclusive lower bound for an admin-set personal deduction.
pub const PERSONAL_DEDUCTION_FLOOR: Decimal = dec!(10000);

/// Inclusive upper bound for an admin-set personal deduction.
pub const PERSONAL_DEDUCTION_CEILING: Decimal = dec!(100000);

/// Inclusive upper bound for an admin-set k-receipt cap.
pub const K_RECEIPT_CAP_CEILING: Decimal = dec!(100000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeductionLimitError {
    #[error("personal deduction must be greater than {min} and at most {max}, got {value}")]
    PersonalOutOfRange {
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("k-receipt deduction must be greater than {min} and at most {max}, got {value}")]
    KReceiptOutOfRange {
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },
}

/// The admin-adjustable deduction settings in force for a calculation.
///
/// Owned by the persistence layer and handed to every calculation by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLimits {
    /// Personal deduction applied when none is claimed; also its cap.
    pub personal_deduction: Decimal,
    pub k_receipt_cap: Decimal,
}

impl DeductionLimits {
    pub fn new(
        personal_deduction: Decimal,
        k_receipt_cap: Decimal,
    ) -> Self {
        Self {
            personal_deduction,
            k_receipt_cap,
        }
    }

    /// Cap for the given category. Never negative.
    pub fn cap_for(
        &self,
        allowance_type: AllowanceType,
    ) -> Decimal {
        let cap = match allowance_type {
            AllowanceType::Personal => self.personal_deduction,
            AllowanceType::Donation => DONATION_CAP,
            AllowanceType::KReceipt => self.k_receipt_cap,
        };
        cap.max(Decimal::ZERO)
    }

    /// Effective deduction for a claim: `min(claimed, cap)`, floored at zero.
    pub fn effective(
        &self,
        allowance_type: AllowanceType,
        claimed: Decimal,
    ) -> Decimal {
        claimed.min(self.cap_for(allowance_type)).max(Decimal::ZERO)
    }
}

impl Default for DeductionLimits {
    fn default() -> Self {
        Self {
            personal_deduction: dec!(60000),
            k_receipt_cap: dec!(50000),
        }
    }
}

/// Checks a new personal deduction against `(10,000, 100,000]`.
pub fn validate_personal_deduction(value: Decimal) -> Result<Decimal, DeductionLimitError> {
    if value > PERSONAL_DEDUCTION_FLOOR && value <= PERSONAL_DEDUCTION_CEILING {
        Ok(value)
    } else {
        Err(DeductionLimitError::PersonalOutOfRange {
            value,
            min: PERSONAL_DEDUCTION_FLOOR,
            max: PERSONAL_DEDUCTION_CEILING,
        })
    }
}

/// Checks a new k-receipt cap against `(0, 100,000]`.
pub fn validate_k_receipt_cap(value: Decimal) -> Result<Decimal, DeductionLimitError> {
    if value > Decimal::ZERO && value <= K_RECEIPT_CAP_CEILING {
        Ok(value)
    } else {
        Err(DeductionLimitError::KReceiptOutOfRange {
            value,
            min: Decimal::ZERO,
            max: K_RECEIPT_CAP_CEILING,
        })
    }
}
