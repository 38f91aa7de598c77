mod allowance;
mod deduction_limits;
mod tax_bracket;

pub use allowance::{Allowance, AllowanceType};
pub use deduction_limits::{
    DONATION_CAP, DeductionLimitError, DeductionLimits, K_RECEIPT_CAP_CEILING,
    PERSONAL_DEDUCTION_CEILING, PERSONAL_DEDUCTION_FLOOR, validate_k_receipt_cap,
    validate_personal_deduction,
};
pub use tax_bracket::TaxBracket;
