//! Progressive income-tax calculation.
//!
//! The bracket table lives in [`schedule`]. Allowance capping, amount bounds
//! and the bracket walk live in [`calculator`].

pub mod calculator;
pub mod schedule;

pub use calculator::{
    CalculationError, MAX_AMOUNT, TaxCalculator, TaxInput, TaxLevelAmount, TaxOutcome, TaxResult, check_amount,
};
pub use schedule::standard_brackets;
