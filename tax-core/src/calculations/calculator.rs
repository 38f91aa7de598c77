//! Bracket-based income-tax calculation.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Cap every allowance claim at its category limit |
//! | 2    | Taxable income = total income - sum of effective allowances |
//! | 3    | Walk the brackets in ascending order, taxing up to each bracket's width |
//! | 4    | Net tax = sum of bracket taxes - withholding (negative means refund) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::{TaxCalculator, TaxInput, TaxOutcome};
//! use tax_core::DeductionLimits;
//!
//! let calculator = TaxCalculator::new();
//! let input = TaxInput::new(dec!(500000), dec!(25000));
//!
//! let result = calculator.compute(&input, &DeductionLimits::default())?;
//!
//! assert_eq!(result.total_tax, dec!(29000));
//! assert_eq!(result.outcome(), TaxOutcome::Due(dec!(4000)));
//! # Ok::<(), tax_core::CalculationError>(())
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::schedule::standard_brackets;
use crate::{AllowanceType, DeductionLimits, TaxBracket};

/// Largest amount accepted for income, withholding or a claim.
///
/// Keeps every intermediate of the bracket walk well inside `Decimal` range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Errors raised while assembling or running a calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("unknown allowance type: {0}")]
    UnknownAllowanceType(String),

    #[error("{field} must be between 0 and {max}, got {value}")]
    AmountOutOfRange {
        field: String,
        value: Decimal,
        max: Decimal,
    },

    #[error("invalid bracket table: {0}")]
    InvalidBrackets(String),
}

/// Checks that `value` lies in `0..=MAX_AMOUNT`. Negative zero is accepted.
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::{MAX_AMOUNT, check_amount};
///
/// assert_eq!(check_amount("wht", dec!(25000)), Ok(dec!(25000)));
/// assert!(check_amount("wht", dec!(-1)).is_err());
/// assert!(check_amount("wht", MAX_AMOUNT + dec!(0.01)).is_err());
/// ```
pub fn check_amount(
    field: &str,
    value: Decimal,
) -> Result<Decimal, CalculationError> {
    if value < Decimal::ZERO || value > MAX_AMOUNT {
        return Err(CalculationError::AmountOutOfRange {
            field: field.to_string(),
            value,
            max: MAX_AMOUNT,
        });
    }
    Ok(value)
}

/// What the taxpayer declares.
///
/// Allowances are keyed by category; claiming the same category twice keeps
/// the later amount.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxInput {
    pub total_income: Decimal,
    pub withholding: Decimal,
    pub allowances: BTreeMap<AllowanceType, Decimal>,
}

impl TaxInput {
    pub fn new(
        total_income: Decimal,
        withholding: Decimal,
    ) -> Self {
        Self {
            total_income,
            withholding,
            allowances: BTreeMap::new(),
        }
    }

    /// Builds an input from loosely typed `(tag, amount)` claims.
    ///
    /// # Errors
    ///
    /// [`CalculationError::UnknownAllowanceType`] for the first tag that is
    /// not one of `personal`, `donation`, `k-receipt`.
    pub fn from_claims<I, S>(
        total_income: Decimal,
        withholding: Decimal,
        claims: I,
    ) -> Result<Self, CalculationError>
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: AsRef<str>,
    {
        let mut input = Self::new(total_income, withholding);
        for (tag, amount) in claims {
            input.claim(tag.as_ref(), amount)?;
        }
        Ok(input)
    }

    pub fn with_allowance(
        mut self,
        allowance_type: AllowanceType,
        amount: Decimal,
    ) -> Self {
        self.allowances.insert(allowance_type, amount);
        self
    }

    /// Records a claim given by its wire tag.
    pub fn claim(
        &mut self,
        tag: &str,
        amount: Decimal,
    ) -> Result<(), CalculationError> {
        let allowance_type = AllowanceType::parse(tag)
            .ok_or_else(|| CalculationError::UnknownAllowanceType(tag.to_string()))?;
        self.allowances.insert(allowance_type, amount);
        Ok(())
    }

    pub fn claimed(
        &self,
        allowance_type: AllowanceType,
    ) -> Option<Decimal> {
        self.allowances.get(&allowance_type).copied()
    }

    /// Checks every amount with [`check_amount`]. Claims are named by tag.
    pub fn validate(&self) -> Result<(), CalculationError> {
        check_amount("totalIncome", self.total_income)?;
        check_amount("wht", self.withholding)?;
        for (allowance_type, amount) in &self.allowances {
            check_amount(allowance_type.as_str(), *amount)?;
        }
        Ok(())
    }
}

/// Tax attributed to a single bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLevelAmount {
    pub level: String,
    pub tax: Decimal,
}

/// Sign-aware view of a net tax figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxOutcome {
    /// Amount still owed. Zero counts as due.
    Due(Decimal),
    /// Amount to be returned to the taxpayer, as a positive number.
    Refund(Decimal),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Income left after effective allowances. May be negative.
    pub taxable_income: Decimal,

    /// Sum of the bracket taxes, before withholding.
    pub total_tax: Decimal,

    /// `total_tax - withholding`. Negative means a refund.
    pub net_tax: Decimal,

    /// One entry per bracket, in bracket order.
    pub levels: Vec<TaxLevelAmount>,
}

impl TaxResult {
    pub fn outcome(&self) -> TaxOutcome {
        if self.net_tax < Decimal::ZERO {
            TaxOutcome::Refund(-self.net_tax)
        } else {
            TaxOutcome::Due(self.net_tax)
        }
    }
}

/// Immutable calculator over a bracket table.
///
/// Holds no per-calculation state, so one instance can be shared across
/// threads and reused for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxCalculator {
    brackets: Vec<TaxBracket>,
}

impl TaxCalculator {
    /// Creates a calculator over [`standard_brackets`].
    pub fn new() -> Self {
        Self {
            brackets: standard_brackets(),
        }
    }

    /// Creates a calculator over a caller-supplied table.
    ///
    /// # Errors
    ///
    /// [`CalculationError::InvalidBrackets`] when the table is empty, not
    /// contiguous and ascending, has a bracket with no width, a rate outside
    /// 0..=100, or does not end in exactly one unbounded bracket.
    pub fn with_brackets(brackets: Vec<TaxBracket>) -> Result<Self, CalculationError> {
        validate_brackets(&brackets)?;
        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Computes the bracket-by-bracket and net tax for `input` under `limits`.
    ///
    /// # Errors
    ///
    /// [`CalculationError::AmountOutOfRange`] when an input amount is
    /// negative or above [`MAX_AMOUNT`]. Nothing is computed in that case.
    pub fn compute(
        &self,
        input: &TaxInput,
        limits: &DeductionLimits,
    ) -> Result<TaxResult, CalculationError> {
        input.validate()?;

        let deductions = self.total_allowances(input, limits);
        let taxable_income = self.taxable_income(input.total_income, deductions);
        let levels = self.bracket_taxes(taxable_income);
        let total_tax = levels.iter().map(|level| level.tax).sum::<Decimal>();
        let net_tax = total_tax - input.withholding;

        tracing::trace!(%taxable_income, %total_tax, %net_tax, "computed tax");

        Ok(TaxResult {
            taxable_income,
            total_tax,
            net_tax,
            levels,
        })
    }

    /// Sums the effective amount of every category.
    ///
    /// Personal is always present: an unclaimed personal allowance counts as
    /// the configured default.
    fn total_allowances(
        &self,
        input: &TaxInput,
        limits: &DeductionLimits,
    ) -> Decimal {
        AllowanceType::ALL
            .iter()
            .map(|&allowance_type| {
                let claimed = match (allowance_type, input.claimed(allowance_type)) {
                    (_, Some(amount)) => amount,
                    (AllowanceType::Personal, None) => limits.personal_deduction,
                    (_, None) => Decimal::ZERO,
                };
                // Limits are not range-checked here, so bound them like claims.
                limits.effective(allowance_type, claimed).min(MAX_AMOUNT)
            })
            .sum()
    }

    fn taxable_income(
        &self,
        total_income: Decimal,
        deductions: Decimal,
    ) -> Decimal {
        total_income - deductions
    }

    /// Consumes brackets strictly in order; every bracket yields an entry.
    fn bracket_taxes(
        &self,
        taxable_income: Decimal,
    ) -> Vec<TaxLevelAmount> {
        let mut remaining = taxable_income;

        self.brackets
            .iter()
            .map(|bracket| {
                let tax = if remaining > Decimal::ZERO {
                    let portion = match bracket.width() {
                        Some(width) => remaining.min(width),
                        None => remaining,
                    };
                    portion * bracket.tax_rate / dec!(100)
                } else {
                    Decimal::ZERO
                };

                // Step down by the bracket's width, not its upper bound.
                if let Some(width) = bracket.width() {
                    remaining -= width;
                }

                TaxLevelAmount {
                    level: bracket.label.clone(),
                    tax,
                }
            })
            .collect()
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), CalculationError> {
    let invalid = |msg: String| Err(CalculationError::InvalidBrackets(msg));

    let Some((last, rest)) = brackets.split_last() else {
        return invalid("no brackets provided".to_string());
    };
    if !last.is_unbounded() {
        return invalid(format!("last bracket '{}' must be unbounded", last.label));
    }

    for bracket in brackets {
        if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > dec!(100) {
            return invalid(format!(
                "bracket '{}' has rate {} outside 0..=100",
                bracket.label, bracket.tax_rate
            ));
        }
    }

    for bracket in rest {
        match bracket.width() {
            None => {
                return invalid(format!(
                    "bracket '{}' is unbounded but not last",
                    bracket.label
                ));
            }
            Some(width) if width <= Decimal::ZERO => {
                return invalid(format!("bracket '{}' has no width", bracket.label));
            }
            Some(_) => {}
        }
    }

    for pair in brackets.windows(2) {
        if pair[0].max_income != Some(pair[1].min_income) {
            return invalid(format!(
                "bracket '{}' does not start where '{}' ends",
                pair[1].label, pair[0].label
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn levels(amounts: [Decimal; 5]) -> Vec<TaxLevelAmount> {
        standard_brackets()
            .into_iter()
            .zip(amounts)
            .map(|(bracket, tax)| TaxLevelAmount {
                level: bracket.label,
                tax,
            })
            .collect()
    }

    fn compute(input: &TaxInput) -> TaxResult {
        TaxCalculator::new()
            .compute(input, &DeductionLimits::default())
            .expect("amounts in range")
    }

    // =========================================================================
    // reference scenarios
    // =========================================================================

    #[test]
    fn income_500k_owes_29000() {
        let result = compute(&TaxInput::new(dec!(500000), dec!(0)));

        assert_eq!(result.taxable_income, dec!(440000));
        assert_eq!(result.net_tax, dec!(29000));
        assert_eq!(result.levels, levels([dec!(0), dec!(29000), dec!(0), dec!(0), dec!(0)]));
    }

    #[test]
    fn withholding_is_subtracted_from_total() {
        let result = compute(&TaxInput::new(dec!(500000), dec!(25000)));

        assert_eq!(result.total_tax, dec!(29000));
        assert_eq!(result.net_tax, dec!(4000));
        assert_eq!(result.outcome(), TaxOutcome::Due(dec!(4000)));
    }

    #[test]
    fn donation_above_cap_is_truncated() {
        let input = TaxInput::new(dec!(500000), dec!(0)).with_allowance(AllowanceType::Donation, dec!(200000));

        let result = compute(&input);

        assert_eq!(result.net_tax, dec!(19000));
        assert_eq!(result.levels, levels([dec!(0), dec!(19000), dec!(0), dec!(0), dec!(0)]));
    }

    #[test]
    fn donation_and_k_receipt_are_capped_independently() {
        let input = TaxInput::new(dec!(500000), dec!(0))
            .with_allowance(AllowanceType::Donation, dec!(100000))
            .with_allowance(AllowanceType::KReceipt, dec!(200000));

        let result = compute(&input);

        assert_eq!(result.net_tax, dec!(14000));
    }

    #[test]
    fn high_income_spans_every_bracket() {
        let result = compute(&TaxInput::new(dec!(5000000), dec!(0)));

        assert_eq!(result.taxable_income, dec!(4940000));
        assert_eq!(
            result.levels,
            levels([dec!(0), dec!(35000), dec!(75000), dec!(200000), dec!(1029000)])
        );
        assert_eq!(result.net_tax, dec!(1339000));
    }

    #[test]
    fn low_income_with_withholding_is_a_refund() {
        let result = compute(&TaxInput::new(dec!(100000), dec!(1000)));

        assert_eq!(result.net_tax, dec!(-1000));
        assert_eq!(result.outcome(), TaxOutcome::Refund(dec!(1000)));
        assert_eq!(result.levels, levels([dec!(0); 5]));
    }

    #[test]
    fn partial_third_bracket() {
        // 600,000 - 60,000 personal - 20,000 donation
        let input = TaxInput::new(dec!(600000), dec!(40000)).with_allowance(AllowanceType::Donation, dec!(20000));

        let result = compute(&input);

        assert_eq!(result.levels, levels([dec!(0), dec!(35000), dec!(3000), dec!(0), dec!(0)]));
        assert_eq!(result.outcome(), TaxOutcome::Refund(dec!(2000)));
    }

    // =========================================================================
    // allowances
    // =========================================================================

    #[test]
    fn unclaimed_personal_uses_configured_default() {
        let limits = DeductionLimits::new(dec!(100000), dec!(50000));

        let result = TaxCalculator::new()
            .compute(&TaxInput::new(dec!(500000), dec!(0)), &limits)
            .expect("amounts in range");

        assert_eq!(result.taxable_income, dec!(400000));
        assert_eq!(result.net_tax, dec!(25000));
    }

    #[test]
    fn personal_claim_is_capped_at_default() {
        let input = TaxInput::new(dec!(500000), dec!(0)).with_allowance(AllowanceType::Personal, dec!(90000));

        let result = compute(&input);

        assert_eq!(result.taxable_income, dec!(440000));
    }

    #[test]
    fn smaller_personal_claim_is_used_as_is() {
        let input = TaxInput::new(dec!(500000), dec!(0)).with_allowance(AllowanceType::Personal, dec!(30000));

        let result = compute(&input);

        assert_eq!(result.taxable_income, dec!(470000));
    }

    #[test]
    fn k_receipt_follows_admin_cap() {
        let input = TaxInput::new(dec!(500000), dec!(0)).with_allowance(AllowanceType::KReceipt, dec!(80000));
        let limits = DeductionLimits::new(dec!(60000), dec!(70000));

        let result = TaxCalculator::new().compute(&input, &limits).expect("amounts in range");

        assert_eq!(result.taxable_income, dec!(370000));
    }

    #[test]
    fn repeated_claim_keeps_the_last_amount() {
        let input = TaxInput::from_claims(
            dec!(500000),
            dec!(0),
            [("donation", dec!(50000)), ("donation", dec!(10000))],
        )
        .unwrap();

        assert_eq!(input.claimed(AllowanceType::Donation), Some(dec!(10000)));
    }

    #[test]
    fn unknown_allowance_type_is_rejected() {
        let result = TaxInput::from_claims(dec!(500000), dec!(0), [("donation", dec!(1)), ("education", dec!(5))]);

        assert_eq!(result, Err(CalculationError::UnknownAllowanceType("education".to_string())));
    }

    // =========================================================================
    // properties
    // =========================================================================

    #[test]
    fn income_at_or_below_personal_deduction_never_owes() {
        let calculator = TaxCalculator::new();
        let limits = DeductionLimits::default();

        for income in [dec!(0), dec!(1), dec!(59999.99), dec!(60000)] {
            for withholding in [dec!(0), dec!(0.5), dec!(1000)] {
                let result = calculator
                    .compute(&TaxInput::new(income, withholding), &limits)
                    .expect("amounts in range");

                assert!(result.net_tax <= Decimal::ZERO, "income {income}");
                assert!(result.levels.iter().all(|level| level.tax == Decimal::ZERO));
            }
        }
    }

    #[test]
    fn net_tax_is_sum_of_levels_minus_withholding() {
        let calculator = TaxCalculator::new();
        let limits = DeductionLimits::default();

        for income in [dec!(210000), dec!(777777.77), dec!(1500000), dec!(3250000.5)] {
            let result = calculator
                .compute(&TaxInput::new(income, dec!(12345.67)), &limits)
                .expect("amounts in range");
            let sum: Decimal = result.levels.iter().map(|level| level.tax).sum();

            assert_eq!(result.total_tax, sum);
            assert_eq!(result.net_tax, sum - dec!(12345.67));
        }
    }

    #[test]
    fn every_bracket_is_reported_in_order() {
        let result = compute(&TaxInput::new(dec!(0), dec!(0)));
        let labels: Vec<_> = result.levels.iter().map(|level| level.level.as_str()).collect();

        assert_eq!(
            labels,
            vec![
                "0 - 150,000",
                "150,001 - 500,000",
                "500,001 - 1,000,000",
                "1,000,001 - 2,000,000",
                "2,000,001 ขึ้นไป",
            ]
        );
    }

    #[test]
    fn compute_is_idempotent() {
        let calculator = TaxCalculator::new();
        let input = TaxInput::new(dec!(2500000), dec!(100)).with_allowance(AllowanceType::KReceipt, dec!(5000));
        let limits = DeductionLimits::default();

        assert_eq!(calculator.compute(&input, &limits), calculator.compute(&input, &limits));
    }

    #[test]
    fn zero_net_tax_counts_as_due() {
        let result = compute(&TaxInput::new(dec!(500000), dec!(29000)));

        assert_eq!(result.outcome(), TaxOutcome::Due(dec!(0)));
    }

    // =========================================================================
    // fractional amounts
    // =========================================================================

    #[test]
    fn sub_cent_bracket_tax_is_kept_exact() {
        // 0.05 spills into the 10% bracket
        let result = compute(&TaxInput::new(dec!(210000.05), dec!(0)));

        assert_eq!(result.taxable_income, dec!(150000.05));
        assert_eq!(result.levels, levels([dec!(0), dec!(0.005), dec!(0), dec!(0), dec!(0)]));
        assert_eq!(result.total_tax, dec!(0.005));
    }

    #[test]
    fn fractional_bracket_tax_is_not_rounded() {
        let result = compute(&TaxInput::new(dec!(777777.77), dec!(0)));

        assert_eq!(
            result.levels,
            levels([dec!(0), dec!(35000), dec!(32666.6655), dec!(0), dec!(0)])
        );
        assert_eq!(result.net_tax, dec!(67666.6655));
    }

    // =========================================================================
    // amount bounds
    // =========================================================================

    #[test]
    fn income_at_ceiling_is_computed() {
        let result = compute(&TaxInput::new(MAX_AMOUNT, dec!(0)));

        assert_eq!(result.taxable_income, dec!(999999999940000));
        assert_eq!(
            result.levels,
            levels([dec!(0), dec!(35000), dec!(75000), dec!(200000), dec!(349999999279000)])
        );
        assert_eq!(result.net_tax, dec!(349999999589000));
    }

    #[test]
    fn income_above_ceiling_is_rejected() {
        let input = TaxInput::new(dec!(3000000000000000000000000000), dec!(0));

        let result = TaxCalculator::new().compute(&input, &DeductionLimits::default());

        assert_eq!(
            result,
            Err(CalculationError::AmountOutOfRange {
                field: "totalIncome".to_string(),
                value: dec!(3000000000000000000000000000),
                max: MAX_AMOUNT,
            })
        );
    }

    #[test]
    fn largest_decimal_income_is_rejected() {
        let input = TaxInput::new(Decimal::MAX, dec!(0));

        let result = TaxCalculator::new().compute(&input, &DeductionLimits::default());

        assert!(matches!(result, Err(CalculationError::AmountOutOfRange { .. })));
    }

    #[test]
    fn withholding_and_claims_are_bounded_too() {
        let calculator = TaxCalculator::new();
        let limits = DeductionLimits::default();
        let wht = TaxInput::new(dec!(500000), MAX_AMOUNT + dec!(1));
        let claim = TaxInput::new(dec!(500000), dec!(0)).with_allowance(AllowanceType::Donation, Decimal::MAX);

        match calculator.compute(&wht, &limits) {
            Err(CalculationError::AmountOutOfRange { field, .. }) => assert_eq!(field, "wht"),
            other => panic!("expected AmountOutOfRange, got {other:?}"),
        }
        match calculator.compute(&claim, &limits) {
            Err(CalculationError::AmountOutOfRange { field, .. }) => assert_eq!(field, "donation"),
            other => panic!("expected AmountOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn oversized_configured_limits_are_bounded() {
        let limits = DeductionLimits::new(Decimal::MAX, Decimal::MAX);
        let input = TaxInput::new(dec!(500000), dec!(0)).with_allowance(AllowanceType::KReceipt, MAX_AMOUNT);

        let result = TaxCalculator::new().compute(&input, &limits).expect("amounts in range");

        assert_eq!(result.taxable_income, dec!(-1999999999500000));
        assert_eq!(result.levels, levels([dec!(0); 5]));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let input = TaxInput::new(dec!(-1), dec!(0));

        let result = TaxCalculator::new().compute(&input, &DeductionLimits::default());

        assert!(matches!(result, Err(CalculationError::AmountOutOfRange { .. })));
    }

    #[test]
    fn negative_zero_amount_is_accepted() {
        assert_eq!(check_amount("wht", dec!(-0)), Ok(dec!(-0)));
    }

    // =========================================================================
    // custom bracket tables
    // =========================================================================

    #[test]
    fn custom_table_is_accepted_when_well_formed() {
        let calculator = TaxCalculator::with_brackets(vec![
            TaxBracket::new("low", dec!(0), Some(dec!(1000)), dec!(0)),
            TaxBracket::new("high", dec!(1000), None, dec!(50)),
        ])
        .unwrap();
        let limits = DeductionLimits::new(dec!(0), dec!(0));

        let result = calculator
            .compute(&TaxInput::new(dec!(3000), dec!(0)), &limits)
            .expect("amounts in range");

        assert_eq!(result.net_tax, dec!(1000));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            TaxCalculator::with_brackets(vec![]),
            Err(CalculationError::InvalidBrackets(_))
        ));
    }

    #[test]
    fn table_without_unbounded_top_is_rejected() {
        let result = TaxCalculator::with_brackets(vec![TaxBracket::new("a", dec!(0), Some(dec!(10)), dec!(5))]);

        assert!(matches!(result, Err(CalculationError::InvalidBrackets(_))));
    }

    #[test]
    fn table_with_gap_is_rejected() {
        let result = TaxCalculator::with_brackets(vec![
            TaxBracket::new("a", dec!(0), Some(dec!(10)), dec!(5)),
            TaxBracket::new("b", dec!(20), None, dec!(10)),
        ]);

        assert!(matches!(result, Err(CalculationError::InvalidBrackets(_))));
    }

    #[test]
    fn table_with_rate_above_100_is_rejected() {
        let result = TaxCalculator::with_brackets(vec![TaxBracket::new("a", dec!(0), None, dec!(100.5))]);

        assert!(matches!(result, Err(CalculationError::InvalidBrackets(_))));
    }

    #[test]
    fn table_with_unbounded_middle_is_rejected() {
        let result = TaxCalculator::with_brackets(vec![
            TaxBracket::new("a", dec!(0), None, dec!(5)),
            TaxBracket::new("b", dec!(0), None, dec!(10)),
        ]);

        assert!(matches!(result, Err(CalculationError::InvalidBrackets(_))));
    }
}
