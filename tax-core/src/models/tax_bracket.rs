use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One contiguous slice of taxable income taxed at a single rate.
///
/// `max_income` of `None` marks the top bracket, which has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub label: String,
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    /// Marginal rate as a percentage, e.g. `10` for 10%.
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        label: impl Into<String>,
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            label: label.into(),
            min_income,
            max_income,
            tax_rate,
        }
    }

    /// Amount of income this bracket can absorb, or `None` when unbounded.
    pub fn width(&self) -> Option<Decimal> {
        self.max_income.map(|max| max - self.min_income)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_income.is_none()
    }
}
