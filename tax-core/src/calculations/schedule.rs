//! The fixed five-bracket personal income-tax table.

use rust_decimal_macros::dec;

use crate::TaxBracket;

/// Builds the standard bracket table, ascending by lower bound.
///
/// | Level | Lower | Upper | Rate |
/// |-------|-------|-------|------|
/// | `0 - 150,000` | 0 | 150,000 | 0% |
/// | `150,001 - 500,000` | 150,000 | 500,000 | 10% |
/// | `500,001 - 1,000,000` | 500,000 | 1,000,000 | 15% |
/// | `1,000,001 - 2,000,000` | 1,000,000 | 2,000,000 | 20% |
/// | `2,000,001 ขึ้นไป` | 2,000,000 | none | 35% |
pub fn standard_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new("0 - 150,000", dec!(0), Some(dec!(150000)), dec!(0)),
        TaxBracket::new("150,001 - 500,000", dec!(150000), Some(dec!(500000)), dec!(10)),
        TaxBracket::new("500,001 - 1,000,000", dec!(500000), Some(dec!(1000000)), dec!(15)),
        TaxBracket::new("1,000,001 - 2,000,000", dec!(1000000), Some(dec!(2000000)), dec!(20)),
        TaxBracket::new("2,000,001 ขึ้นไป", dec!(2000000), None, dec!(35)),
    ]
}
