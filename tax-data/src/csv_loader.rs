//! CSV reader for batch tax input.
//!
//! ## CSV Format
//!
//! The first row is a header and is skipped without being inspected. Every
//! following row has exactly three cells, matched **by position**:
//!
//! | Position | Meaning                | Type    |
//! |----------|------------------------|---------|
//! | 1        | total income           | decimal |
//! | 2        | withholding tax (wht)  | decimal |
//! | 3        | donation claimed       | decimal |
//!
//! Cells are trimmed of surrounding whitespace. Amounts must lie in
//! `0..=MAX_AMOUNT`; anything else is rejected.
//!
//! ```csv
//! totalIncome,wht,donation
//! 500000.0,0.0,0.0
//! 600000.0,40000.0,20000.0
//! ```
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use tax_core::calculations::{TaxInput, check_amount};
use tax_core::{AllowanceType, CalculationError};

const COLUMNS: [&str; 3] = ["totalIncome", "wht", "donation"];

/// Errors that can occur while reading or computing a CSV batch.
#[derive(Debug, thiserror::Error)]
pub enum CsvBatchError {
    /// The CSV could not be read at all (bad quoting, I/O failure).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A data row could not be turned into a tax input. `row` is 1-based
    /// and does not count the header.
    #[error("row {row}: {message}")]
    Conversion { row: usize, message: String },

    /// A parsed row was refused by the calculator. `row` is 1-based.
    #[error("row {row}: {source}")]
    Calculation {
        row: usize,
        #[source]
        source: CalculationError,
    },
}

/// One data row of the batch file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvTaxRecord {
    pub total_income: Decimal,
    pub wht: Decimal,
    pub donation: Decimal,
}

impl CsvTaxRecord {
    /// The calculator input for this row. Personal allowance is left to the
    /// configured default; the donation is claimed as given.
    pub fn to_input(&self) -> TaxInput {
        TaxInput::new(self.total_income, self.wht)
            .with_allowance(AllowanceType::Donation, self.donation)
    }
}

fn parse_cell(
    record: &csv::StringRecord,
    index: usize,
    row: usize,
) -> Result<Decimal, CsvBatchError> {
    let column = COLUMNS[index];
    let raw = record.get(index).unwrap_or_default();
    let value = raw
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| CsvBatchError::Conversion {
            row,
            message: format!("{column} '{raw}' is not a number"),
        })?;

    check_amount(column, value).map_err(|e| CsvBatchError::Conversion {
        row,
        message: e.to_string(),
    })
}

/// Convert a single CSV record. `row` is 1-based (for error messages).
fn convert_record(
    record: &csv::StringRecord,
    row: usize,
) -> Result<CsvTaxRecord, CsvBatchError> {
    if record.len() != COLUMNS.len() {
        return Err(CsvBatchError::Conversion {
            row,
            message: format!("expected {} columns, found {}", COLUMNS.len(), record.len()),
        });
    }

    Ok(CsvTaxRecord {
        total_income: parse_cell(record, 0, row)?,
        wht: parse_cell(record, 1, row)?,
        donation: parse_cell(record, 2, row)?,
    })
}

/// Parse a batch from any reader. Rows are returned in file order.
///
/// # Errors
///
/// * [`CsvBatchError::Parse`] if the CSV is structurally unreadable.
/// * [`CsvBatchError::Conversion`] for the first row with the wrong number
///   of cells or a cell that is not a number in `0..=MAX_AMOUNT`. Nothing is
///   returned for the rows before it.
pub fn parse<R: Read>(reader: R) -> Result<Vec<CsvTaxRecord>, CsvBatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true) // column count is checked per row
        .from_reader(reader);

    reader
        .records()
        .enumerate()
        .map(|(idx, result)| {
            let record = result?;
            convert_record(&record, idx + 1)
        })
        .collect()
}

/// Parse CSV text held in memory.
pub fn load_from_str(input: &str) -> Result<Vec<CsvTaxRecord>, CsvBatchError> {
    parse(input.as_bytes())
}

/// Read a file from disk and delegate to [`parse`].
pub fn load_from_file(path: &Path) -> anyhow::Result<Vec<CsvTaxRecord>> {
    let file = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open '{}': {e}", path.display()))?;
    Ok(parse(file)?)
}
