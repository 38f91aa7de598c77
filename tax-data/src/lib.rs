//! Batch tax computation from CSV files.
//!
//! [`csv_loader`] turns a CSV document into [`CsvTaxRecord`]s and [`batch`]
//! runs each one through the calculator, producing the `{"taxes": [...]}`
//! report shared by the upload endpoint and the `tax-batch` command.

pub mod batch;
pub mod csv_loader;

pub use batch::{BatchTaxReport, BatchTaxResult, compute_batch};
pub use csv_loader::{CsvBatchError, CsvTaxRecord};
