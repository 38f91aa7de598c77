use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::{Row, TypeInfo, ValueRef};
use tax_core::RepositoryError;

/// Reads a decimal column stored as either INTEGER or REAL.
///
/// SQLite keeps `60000.00` written through a literal as INTEGER affinity in
/// some cases and REAL in others, so both are accepted. NULL is an error:
/// a deduction limit is never optional.
pub fn get_decimal(
    row: &sqlx::sqlite::SqliteRow,
    column: &str,
) -> Result<Decimal, RepositoryError> {
    let value_ref = row
        .try_get_raw(column)
        .map_err(|e| RepositoryError::Database(format!("Column '{}' not found: {}", column, e)))?;

    let type_info = value_ref.type_info();
    let type_name = type_info.name();

    match type_name {
        "INTEGER" => {
            let val: i64 = row.try_get(column).map_err(|e| {
                RepositoryError::Database(format!("Failed to get INTEGER from '{}': {}", column, e))
            })?;
            Ok(Decimal::from(val))
        }
        "REAL" => {
            let val: f64 = row.try_get(column).map_err(|e| {
                RepositoryError::Database(format!("Failed to get REAL from '{}': {}", column, e))
            })?;
            Decimal::try_from(val)
                .map(|d| d.normalize())
                .map_err(|e| {
                    RepositoryError::Database(format!("Failed to convert {} to Decimal: {}", val, e))
                })
        }
        _ => Err(RepositoryError::Database(format!(
            "Unexpected type '{}' for column '{}'",
            type_name, column
        ))),
    }
}

/// Converts a Decimal to f64 for a REAL column.
///
/// A value with no finite f64 form is an error rather than a stored zero.
pub fn decimal_to_f64(d: Decimal) -> Result<f64, RepositoryError> {
    d.to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RepositoryError::Database(format!("Cannot store {} as REAL", d)))
}
