use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::DeductionLimits;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Persistence boundary for the admin-adjustable deduction limits.
///
/// Update methods return the value read back after writing, so callers
/// report what is actually stored.
#[async_trait]
pub trait DeductionRepository: Send + Sync {
    async fn get_personal_deduction(&self) -> Result<Decimal, RepositoryError>;

    async fn update_personal_deduction(
        &self,
        amount: Decimal,
    ) -> Result<Decimal, RepositoryError>;

    async fn get_k_receipt_cap(&self) -> Result<Decimal, RepositoryError>;

    async fn update_k_receipt_cap(
        &self,
        amount: Decimal,
    ) -> Result<Decimal, RepositoryError>;

    /// Both limits, as needed by a single calculation.
    async fn get_deduction_limits(&self) -> Result<DeductionLimits, RepositoryError> {
        Ok(DeductionLimits {
            personal_deduction: self.get_personal_deduction().await?,
            k_receipt_cap: self.get_k_receipt_cap().await?,
        })
    }
}
