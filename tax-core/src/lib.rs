pub mod calculations;
pub mod db;
pub mod models;

pub use calculations::{CalculationError, TaxCalculator};
pub use db::repository::{DeductionRepository, RepositoryError};
pub use models::*;
