pub mod admin;
pub mod auth;
pub mod calculations;
pub mod dto;

pub use admin::{set_k_receipt_cap, set_personal_deduction};
pub use auth::{AdminCredentials, admin_auth};
pub use calculations::{calculate_tax, calculate_tax_csv};
