//! HTTP service for progressive income-tax calculation.
//!
//! Public routes compute tax from JSON or an uploaded CSV; admin routes,
//! behind basic authentication, adjust the stored deduction limits.

use std::sync::Arc;

use axum::Router;
use tax_core::{DeductionRepository, TaxCalculator};

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use api::AdminCredentials;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn DeductionRepository>,
    pub calculator: Arc<TaxCalculator>,
    pub admin: Arc<AdminCredentials>,
}

impl AppState {
    pub fn new(
        repo: Arc<dyn DeductionRepository>,
        calculator: TaxCalculator,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            repo,
            calculator: Arc::new(calculator),
            admin: Arc::new(admin),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::post;

    let admin = Router::new()
        .route("/admin/deductions/personal", post(api::set_personal_deduction))
        .route("/admin/deductions/k-receipt", post(api::set_k_receipt_cap))
        .layer(middleware::from_fn_with_state(state.clone(), api::admin_auth));

    let public = Router::new()
        .route("/tax/calculations", post(api::calculate_tax))
        .route("/tax/calculations/upload-csv", post(api::calculate_tax_csv));

    Router::new()
        .merge(admin)
        .merge(public)
        .with_state(state)
}
