//! API error type and its mapping to HTTP responses.
//!
//! Every error body has the shape `{"message": "..."}`.

use axum::{
    Json,
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tax_core::{CalculationError, DeductionLimitError, RepositoryError};
use tax_data::CsvBatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body or missing upload field (400)
    #[error("{0}")]
    BadRequest(String),

    /// Missing or wrong admin credentials (401)
    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error(transparent)]
    DeductionLimit(#[from] DeductionLimitError),

    #[error(transparent)]
    CsvBatch(#[from] CsvBatchError),

    /// Persistence failure (500)
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)
            | ApiError::Calculation(_)
            | ApiError::DeductionLimit(_)
            | ApiError::CsvBatch(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }

        let body = Json(json!({ "message": self.to_string() }));
        let mut response = (status, body).into_response();

        if matches!(self, ApiError::Unauthorized(_)) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"admin\""),
            );
        }
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
