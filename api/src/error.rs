//! Error responses returned by the handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("INVALID PARAMETERS")]
    InvalidParameters,

    #[error("Invalid parameter ID")]
    InvalidId,

    #[error("Payment ID Not Found.")]
    PaymentNotFound,

    #[error("Charge doesn't exist")]
    ChargeNotFound,

    #[error("Payment type is not accepted.")]
    UnsupportedPaymentType,

    #[error("Payment with this ID already exists")]
    DuplicatePayment,

    #[error("Charge with this ID already exists")]
    DuplicateCharge,

    /// The detail is logged, never sent to the client.
    #[error("Database Error")]
    Database(String),
}

impl ApiError {
    /// Logs a failed store call and turns it into a 500.
    pub fn database(action: &str, detail: String) -> Self {
        error!(error = %detail, "failed to {}", action);
        ApiError::Database(detail)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameters
            | ApiError::UnsupportedPaymentType
            | ApiError::DuplicatePayment
            | ApiError::DuplicateCharge => StatusCode::BAD_REQUEST,
            ApiError::InvalidId | ApiError::PaymentNotFound | ApiError::ChargeNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body; `code` mirrors the HTTP status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
