//! API error types and HTTP response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use basekit_billing::BillingError;

/// Result alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors mapped to HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authorization header missing or malformed
    #[error("Missing or invalid authorization header")]
    Unauthorized,

    /// Stripe secret key is not configured
    #[error("Stripe not configured")]
    StripeNotConfigured,

    /// The caller has no billing account yet
    #[error("No billing account found")]
    NoBillingAccount,

    /// Upstream Stripe failure; the provider's message is passed through
    #[error("{0}")]
    Stripe(String),

    /// Anything else
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NoBillingAccount => StatusCode::NOT_FOUND,
            ApiError::StripeNotConfigured | ApiError::Stripe(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<BillingError> for ApiError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::NoBillingAccount => ApiError::NoBillingAccount,
            BillingError::Config(msg) => ApiError::Internal(msg),
            BillingError::Internal(msg) => ApiError::Internal(msg),
            BillingError::StripeApi(msg) => ApiError::Stripe(msg),
        }
    }
}
