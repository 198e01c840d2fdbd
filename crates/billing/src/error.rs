//! Billing error types

use thiserror::Error;

/// Result alias for billing operations
pub type BillingResult<T> = Result<T, BillingError>;

/// Errors from the billing module
#[derive(Debug, Error)]
pub enum BillingError {
    /// Missing or invalid billing configuration
    #[error("billing configuration error: {0}")]
    Config(String),

    /// Error from the Stripe SDK or API. All provider error kinds
    /// (rate limiting, invalid request, network failure) collapse into
    /// this variant carrying the provider's message text.
    #[error("{0}")]
    StripeApi(String),

    /// The caller has no Stripe customer on record
    #[error("No billing account found")]
    NoBillingAccount,

    /// Internal billing error
    #[error("internal billing error: {0}")]
    Internal(String),
}

impl From<stripe::StripeError> for BillingError {
    fn from(err: stripe::StripeError) -> Self {
        BillingError::StripeApi(err.to_string())
    }
}
