//! Billing routes backed by Stripe

use axum::{extract::State, Json};
use serde::Serialize;

use basekit_billing::{PortalSession, SubscriptionInfo, UsageSummary};

use crate::{error::ApiError, state::AppState};

/// Response from creating a customer session
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSessionResponse {
    pub client_secret: String,
    pub customer_id: String,
}

/// Get current subscription info
pub async fn get_subscription(
    State(state): State<AppState>,
) -> Result<Json<SubscriptionInfo>, ApiError> {
    let billing = state.billing.as_ref().ok_or(ApiError::StripeNotConfigured)?;

    let info = billing.subscriptions.current_subscription().await?;

    Ok(Json(info))
}

/// Create a Stripe customer session for the pricing table
pub async fn create_customer_session(
    State(state): State<AppState>,
) -> Result<Json<CustomerSessionResponse>, ApiError> {
    let billing = state.billing.as_ref().ok_or(ApiError::StripeNotConfigured)?;

    // TODO: reuse the caller's customer from the persistence layer instead of
    // creating a new one per call.
    let customer = billing.customer.create_customer().await?;
    let session = billing
        .customer
        .create_customer_session(customer.id.as_str())
        .await?;

    Ok(Json(CustomerSessionResponse {
        client_secret: session.client_secret,
        customer_id: customer.id.to_string(),
    }))
}

/// Create a Stripe billing portal session
pub async fn create_portal_session(
    State(state): State<AppState>,
) -> Result<Json<PortalSession>, ApiError> {
    let billing = state.billing.as_ref().ok_or(ApiError::StripeNotConfigured)?;

    let session = billing.portal.create_portal_session().await?;

    Ok(Json(session))
}

/// Get usage info for the current plan
pub async fn get_usage(State(state): State<AppState>) -> Json<UsageSummary> {
    Json(state.usage.current_usage())
}
