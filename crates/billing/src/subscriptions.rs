//! Subscription lookup

use serde::Serialize;

use crate::error::BillingResult;
use crate::plans::PlanType;

/// Subscription info returned to the web app
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInfo {
    pub plan_type: PlanType,
    pub has_customer: bool,
    /// Live subscription details, populated once customer resolution exists
    pub subscription: Option<serde_json::Value>,
}

/// Subscription service for reporting the caller's plan
#[derive(Debug, Clone, Default)]
pub struct SubscriptionService;

impl SubscriptionService {
    pub fn new() -> Self {
        Self
    }

    /// Get the caller's current subscription.
    ///
    /// TODO: resolve the caller's Stripe customer via the auth middleware and
    /// the persistence layer, then fetch the live subscription from Stripe.
    /// Until then every caller reports as a free-tier user with no customer.
    pub async fn current_subscription(&self) -> BillingResult<SubscriptionInfo> {
        Ok(SubscriptionInfo {
            plan_type: PlanType::Free,
            has_customer: false,
            subscription: None,
        })
    }
}
